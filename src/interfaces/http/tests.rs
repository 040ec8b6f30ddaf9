//! End-to-end tests: the full router against an in-memory database.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::{create_api_router, AppState};
use crate::infrastructure::database::test_support::migrated_db;
use crate::infrastructure::SeaOrmRepositoryProvider;

const RESOURCES: [&str; 9] = [
    "ParkingSpace",
    "ParkingSpot",
    "ParkingSpaceManager",
    "ParkingReservationManager",
    "AvailabilityMonitor",
    "Reservation",
    "PaymentMethod",
    "Payment",
    "Invoice",
];

async fn app() -> Router {
    let db = migrated_db().await;
    let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    create_api_router(AppState::new(repos), db, prometheus)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    user: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Name", user);
    }
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None, None).await
}

/// POST `/api/{resource}/Create` and return the new id.
async fn create(app: &Router, resource: &str, body: Value) -> i32 {
    let (status, resp) = send(
        app,
        Method::POST,
        &format!("/api/{}/Create", resource),
        Some(body),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}: {}", resource, resp);
    resp["id"].as_i64().unwrap() as i32
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

fn space_body() -> Value {
    json!({"location": "A1", "size": "M", "status": "active", "pricePerHour": 2.50})
}

fn spot_body() -> Value {
    json!({"location": "Level 1 / 14", "size": "S", "status": "free", "pricePerHour": 1.75})
}

fn monitor_body(space_id: i32) -> Value {
    json!({
        "status": "up",
        "upTime": "2026-05-01T06:00:00Z",
        "downTime": "2026-05-01T05:00:00Z",
        "checkInterval": "2026-05-01T00:05:00Z",
        "parkingSpaceId": space_id
    })
}

fn reservation_body(spot_id: i32, manager_id: i32) -> Value {
    json!({
        "startDate": "2026-05-01T08:00:00Z",
        "endDate": "2026-05-01T10:00:00Z",
        "status": "booked",
        "totalAmount": 3.5,
        "parkingSpotId": spot_id,
        "parkingReservationManagerId": manager_id
    })
}

// ── Create then read back ──────────────────────────────────────

#[tokio::test]
async fn parking_space_round_trip_with_relations() {
    let app = app().await;
    let space = create(&app, "ParkingSpace", space_body()).await;
    create(
        &app,
        "ParkingSpaceManager",
        json!({"status": "on duty", "pagesa": 45.5, "kontakti": "555-0101", "parkingSpaceId": space}),
    )
    .await;
    create(&app, "AvailabilityMonitor", monitor_body(space)).await;

    let (status, body) = get(&app, &format!("/api/ParkingSpace/{}", space)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"], "A1");
    assert_eq!(body["size"], "M");
    assert_eq!(body["status"], "active");
    assert_eq!(body["pricePerHour"], json!(2.5));
    assert_eq!(body["parkingSpaceManagers"][0]["paymentAmount"], json!(45.5));
    assert_eq!(body["parkingSpaceManagers"][0]["contact"], "555-0101");
    assert_eq!(body["availabilityMonitor"]["parkingSpaceId"], json!(space));
}

#[tokio::test]
async fn create_parking_space_then_get_all() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/ParkingSpace/Create",
        Some(space_body()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ParkingSpace Created Successfully");

    let (status, all) = get(&app, "/api/ParkingSpace/Get").await;
    assert_eq!(status, StatusCode::OK);
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["location"], "A1");
    assert_eq!(all[0]["pricePerHour"], json!(2.5));
    assert_eq!(all[0]["parkingSpaceManagers"], json!([]));
    assert_eq!(all[0]["availabilityMonitor"], Value::Null);
}

#[tokio::test]
async fn reservation_round_trip_attaches_spot_and_manager() {
    let app = app().await;
    let spot = create(&app, "ParkingSpot", spot_body()).await;
    let manager = create(
        &app,
        "ParkingReservationManager",
        json!({"managerName": "Dana", "managerContact": "dana@example.com"}),
    )
    .await;
    let id = create(&app, "Reservation", reservation_body(spot, manager)).await;

    let (status, body) = get(&app, &format!("/api/Reservation/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        timestamp(&body["startDate"]),
        "2026-05-01T08:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(
        timestamp(&body["endDate"]),
        "2026-05-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap()
    );
    assert_eq!(body["status"], "booked");
    assert_eq!(body["totalAmount"], json!(3.5));
    assert_eq!(body["parkingSpot"]["location"], "Level 1 / 14");
    assert_eq!(body["parkingReservationManager"]["managerName"], "Dana");
}

#[tokio::test]
async fn payment_round_trip_attaches_method() {
    let app = app().await;
    let method = create(
        &app,
        "PaymentMethod",
        json!({"type": "card", "details": "visa **** 4242"}),
    )
    .await;
    let id = create(
        &app,
        "Payment",
        json!({"amount": 12.0, "date": "2026-05-02T12:00:00Z", "status": "paid", "paymentMethodId": method}),
    )
    .await;

    let (status, body) = get(&app, &format!("/api/Payment/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], json!(12.0));
    assert_eq!(body["status"], "paid");
    assert_eq!(body["invoiceId"], Value::Null);
    assert_eq!(body["paymentMethod"]["type"], "card");
    assert_eq!(body["paymentMethod"]["details"], "visa **** 4242");
}

#[tokio::test]
async fn flat_resources_round_trip() {
    let app = app().await;

    let invoice = create(
        &app,
        "Invoice",
        json!({"dateGenerated": "2026-05-31T00:00:00Z", "totalAmount": 40.0}),
    )
    .await;
    let (_, body) = get(&app, &format!("/api/Invoice/{}", invoice)).await;
    assert_eq!(body["totalAmount"], json!(40.0));

    let spot = create(&app, "ParkingSpot", spot_body()).await;
    let (_, body) = get(&app, &format!("/api/ParkingSpot/{}", spot)).await;
    assert_eq!(body["pricePerHour"], json!(1.75));
    assert_eq!(body["status"], "free");

    let method = create(&app, "PaymentMethod", json!({"type": "cash", "details": ""})).await;
    let (_, body) = get(&app, &format!("/api/PaymentMethod/{}", method)).await;
    assert_eq!(body["type"], "cash");
}

// ── Not found ──────────────────────────────────────────────────

#[tokio::test]
async fn missing_ids_are_not_found_for_every_resource() {
    let app = app().await;
    for resource in RESOURCES {
        let uri = format!("/api/{}/999", resource);

        let (status, body) = send(&app, Method::DELETE, &uri, None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {}", resource);
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].as_str().unwrap().ends_with("Not Found"));

        let (status, _) = get(&app, &uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {}", resource);
    }
}

#[tokio::test]
async fn not_found_message_names_the_entity() {
    let app = app().await;
    let (_, body) = get(&app, "/api/ParkingSpot/42").await;
    assert_eq!(body["error"], "Parking Spot Not Found");
}

#[tokio::test]
async fn update_of_missing_row_changes_nothing() {
    let app = app().await;
    create(&app, "ParkingSpace", space_body()).await;
    create(
        &app,
        "Invoice",
        json!({"dateGenerated": "2026-05-01T00:00:00Z", "totalAmount": 3.5}),
    )
    .await;
    let spaces_before = get(&app, "/api/ParkingSpace/Get").await.1;
    let invoices_before = get(&app, "/api/Invoice/Get").await.1;

    let mut changed = space_body();
    changed["location"] = json!("Elsewhere");
    let (status, _) = send(&app, Method::PUT, "/api/ParkingSpace/999", Some(changed), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/Invoice/999",
        Some(json!({"dateGenerated": "2026-05-31T00:00:00Z", "totalAmount": 1.0})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(get(&app, "/api/ParkingSpace/Get").await.1, spaces_before);
    assert_eq!(get(&app, "/api/Invoice/Get").await.1, invoices_before);
    assert_eq!(spaces_before.as_array().unwrap().len(), 1);
    assert_eq!(invoices_before.as_array().unwrap().len(), 1);
}

// ── Update semantics ───────────────────────────────────────────

#[tokio::test]
async fn updates_restamp_server_times() {
    let app = app().await;
    let space = create(&app, "ParkingSpace", space_body()).await;
    let spot = create(&app, "ParkingSpot", spot_body()).await;
    let manager = create(
        &app,
        "ParkingReservationManager",
        json!({"managerName": "Lee", "managerContact": "x"}),
    )
    .await;
    let reservation = create(&app, "Reservation", reservation_body(spot, manager)).await;
    let monitor = create(&app, "AvailabilityMonitor", monitor_body(space)).await;

    let space_uri = format!("/api/ParkingSpace/{}", space);
    let reservation_uri = format!("/api/Reservation/{}", reservation);
    let monitor_uri = format!("/api/AvailabilityMonitor/{}", monitor);
    let before_space = get(&app, &space_uri).await.1;
    let before_reservation = get(&app, &reservation_uri).await.1;
    let before_monitor = get(&app, &monitor_uri).await.1;

    tokio::time::sleep(Duration::from_millis(20)).await;

    let mut body = space_body();
    body["status"] = json!("closed");
    assert_eq!(send(&app, Method::PUT, &space_uri, Some(body), None).await.0, StatusCode::OK);
    let mut body = reservation_body(spot, manager);
    body["status"] = json!("cancelled");
    assert_eq!(
        send(&app, Method::PUT, &reservation_uri, Some(body), None).await.0,
        StatusCode::OK
    );
    let mut body = monitor_body(space);
    body["status"] = json!("down");
    assert_eq!(send(&app, Method::PUT, &monitor_uri, Some(body), None).await.0, StatusCode::OK);

    let after_space = get(&app, &space_uri).await.1;
    assert_eq!(after_space["status"], "closed");
    assert!(timestamp(&after_space["updatedAt"]) > timestamp(&before_space["updatedAt"]));
    assert_eq!(after_space["createdAt"], before_space["createdAt"]);

    let after_reservation = get(&app, &reservation_uri).await.1;
    assert_eq!(after_reservation["status"], "cancelled");
    assert!(
        timestamp(&after_reservation["updatedAt"]) > timestamp(&before_reservation["updatedAt"])
    );

    let after_monitor = get(&app, &monitor_uri).await.1;
    assert_eq!(after_monitor["status"], "down");
    assert!(
        timestamp(&after_monitor["lastCheckedTime"])
            > timestamp(&before_monitor["lastCheckedTime"])
    );
}

#[tokio::test]
async fn update_leaves_foreign_keys_alone() {
    let app = app().await;
    let first = create(&app, "ParkingSpace", space_body()).await;
    let second = create(&app, "ParkingSpace", space_body()).await;
    let manager = create(
        &app,
        "ParkingSpaceManager",
        json!({"status": "on duty", "paymentAmount": 10, "contact": "a", "parkingSpaceId": first}),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/ParkingSpaceManager/{}", manager),
        Some(json!({"status": "off", "paymentAmount": 11, "contact": "b", "parkingSpaceId": second})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ParkingSpaceManager Updated Successfully");

    let (_, body) = get(&app, &format!("/api/ParkingSpaceManager/{}", manager)).await;
    assert_eq!(body["contact"], "b");
    assert_eq!(body["parkingSpaceId"], json!(first));
    assert_eq!(body["parkingSpace"]["id"], json!(first));
}

// ── Constraints ────────────────────────────────────────────────

#[tokio::test]
async fn reservation_for_unknown_spot_is_rejected() {
    let app = app().await;
    let manager = create(
        &app,
        "ParkingReservationManager",
        json!({"managerName": "Lee", "managerContact": "x"}),
    )
    .await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/Reservation/Create",
        Some(reservation_body(404, manager)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(get(&app, "/api/Reservation/Get").await.1, json!([]));
}

#[tokio::test]
async fn second_monitor_for_a_space_is_rejected() {
    let app = app().await;
    let space = create(&app, "ParkingSpace", space_body()).await;
    create(&app, "AvailabilityMonitor", monitor_body(space)).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/AvailabilityMonitor/Create",
        Some(monitor_body(space)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        get(&app, "/api/AvailabilityMonitor/Get")
            .await
            .1
            .as_array()
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn deleting_a_space_removes_managers_and_monitor() {
    let app = app().await;
    let space = create(&app, "ParkingSpace", space_body()).await;
    create(
        &app,
        "ParkingSpaceManager",
        json!({"status": "on duty", "paymentAmount": 1, "contact": "a", "parkingSpaceId": space}),
    )
    .await;
    create(&app, "AvailabilityMonitor", monitor_body(space)).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/ParkingSpace/{}", space),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ParkingSpace Deleted Successfully");
    assert_eq!(body["id"], json!(space));

    assert_eq!(get(&app, "/api/ParkingSpaceManager/Get").await.1, json!([]));
    assert_eq!(get(&app, "/api/AvailabilityMonitor/Get").await.1, json!([]));
}

#[tokio::test]
async fn deleting_an_invoice_names_it() {
    let app = app().await;
    let invoice = create(
        &app,
        "Invoice",
        json!({"dateGenerated": "2026-05-31T00:00:00Z", "totalAmount": 5})
    )
    .await;
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/Invoice/{}", invoice),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Invoice Deleted");
    assert_eq!(get(&app, "/api/Invoice/Get").await.1, json!([]));
}

#[tokio::test]
async fn deleting_a_spot_names_it() {
    let app = app().await;
    let spot = create(&app, "ParkingSpot", spot_body()).await;
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/api/ParkingSpot/{}", spot),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Parking Spot Deleted");
    assert_eq!(body["id"], json!(spot));
}

// ── Validation ─────────────────────────────────────────────────

#[tokio::test]
async fn negative_money_is_unprocessable_and_not_stored() {
    let app = app().await;

    let mut body = space_body();
    body["pricePerHour"] = json!(-1);
    let (status, resp) = send(&app, Method::POST, "/api/ParkingSpace/Create", Some(body), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["error"].as_str().unwrap().contains("must be non-negative"));

    let method = create(&app, "PaymentMethod", json!({"type": "card", "details": ""})).await;
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/Payment/Create",
        Some(json!({"amount": -0.01, "date": "2026-05-02T12:00:00Z", "status": "paid", "paymentMethodId": method})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert_eq!(get(&app, "/api/ParkingSpace/Get").await.1, json!([]));
    assert_eq!(get(&app, "/api/Payment/Get").await.1, json!([]));
}

#[tokio::test]
async fn negative_price_on_update_keeps_old_value() {
    let app = app().await;
    let spot = create(&app, "ParkingSpot", spot_body()).await;
    let uri = format!("/api/ParkingSpot/{}", spot);

    let mut body = spot_body();
    body["pricePerHour"] = json!(-3);
    assert_eq!(
        send(&app, Method::PUT, &uri, Some(body), None).await.0,
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(get(&app, &uri).await.1["pricePerHour"], json!(1.75));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = app().await;
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/Invoice/Create")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"totalAmount\": "))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── Audit log ──────────────────────────────────────────────────

#[tokio::test]
async fn mutations_are_logged_per_caller() {
    let app = app().await;

    let (_, created) = send(
        &app,
        Method::POST,
        "/api/ParkingSpace/Create",
        Some(space_body()),
        Some("alice"),
    )
    .await;
    let space = created["id"].as_i64().unwrap();
    send(
        &app,
        Method::POST,
        "/api/ParkingSpot/Create",
        Some(spot_body()),
        Some("bob"),
    )
    .await;
    send(
        &app,
        Method::DELETE,
        &format!("/api/ParkingSpace/{}", space),
        None,
        Some("alice"),
    )
    .await;

    let (status, mine) = send(&app, Method::GET, "/api/Log/Mine", None, Some("alice")).await;
    assert_eq!(status, StatusCode::OK);
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|e| e["userName"] == "alice"));
    assert_eq!(mine[0]["description"], format!("Deleted ParkingSpace {}", space));
    assert_eq!(mine[1]["description"], format!("Created ParkingSpace {}", space));

    let (_, all) = get(&app, "/api/Log/Get").await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn failed_mutations_are_not_logged() {
    let app = app().await;
    send(&app, Method::DELETE, "/api/Payment/1", None, Some("carol")).await;
    let (_, mine) = send(&app, Method::GET, "/api/Log/Mine", None, Some("carol")).await;
    assert_eq!(mine, json!([]));
}

#[tokio::test]
async fn anonymous_writes_and_my_logs_without_identity() {
    let app = app().await;
    create(&app, "PaymentMethod", json!({"type": "cash", "details": ""})).await;

    let (_, all) = get(&app, "/api/Log/Get").await;
    assert_eq!(all[0]["userName"], "anonymous");

    let (status, body) = get(&app, "/api/Log/Mine").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], json!(false));
}

// ── Operational endpoints ──────────────────────────────────────

#[tokio::test]
async fn health_reports_database_ok() {
    let app = app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app().await;
    let (status, body) = get(&app, "/api-doc/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/Reservation/Create"].is_object());
}

#[tokio::test]
async fn metrics_endpoint_answers_text() {
    let app = app().await;
    let req = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app().await;
    let req = Request::builder()
        .uri("/api/Invoice/Get")
        .header("X-Request-Id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.headers()["x-request-id"], "abc-123");
}
