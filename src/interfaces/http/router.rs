//! API router with Swagger UI

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, MessageResponse};
use super::modules::{
    availability_monitors, health, invoices, logs, metrics, parking_reservation_managers,
    parking_space_managers, parking_spaces, parking_spots, payment_methods, payments, request_id,
    reservations,
};
use super::state::AppState;

/// Documents the forwarded identity header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_name",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "X-User-Name",
                    "Authenticated user name forwarded by the gateway",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handlers::health_check,
        parking_spaces::create_parking_space,
        parking_spaces::list_parking_spaces,
        parking_spaces::get_parking_space,
        parking_spaces::update_parking_space,
        parking_spaces::delete_parking_space,
        parking_spots::create_parking_spot,
        parking_spots::list_parking_spots,
        parking_spots::get_parking_spot,
        parking_spots::update_parking_spot,
        parking_spots::delete_parking_spot,
        parking_space_managers::create_parking_space_manager,
        parking_space_managers::list_parking_space_managers,
        parking_space_managers::get_parking_space_manager,
        parking_space_managers::update_parking_space_manager,
        parking_space_managers::delete_parking_space_manager,
        parking_reservation_managers::create_parking_reservation_manager,
        parking_reservation_managers::list_parking_reservation_managers,
        parking_reservation_managers::get_parking_reservation_manager,
        parking_reservation_managers::update_parking_reservation_manager,
        parking_reservation_managers::delete_parking_reservation_manager,
        availability_monitors::create_availability_monitor,
        availability_monitors::list_availability_monitors,
        availability_monitors::get_availability_monitor,
        availability_monitors::update_availability_monitor,
        availability_monitors::delete_availability_monitor,
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::update_reservation,
        reservations::delete_reservation,
        payment_methods::create_payment_method,
        payment_methods::list_payment_methods,
        payment_methods::get_payment_method,
        payment_methods::update_payment_method,
        payment_methods::delete_payment_method,
        payments::create_payment,
        payments::list_payments,
        payments::get_payment,
        payments::update_payment,
        payments::delete_payment,
        invoices::create_invoice,
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::update_invoice,
        invoices::delete_invoice,
        logs::list_logs,
        logs::list_my_logs,
    ),
    components(
        schemas(
            MessageResponse,
            ApiResponse<String>,
            health::HealthResponse,
            health::handlers::ComponentHealth,
            parking_spaces::ParkingSpaceRequest,
            parking_spaces::ParkingSpaceResponse,
            parking_spaces::ParkingSpaceDetailsResponse,
            parking_spots::ParkingSpotRequest,
            parking_spots::ParkingSpotResponse,
            parking_space_managers::ParkingSpaceManagerRequest,
            parking_space_managers::ParkingSpaceManagerResponse,
            parking_space_managers::ParkingSpaceManagerDetailsResponse,
            parking_reservation_managers::ParkingReservationManagerRequest,
            parking_reservation_managers::ParkingReservationManagerResponse,
            availability_monitors::AvailabilityMonitorRequest,
            availability_monitors::AvailabilityMonitorResponse,
            availability_monitors::AvailabilityMonitorDetailsResponse,
            reservations::ReservationRequest,
            reservations::ReservationResponse,
            payment_methods::PaymentMethodRequest,
            payment_methods::PaymentMethodResponse,
            payments::PaymentRequest,
            payments::PaymentResponse,
            invoices::InvoiceRequest,
            invoices::InvoiceResponse,
            logs::LogResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service and database health"),
        (name = "ParkingSpace", description = "Parking areas with managers and an availability monitor"),
        (name = "ParkingSpot", description = "Individually bookable spots"),
        (name = "ParkingSpaceManager", description = "Staff assigned to a parking space"),
        (name = "ParkingReservationManager", description = "Staff handling reservations"),
        (name = "AvailabilityMonitor", description = "Up/down tracking for a parking space"),
        (name = "Reservation", description = "Bookings of a spot"),
        (name = "PaymentMethod", description = "Ways to pay"),
        (name = "Payment", description = "Payments made by a method"),
        (name = "Invoice", description = "Billing documents"),
        (name = "Log", description = "Audit trail of mutating requests"),
    ),
    info(
        title = "Parking Reservations API",
        version = "1.0.0",
        description = "CRUD API for parking spaces, spots, reservations and payments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn parking_space_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(parking_spaces::create_parking_space))
        .route("/Get", get(parking_spaces::list_parking_spaces))
        .route(
            "/{id}",
            get(parking_spaces::get_parking_space)
                .put(parking_spaces::update_parking_space)
                .delete(parking_spaces::delete_parking_space),
        )
}

fn parking_spot_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(parking_spots::create_parking_spot))
        .route("/Get", get(parking_spots::list_parking_spots))
        .route(
            "/{id}",
            get(parking_spots::get_parking_spot)
                .put(parking_spots::update_parking_spot)
                .delete(parking_spots::delete_parking_spot),
        )
}

fn parking_space_manager_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Create",
            post(parking_space_managers::create_parking_space_manager),
        )
        .route(
            "/Get",
            get(parking_space_managers::list_parking_space_managers),
        )
        .route(
            "/{id}",
            get(parking_space_managers::get_parking_space_manager)
                .put(parking_space_managers::update_parking_space_manager)
                .delete(parking_space_managers::delete_parking_space_manager),
        )
}

fn parking_reservation_manager_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Create",
            post(parking_reservation_managers::create_parking_reservation_manager),
        )
        .route(
            "/Get",
            get(parking_reservation_managers::list_parking_reservation_managers),
        )
        .route(
            "/{id}",
            get(parking_reservation_managers::get_parking_reservation_manager)
                .put(parking_reservation_managers::update_parking_reservation_manager)
                .delete(parking_reservation_managers::delete_parking_reservation_manager),
        )
}

fn availability_monitor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/Create",
            post(availability_monitors::create_availability_monitor),
        )
        .route("/Get", get(availability_monitors::list_availability_monitors))
        .route(
            "/{id}",
            get(availability_monitors::get_availability_monitor)
                .put(availability_monitors::update_availability_monitor)
                .delete(availability_monitors::delete_availability_monitor),
        )
}

fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(reservations::create_reservation))
        .route("/Get", get(reservations::list_reservations))
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
}

fn payment_method_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(payment_methods::create_payment_method))
        .route("/Get", get(payment_methods::list_payment_methods))
        .route(
            "/{id}",
            get(payment_methods::get_payment_method)
                .put(payment_methods::update_payment_method)
                .delete(payment_methods::delete_payment_method),
        )
}

fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(payments::create_payment))
        .route("/Get", get(payments::list_payments))
        .route(
            "/{id}",
            get(payments::get_payment)
                .put(payments::update_payment)
                .delete(payments::delete_payment),
        )
}

fn invoice_routes() -> Router<AppState> {
    Router::new()
        .route("/Create", post(invoices::create_invoice))
        .route("/Get", get(invoices::list_invoices))
        .route(
            "/{id}",
            get(invoices::get_invoice)
                .put(invoices::update_invoice)
                .delete(invoices::delete_invoice),
        )
}

fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/Get", get(logs::list_logs))
        .route("/Mine", get(logs::list_my_logs))
}

/// Build the full router: resources under `/api`, health, metrics and docs.
pub fn create_api_router(
    state: AppState,
    db: DatabaseConnection,
    prometheus_handle: PrometheusHandle,
) -> Router {
    let api_routes = Router::new()
        .nest("/api/ParkingSpace", parking_space_routes())
        .nest("/api/ParkingSpot", parking_spot_routes())
        .nest("/api/ParkingSpaceManager", parking_space_manager_routes())
        .nest(
            "/api/ParkingReservationManager",
            parking_reservation_manager_routes(),
        )
        .nest("/api/AvailabilityMonitor", availability_monitor_routes())
        .nest("/api/Reservation", reservation_routes())
        .nest("/api/PaymentMethod", payment_method_routes())
        .nest("/api/Payment", payment_routes())
        .nest("/api/Invoice", invoice_routes())
        .nest("/api/Log", log_routes())
        .with_state(state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new(db));

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: prometheus_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(api_routes)
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
