//! Reservation REST API handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use super::dto::{ReservationRequest, ReservationResponse};
use crate::domain::{DomainError, Reservation};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/Reservation/Create",
    tag = "Reservation",
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>),
        (status = 500, description = "Unknown parking spot or manager", body = ApiResponse<String>)
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ReservationRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let reservation = req.into_domain(0);
    debug!(
        spot = reservation.parking_spot_id,
        minutes = reservation.duration_minutes(),
        "Creating reservation"
    );
    let saved = state.repos.reservations().save(reservation).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created Reservation {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", Reservation::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/Reservation/Get",
    tag = "Reservation",
    responses(
        (status = 200, description = "All reservations with spot and manager", body = Vec<ReservationResponse>)
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations = state.repos.reservations().find_all().await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/Reservation/{id}",
    tag = "Reservation",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation with spot and manager", body = ReservationResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(Reservation::ENTITY, id))?;
    Ok(Json(reservation.into()))
}

#[utoipa::path(
    put,
    path = "/api/Reservation/{id}",
    tag = "Reservation",
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ReservationRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.reservations().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated Reservation {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", Reservation::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/Reservation/{id}",
    tag = "Reservation",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.reservations().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted Reservation {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", Reservation::ENTITY),
    )))
}
