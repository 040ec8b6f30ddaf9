//! Parking reservation manager REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{ParkingReservationManagerRequest, ParkingReservationManagerResponse};
use crate::domain::{DomainError, ParkingReservationManager};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/ParkingReservationManager/Create",
    tag = "ParkingReservationManager",
    request_body = ParkingReservationManagerRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn create_parking_reservation_manager(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingReservationManagerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state
        .repos
        .parking_reservation_managers()
        .save(req.into_domain(0))
        .await?;
    state
        .logs
        .save_new_log(
            caller.name(),
            format!("Created ParkingReservationManager {}", saved.id),
        )
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", ParkingReservationManager::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/ParkingReservationManager/Get",
    tag = "ParkingReservationManager",
    responses(
        (status = 200, description = "All reservation managers", body = Vec<ParkingReservationManagerResponse>)
    )
)]
pub async fn list_parking_reservation_managers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingReservationManagerResponse>>, ApiError> {
    let managers = state.repos.parking_reservation_managers().find_all().await?;
    Ok(Json(managers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/ParkingReservationManager/{id}",
    tag = "ParkingReservationManager",
    params(("id" = i32, Path, description = "Reservation manager ID")),
    responses(
        (status = 200, description = "Reservation manager", body = ParkingReservationManagerResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_parking_reservation_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkingReservationManagerResponse>, ApiError> {
    let manager = state
        .repos
        .parking_reservation_managers()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ParkingReservationManager::ENTITY, id))?;
    Ok(Json(manager.into()))
}

#[utoipa::path(
    put,
    path = "/api/ParkingReservationManager/{id}",
    tag = "ParkingReservationManager",
    params(("id" = i32, Path, description = "Reservation manager ID")),
    request_body = ParkingReservationManagerRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_parking_reservation_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingReservationManagerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .repos
        .parking_reservation_managers()
        .update(req.into_domain(id))
        .await?;
    state
        .logs
        .save_new_log(
            caller.name(),
            format!("Updated ParkingReservationManager {}", id),
        )
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", ParkingReservationManager::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/ParkingReservationManager/{id}",
    tag = "ParkingReservationManager",
    params(("id" = i32, Path, description = "Reservation manager ID")),
    responses(
        (status = 200, description = "Deleted together with its reservations", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_parking_reservation_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_reservation_managers().delete(id).await?;
    state
        .logs
        .save_new_log(
            caller.name(),
            format!("Deleted ParkingReservationManager {}", id),
        )
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", ParkingReservationManager::ENTITY),
    )))
}
