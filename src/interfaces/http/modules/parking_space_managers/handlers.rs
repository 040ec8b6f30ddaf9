//! Parking space manager REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{ParkingSpaceManagerDetailsResponse, ParkingSpaceManagerRequest};
use crate::domain::{DomainError, ParkingSpaceManager};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/ParkingSpaceManager/Create",
    tag = "ParkingSpaceManager",
    request_body = ParkingSpaceManagerRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>),
        (status = 500, description = "Unknown parking space", body = ApiResponse<String>)
    )
)]
pub async fn create_parking_space_manager(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpaceManagerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state
        .repos
        .parking_space_managers()
        .save(req.into_domain(0))
        .await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created ParkingSpaceManager {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", ParkingSpaceManager::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpaceManager/Get",
    tag = "ParkingSpaceManager",
    responses(
        (status = 200, description = "All managers with their parking space", body = Vec<ParkingSpaceManagerDetailsResponse>)
    )
)]
pub async fn list_parking_space_managers(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingSpaceManagerDetailsResponse>>, ApiError> {
    let managers = state.repos.parking_space_managers().find_all().await?;
    Ok(Json(managers.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpaceManager/{id}",
    tag = "ParkingSpaceManager",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager with its parking space", body = ParkingSpaceManagerDetailsResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_parking_space_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkingSpaceManagerDetailsResponse>, ApiError> {
    let manager = state
        .repos
        .parking_space_managers()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ParkingSpaceManager::ENTITY, id))?;
    Ok(Json(manager.into()))
}

#[utoipa::path(
    put,
    path = "/api/ParkingSpaceManager/{id}",
    tag = "ParkingSpaceManager",
    params(("id" = i32, Path, description = "Manager ID")),
    request_body = ParkingSpaceManagerRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_parking_space_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpaceManagerRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .repos
        .parking_space_managers()
        .update(req.into_domain(id))
        .await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated ParkingSpaceManager {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", ParkingSpaceManager::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/ParkingSpaceManager/{id}",
    tag = "ParkingSpaceManager",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_parking_space_manager(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_space_managers().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted ParkingSpaceManager {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted Successfully", ParkingSpaceManager::ENTITY),
    )))
}
