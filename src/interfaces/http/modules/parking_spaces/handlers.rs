//! Parking space REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{ParkingSpaceDetailsResponse, ParkingSpaceRequest};
use crate::domain::{DomainError, ParkingSpace};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/ParkingSpace/Create",
    tag = "ParkingSpace",
    request_body = ParkingSpaceRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn create_parking_space(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpaceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state.repos.parking_spaces().save(req.into_domain(0)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created ParkingSpace {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", ParkingSpace::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpace/Get",
    tag = "ParkingSpace",
    responses(
        (status = 200, description = "All parking spaces with managers and monitor", body = Vec<ParkingSpaceDetailsResponse>)
    )
)]
pub async fn list_parking_spaces(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingSpaceDetailsResponse>>, ApiError> {
    let spaces = state.repos.parking_spaces().find_all().await?;
    Ok(Json(spaces.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpace/{id}",
    tag = "ParkingSpace",
    params(("id" = i32, Path, description = "Parking space ID")),
    responses(
        (status = 200, description = "Parking space details", body = ParkingSpaceDetailsResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_parking_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkingSpaceDetailsResponse>, ApiError> {
    let space = state
        .repos
        .parking_spaces()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ParkingSpace::ENTITY, id))?;
    Ok(Json(space.into()))
}

#[utoipa::path(
    put,
    path = "/api/ParkingSpace/{id}",
    tag = "ParkingSpace",
    params(("id" = i32, Path, description = "Parking space ID")),
    request_body = ParkingSpaceRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_parking_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpaceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_spaces().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated ParkingSpace {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", ParkingSpace::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/ParkingSpace/{id}",
    tag = "ParkingSpace",
    params(("id" = i32, Path, description = "Parking space ID")),
    responses(
        (status = 200, description = "Deleted together with its managers and monitor", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_parking_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_spaces().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted ParkingSpace {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted Successfully", ParkingSpace::ENTITY),
    )))
}
