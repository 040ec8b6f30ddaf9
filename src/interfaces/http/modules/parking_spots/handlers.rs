//! Parking spot REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{ParkingSpotRequest, ParkingSpotResponse};
use crate::domain::{DomainError, ParkingSpot};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/ParkingSpot/Create",
    tag = "ParkingSpot",
    request_body = ParkingSpotRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn create_parking_spot(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpotRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state.repos.parking_spots().save(req.into_domain(0)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created ParkingSpot {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", ParkingSpot::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpot/Get",
    tag = "ParkingSpot",
    responses((status = 200, description = "All parking spots", body = Vec<ParkingSpotResponse>))
)]
pub async fn list_parking_spots(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingSpotResponse>>, ApiError> {
    let spots = state.repos.parking_spots().find_all().await?;
    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/ParkingSpot/{id}",
    tag = "ParkingSpot",
    params(("id" = i32, Path, description = "Parking spot ID")),
    responses(
        (status = 200, description = "Parking spot", body = ParkingSpotResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkingSpotResponse>, ApiError> {
    let spot = state
        .repos
        .parking_spots()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(ParkingSpot::ENTITY, id))?;
    Ok(Json(spot.into()))
}

#[utoipa::path(
    put,
    path = "/api/ParkingSpot/{id}",
    tag = "ParkingSpot",
    params(("id" = i32, Path, description = "Parking spot ID")),
    request_body = ParkingSpotRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<ParkingSpotRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_spots().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated ParkingSpot {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", ParkingSpot::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/ParkingSpot/{id}",
    tag = "ParkingSpot",
    params(("id" = i32, Path, description = "Parking spot ID")),
    responses(
        (status = 200, description = "Deleted together with its reservations", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_parking_spot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.parking_spots().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted ParkingSpot {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", ParkingSpot::ENTITY),
    )))
}
