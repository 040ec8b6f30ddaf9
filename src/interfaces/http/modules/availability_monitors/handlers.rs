//! Availability monitor REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{AvailabilityMonitorDetailsResponse, AvailabilityMonitorRequest};
use crate::domain::{AvailabilityMonitor, DomainError};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/AvailabilityMonitor/Create",
    tag = "AvailabilityMonitor",
    request_body = AvailabilityMonitorRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 500, description = "Unknown parking space or space already monitored", body = ApiResponse<String>)
    )
)]
pub async fn create_availability_monitor(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<AvailabilityMonitorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state
        .repos
        .availability_monitors()
        .save(req.into_domain(0))
        .await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created AvailabilityMonitor {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", AvailabilityMonitor::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/AvailabilityMonitor/Get",
    tag = "AvailabilityMonitor",
    responses(
        (status = 200, description = "All monitors with their parking space", body = Vec<AvailabilityMonitorDetailsResponse>)
    )
)]
pub async fn list_availability_monitors(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvailabilityMonitorDetailsResponse>>, ApiError> {
    let monitors = state.repos.availability_monitors().find_all().await?;
    Ok(Json(monitors.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/AvailabilityMonitor/{id}",
    tag = "AvailabilityMonitor",
    params(("id" = i32, Path, description = "Monitor ID")),
    responses(
        (status = 200, description = "Monitor with its parking space", body = AvailabilityMonitorDetailsResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_availability_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AvailabilityMonitorDetailsResponse>, ApiError> {
    let monitor = state
        .repos
        .availability_monitors()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(AvailabilityMonitor::ENTITY, id))?;
    Ok(Json(monitor.into()))
}

#[utoipa::path(
    put,
    path = "/api/AvailabilityMonitor/{id}",
    tag = "AvailabilityMonitor",
    params(("id" = i32, Path, description = "Monitor ID")),
    request_body = AvailabilityMonitorRequest,
    responses(
        (status = 200, description = "Updated, lastCheckedTime restamped", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_availability_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<AvailabilityMonitorRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .repos
        .availability_monitors()
        .update(req.into_domain(id))
        .await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated AvailabilityMonitor {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", AvailabilityMonitor::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/AvailabilityMonitor/{id}",
    tag = "AvailabilityMonitor",
    params(("id" = i32, Path, description = "Monitor ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_availability_monitor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.availability_monitors().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted AvailabilityMonitor {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted Successfully", AvailabilityMonitor::ENTITY),
    )))
}
