//! Audit log REST API handlers

use axum::extract::State;
use axum::Json;

use super::dto::LogResponse;
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/api/Log/Get",
    tag = "Log",
    responses((status = 200, description = "All audit entries, newest first", body = Vec<LogResponse>))
)]
pub async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<LogResponse>>, ApiError> {
    let entries = state.logs.get_logs().await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/Log/Mine",
    tag = "Log",
    responses(
        (status = 200, description = "Caller's audit entries, newest first", body = Vec<LogResponse>),
        (status = 401, description = "No caller identity", body = ApiResponse<String>)
    ),
    security(("user_name" = []))
)]
pub async fn list_my_logs(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<LogResponse>>, ApiError> {
    let user_name = caller.require()?;
    let entries = state.logs.get_my_logs(user_name).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
