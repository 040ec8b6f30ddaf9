//! Payment REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{PaymentRequest, PaymentResponse};
use crate::domain::{DomainError, Payment};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/Payment/Create",
    tag = "Payment",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>),
        (status = 500, description = "Unknown payment method", body = ApiResponse<String>)
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<PaymentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state.repos.payments().save(req.into_domain(0)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created Payment {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", Payment::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/Payment/Get",
    tag = "Payment",
    responses(
        (status = 200, description = "All payments with their method", body = Vec<PaymentResponse>)
    )
)]
pub async fn list_payments(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentResponse>>, ApiError> {
    let payments = state.repos.payments().find_all().await?;
    Ok(Json(payments.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/Payment/{id}",
    tag = "Payment",
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment with its method", body = PaymentResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let payment = state
        .repos
        .payments()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(Payment::ENTITY, id))?;
    Ok(Json(payment.into()))
}

#[utoipa::path(
    put,
    path = "/api/Payment/{id}",
    tag = "Payment",
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<PaymentRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.payments().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated Payment {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", Payment::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/Payment/{id}",
    tag = "Payment",
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.payments().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted Payment {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", Payment::ENTITY),
    )))
}
