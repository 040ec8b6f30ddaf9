//! Payment method REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{PaymentMethodRequest, PaymentMethodResponse};
use crate::domain::{DomainError, PaymentMethod};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/PaymentMethod/Create",
    tag = "PaymentMethod",
    request_body = PaymentMethodRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn create_payment_method(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<PaymentMethodRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state.repos.payment_methods().save(req.into_domain(0)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created PaymentMethod {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", PaymentMethod::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/PaymentMethod/Get",
    tag = "PaymentMethod",
    responses((status = 200, description = "All payment methods", body = Vec<PaymentMethodResponse>))
)]
pub async fn list_payment_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethodResponse>>, ApiError> {
    let methods = state.repos.payment_methods().find_all().await?;
    Ok(Json(methods.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/PaymentMethod/{id}",
    tag = "PaymentMethod",
    params(("id" = i32, Path, description = "Payment method ID")),
    responses(
        (status = 200, description = "Payment method", body = PaymentMethodResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PaymentMethodResponse>, ApiError> {
    let method = state
        .repos
        .payment_methods()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(PaymentMethod::ENTITY, id))?;
    Ok(Json(method.into()))
}

#[utoipa::path(
    put,
    path = "/api/PaymentMethod/{id}",
    tag = "PaymentMethod",
    params(("id" = i32, Path, description = "Payment method ID")),
    request_body = PaymentMethodRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn update_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<PaymentMethodRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.payment_methods().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated PaymentMethod {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", PaymentMethod::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/PaymentMethod/{id}",
    tag = "PaymentMethod",
    params(("id" = i32, Path, description = "Payment method ID")),
    responses(
        (status = 200, description = "Deleted together with its payments", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_payment_method(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.payment_methods().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted PaymentMethod {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", PaymentMethod::ENTITY),
    )))
}
