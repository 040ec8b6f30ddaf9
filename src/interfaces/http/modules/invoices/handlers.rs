//! Invoice REST API handlers

use axum::extract::{Path, State};
use axum::Json;

use super::dto::{InvoiceRequest, InvoiceResponse};
use crate::domain::{DomainError, Invoice};
use crate::interfaces::http::common::{ApiError, ApiResponse, Caller, MessageResponse, ValidatedJson};
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    post,
    path = "/api/Invoice/Create",
    tag = "Invoice",
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Created", body = MessageResponse),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<InvoiceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let saved = state.repos.invoices().save(req.into_domain(0)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Created Invoice {}", saved.id))
        .await;
    Ok(Json(MessageResponse::new(
        saved.id,
        format!("{} Created Successfully", Invoice::ENTITY),
    )))
}

#[utoipa::path(
    get,
    path = "/api/Invoice/Get",
    tag = "Invoice",
    responses((status = 200, description = "All invoices", body = Vec<InvoiceResponse>))
)]
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<InvoiceResponse>>, ApiError> {
    let invoices = state.repos.invoices().find_all().await?;
    Ok(Json(invoices.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/Invoice/{id}",
    tag = "Invoice",
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice", body = InvoiceResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = state
        .repos
        .invoices()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(Invoice::ENTITY, id))?;
    Ok(Json(invoice.into()))
}

#[utoipa::path(
    put,
    path = "/api/Invoice/{id}",
    tag = "Invoice",
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>),
        (status = 422, description = "Invalid data", body = ApiResponse<String>)
    )
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
    ValidatedJson(req): ValidatedJson<InvoiceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.invoices().update(req.into_domain(id)).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Updated Invoice {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Updated Successfully", Invoice::ENTITY),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/Invoice/{id}",
    tag = "Invoice",
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Deleted; attached payments are detached", body = MessageResponse),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    caller: Caller,
) -> Result<Json<MessageResponse>, ApiError> {
    state.repos.invoices().delete(id).await?;
    state
        .logs
        .save_new_log(caller.name(), format!("Deleted Invoice {}", id))
        .await;
    Ok(Json(MessageResponse::new(
        id,
        format!("{} Deleted", Invoice::ENTITY),
    )))
}
