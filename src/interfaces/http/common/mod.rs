//! Shared HTTP building blocks: response envelopes, error mapping, extractors

pub mod api_error;
pub mod caller;
pub mod rules;
pub mod validated_json;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use api_error::ApiError;
pub use caller::Caller;
pub use validated_json::ValidatedJson;

/// Error envelope.
///
/// Failed requests answer `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `false` for errors
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Confirmation returned by Create, Update and Delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Id of the row that was written
    pub id: i32,
    /// e.g. "Reservation Created Successfully"
    pub message: String,
}

impl MessageResponse {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}
