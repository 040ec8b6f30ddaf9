//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` deserializes like `axum::Json<T>` and then runs
//! `validator::Validate::validate()`. Malformed bodies answer 400, rule
//! violations answer 422, both in the `ApiResponse` error envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use super::ApiResponse;

/// JSON body that has passed its `#[validate]` rules.
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    /// Body is not JSON or does not match the DTO shape.
    Json(JsonRejection),
    /// Body parsed but broke a field rule.
    Invalid(ValidationErrors),
}

/// Flatten field errors into `"field: message; field: message"`.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    parts.sort();

    if parts.is_empty() {
        "Validation failed".to_string()
    } else {
        parts.join("; ")
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Json(rejection) => {
                debug!("Rejected request body: {}", rejection);
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::Invalid(errors) => {
                let message = describe(&errors);
                debug!("Request body failed validation: {}", message);
                let body = ApiResponse::<()>::error(message);
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        value.validate().map_err(ValidatedJsonRejection::Invalid)?;
        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::Service;

    #[derive(Debug, Deserialize, Validate)]
    struct SpotBody {
        #[validate(length(min = 1, message = "location is required"))]
        location: String,
        #[validate(range(min = 0.0, message = "must be non-negative"))]
        price: f64,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<SpotBody>) -> String {
        body.location
    }

    async fn post_json(raw: &str) -> Response {
        let mut svc = Router::new().route("/spot", post(handler)).into_service();
        let req = Request::builder()
            .method("POST")
            .uri("/spot")
            .header("content-type", "application/json")
            .body(Body::from(raw.to_owned()))
            .unwrap();
        svc.call(req).await.unwrap()
    }

    async fn error_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let resp = post_json(r#"{"location":"A1","price":2.5}"#).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_body_is_400() {
        let resp = post_json("{location: A1").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(error_text(resp).await.starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn rule_violations_are_422_and_listed() {
        let resp = post_json(r#"{"location":"","price":-1.0}"#).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let text = error_text(resp).await;
        assert!(text.contains("location: location is required"));
        assert!(text.contains("price: must be non-negative"));
    }
}
