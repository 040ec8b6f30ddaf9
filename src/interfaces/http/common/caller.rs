//! Caller identity extractor
//!
//! Authentication happens upstream. The gateway forwards the authenticated
//! user name in `X-User-Name`; requests without it act as `anonymous`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::DomainError;

/// Header carrying the authenticated user name.
pub const USER_NAME_HEADER: &str = "x-user-name";

const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(Option<String>);

impl Caller {
    /// Name to attribute audit entries to.
    pub fn name(&self) -> &str {
        self.0.as_deref().unwrap_or(ANONYMOUS)
    }

    /// The forwarded name, or `Unauthorized` if the header was missing.
    pub fn require(&self) -> Result<&str, DomainError> {
        self.0
            .as_deref()
            .ok_or_else(|| DomainError::Unauthorized(format!("missing {} header", USER_NAME_HEADER)))
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(USER_NAME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        Ok(Caller(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> Caller {
        let (mut parts, _) = req.into_parts();
        Caller::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_forwarded_name() {
        let caller = extract(
            Request::builder()
                .header("X-User-Name", "alice")
                .body(())
                .unwrap(),
        )
        .await;
        assert_eq!(caller.name(), "alice");
        assert_eq!(caller.require().unwrap(), "alice");
    }

    #[tokio::test]
    async fn missing_or_blank_header_is_anonymous() {
        let caller = extract(Request::builder().body(()).unwrap()).await;
        assert_eq!(caller.name(), "anonymous");
        assert!(caller.require().is_err());

        let blank = extract(
            Request::builder()
                .header("X-User-Name", "  ")
                .body(())
                .unwrap(),
        )
        .await;
        assert_eq!(blank.name(), "anonymous");
    }
}
