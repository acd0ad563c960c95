//! Axum extractor for the request execution context.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use notecache_core::context::{RequestContext, RequestId};

use crate::state::AppState;

/// Execution context for one HTTP request.
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

impl FromRequestParts<AppState> for RequestCtx {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = extract_request_id(&parts.headers);
        Ok(RequestCtx(state.request_context(request_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_id_from_header() {
        let mut headers = HeaderMap::new();
        let id = "550e8400-e29b-41d4-a716-446655440000";
        headers.insert("x-request-id", id.parse().unwrap());

        let request_id = extract_request_id(&headers);
        assert_eq!(request_id.to_string(), id);
    }

    #[test]
    fn test_extract_request_id_generates_when_missing() {
        let headers = HeaderMap::new();
        let request_id = extract_request_id(&headers);

        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }

    #[test]
    fn test_extract_request_id_generates_when_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", "not-a-uuid".parse().unwrap());

        let request_id = extract_request_id(&headers);

        assert_ne!(request_id.to_string(), "not-a-uuid");
        Uuid::parse_str(&request_id.to_string()).expect("Should be valid UUID");
    }
}
