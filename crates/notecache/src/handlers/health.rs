//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Touches neither the store nor the cache.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
