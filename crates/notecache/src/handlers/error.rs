use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::{service_error_to_status_code, ServiceError};

/// Handler error. Service errors map to their HTTP status, anything else is
/// a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self.0.downcast_ref::<ServiceError>() {
            Some(service_error) => {
                let code = service_error_to_status_code(service_error);
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status_code.is_server_error() {
            tracing::error!(error = %self.0, status = %status_code, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
