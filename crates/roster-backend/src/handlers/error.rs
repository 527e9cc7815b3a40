use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use roster::data::ErrorResponse;
use roster::errors::{ActivityError, ErrorKind};
use roster::log;

/// An [`ActivityError`] on its way back to the client.
///
/// Renders as `{"detail": "..."}` with the status picked from the error kind.
#[derive(Debug)]
pub struct ApiError(pub ActivityError);

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::debug!("Rejecting request with {}: {}", status, self.0);

        let body = ErrorResponse {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
