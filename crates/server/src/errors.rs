use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use tracing::error;

/// Service outcome translated to an HTTP status. A missing record is the
/// only domain failure with a dedicated status; everything else is an
/// opaque 500. Both answer with an empty body.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND.into_response(),
            ServiceError::Repository(err) => {
                error!(error = %err, "persistence failure");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
