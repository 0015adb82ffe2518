use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error response: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    /// Mapping for payload resolution: a missing referenced entity is the
    /// caller's fault, so it is a 400 rather than a 404.
    pub fn bad_request_from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidArgument(msg) | ServiceError::NotFound(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg))
            }
            other => other.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::InvalidArgument(msg) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(msg)),
            ServiceError::NotFound(msg) => Self::not_found(msg),
            ServiceError::Db(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(msg)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = match self.detail {
            Some(detail) => serde_json::json!({"error": self.title, "detail": detail}),
            None => serde_json::json!({"error": self.title}),
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
