use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cambio_core::CambioError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Cambio(#[from] CambioError),
}

impl ApiError {
    /// Attach the request path reported in the error body.
    pub fn at(self, path: impl Into<String>) -> PathedError {
        PathedError {
            error: self,
            path: Some(path.into()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Cambio(CambioError::NoData) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Cambio(CambioError::InvalidArg(_)) => StatusCode::BAD_REQUEST,
            Self::Cambio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body: `{status, message, timestamp, details?, path?}` with an epoch-ms timestamp.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// An [`ApiError`] carrying the request path it occurred on.
#[derive(Debug)]
pub struct PathedError {
    error: ApiError,
    path: Option<String>,
}

impl From<ApiError> for PathedError {
    fn from(error: ApiError) -> Self {
        Self { error, path: None }
    }
}

impl IntoResponse for PathedError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let details = match &self.error {
            ApiError::Cambio(CambioError::NoData) => {
                Some("every configured provider failed or timed out".to_string())
            }
            _ => None,
        };
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self.error, path = ?self.path, "request failed");
        }
        let body = Json(ErrorBody {
            status: status.as_u16(),
            message: self.error.to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            details,
            path: self.path,
        });
        (status, body).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        PathedError::from(self).into_response()
    }
}

pub type ApiResult<T> = Result<T, PathedError>;
