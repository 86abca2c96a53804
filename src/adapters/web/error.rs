//! HTTP error responses for web adapter.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::error::FinanceError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<FinanceError> for WebError {
    fn from(err: FinanceError) -> Self {
        Self::new(status_from_error(&err), err.to_string())
    }
}

pub fn status_from_error(err: &FinanceError) -> StatusCode {
    match err {
        FinanceError::DataSource { .. } => StatusCode::SERVICE_UNAVAILABLE,
        FinanceError::ConfigParse { .. }
        | FinanceError::ConfigInvalid { .. }
        | FinanceError::Serialize(_)
        | FinanceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
