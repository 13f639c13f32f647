//! HTTP mapping for the shared error type.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use pricemon_core::error::PriceMonError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Handler error: wraps `PriceMonError` so it can be returned from axum handlers.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PriceMonError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            PriceMonError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PriceMonError::NotFound(_) => StatusCode::NOT_FOUND,
            PriceMonError::Source(_) => StatusCode::BAD_GATEWAY,
            PriceMonError::UnsupportedVersion
            | PriceMonError::Config(_)
            | PriceMonError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request error");
        }
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self(PriceMonError::BadRequest(e.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self {
        Self(PriceMonError::BadRequest(e.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        Self(PriceMonError::BadRequest(e.body_text()))
    }
}
