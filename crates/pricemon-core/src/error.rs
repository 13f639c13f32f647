//! Shared error type across pricemon crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request.
    BadRequest,
    /// Unknown or unsupported resource.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Configuration rejected at startup.
    Config,
    /// Upstream price source failed.
    Source,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Config => "CONFIG",
            ClientCode::Source => "SOURCE",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PriceMonError>;

/// Unified error type used by core and api.
#[derive(Debug, Error)]
pub enum PriceMonError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("config: {0}")]
    Config(String),
    #[error("price source: {0}")]
    Source(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PriceMonError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PriceMonError::BadRequest(_) => ClientCode::BadRequest,
            PriceMonError::NotFound(_) => ClientCode::NotFound,
            PriceMonError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PriceMonError::Config(_) => ClientCode::Config,
            PriceMonError::Source(_) => ClientCode::Source,
            PriceMonError::Internal(_) => ClientCode::Internal,
        }
    }
}
