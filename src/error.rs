use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Coarse classification of business failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    RegistrationUnavailable,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("parameter '{name}' is not a valid integer: {value:?}")]
    InvalidParameter { name: &'static str, value: String },
    #[error("sum of {a} and {b} overflows a 32-bit integer")]
    Overflow { a: i32, b: i32 },
    #[error("service registration is not available yet")]
    RegistrationUnavailable,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::MissingParameter(_)
            | ServiceError::InvalidParameter { .. }
            | ServiceError::Overflow { .. } => ErrorKind::BadRequest,
            ServiceError::RegistrationUnavailable => ErrorKind::RegistrationUnavailable,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::RegistrationUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Only the reason phrase goes back to the caller.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, status.canonical_reason().unwrap_or("Error")).into_response()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file: {0}")]
    LogFile(#[source] std::io::Error),
}
