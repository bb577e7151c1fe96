//! Error types for the movies API
//!
//! Provides unified error handling using thiserror, with conversions to both
//! HTTP responses and GraphQL errors.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the movies API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Unknown user or upstream record absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Email already registered
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Email/password mismatch
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Network, timeout, non-success or decode failure from the provider
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Request body is not JSON
    #[error("Unsupported Media Type")]
    UnsupportedMediaType,

    /// Malformed request at the transport level
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code, exposed as a GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Upstream(_) => "UPSTREAM_FAILURE",
            AppError::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::Internal(_) => "INTERNAL",
        }
    }

    /// HTTP status used when the error escapes outside of GraphQL.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status(), body).into_response()
    }
}

// == GraphQL Conversion ==
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

// == Config Error Enum ==
/// Startup configuration failures. These are the only fatal errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent or empty
    #[error("{0} is not set")]
    Missing(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the movies API.
pub type Result<T> = std::result::Result<T, AppError>;
