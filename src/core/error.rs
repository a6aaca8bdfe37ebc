//! Typed error handling for the wellness API
//!
//! Every handler returns `Result<_, ApiError>`. The error knows its own HTTP
//! status and JSON body, so no failure ever escapes a handler untranslated.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: rejected payloads, malformed JSON, malformed path or
//!   query parameters (400)
//! - [`ApiError::InvalidCredentials`]: failed login (401)
//! - [`ApiError::NotFound`]: single-entity lookup came back empty (404)
//! - [`ApiError::Unexpected`]: anything else, typically a storage fault (500)
//!
//! # Example
//!
//! ```rust,ignore
//! async fn get_product(id: i32) -> Result<Json<Product>, ApiError> {
//!     let product = storage
//!         .get_product(id)
//!         .await
//!         .or_unexpected("Failed to get product")?
//!         .ok_or(ApiError::not_found("Product"))?;
//!     Ok(Json(product))
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type returned by every request handler
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be accepted as sent
    Validation(ValidationError),

    /// Username/password pair did not match a stored user
    InvalidCredentials,

    /// A single-entity lookup found nothing
    NotFound {
        /// Human-readable entity label, e.g. "Product" or "Blockchain wallet"
        entity: &'static str,
    },

    /// Any other failure. The cause has already been logged; only the
    /// resource-specific message reaches the client.
    Unexpected { message: &'static str },
}

impl ApiError {
    pub fn not_found(entity: &'static str) -> Self {
        ApiError::NotFound { entity }
    }

    pub fn unexpected(message: &'static str) -> Self {
        ApiError::Unexpected { message }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unexpected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error (used in logs)
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(e) => e.error_code(),
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Unexpected { .. } => "UNEXPECTED_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        let errors = match self {
            ApiError::Validation(ValidationError::FieldErrors(errors)) => Some(errors.clone()),
            _ => None,
        };

        ErrorResponse {
            message: self.to_string(),
            errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::NotFound { entity } => write!(f, "{} not found", entity),
            ApiError::Unexpected { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Per-field detail, present only for schema rejections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldValidationError>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Extension for turning storage results into handler results.
///
/// The storage cause is logged here and dropped, so the client only sees the
/// generic resource message.
pub trait ResultExt<T> {
    fn or_unexpected(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for anyhow::Result<T> {
    fn or_unexpected(self, message: &'static str) -> Result<T, ApiError> {
        self.map_err(|source| {
            tracing::error!(error = %format!("{source:#}"), "{}", message);
            ApiError::unexpected(message)
        })
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// One or more schema fields were missing or had the wrong type
    FieldErrors(Vec<FieldValidationError>),

    /// The body was not parseable JSON
    InvalidJson { message: String },

    /// A path or query parameter could not be parsed
    InvalidParameter { name: String, value: String },

    /// The path or query string could not be decoded at all
    InvalidRequest { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidParameter { .. } => "INVALID_PARAMETER",
            ValidationError::InvalidRequest { .. } => "INVALID_REQUEST",
        }
    }

    /// Names of the offending fields, in schema order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::FieldErrors(errors) => {
                errors.iter().map(|e| e.field.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(_) => write!(f, "Validation failed"),
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON body: {}", message)
            }
            ValidationError::InvalidParameter { name, .. } => write!(f, "Invalid {}", name),
            ValidationError::InvalidRequest { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}
