//! # API Error Type
//!
//! The one error type storefront callers see.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Screen                      Rust State Layer                           │
//! │  ──────                      ────────────────                           │
//! │                                                                         │
//! │  storefront.login(email, pw)                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Storefront / SessionStore                                       │  │
//! │  │  ApiResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Storage Error? ─── DbError::ConnectionFailed ────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Domain Error? ─── CoreError::InvalidCredentials ─ ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code    = "INVALID_CREDENTIALS"                                      │
//! │  e.message = "Invalid admin password"                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Background write failures never surface here. They are logged by the
//! writer task and the in-memory state stays authoritative.

use nexa_core::CoreError;
use nexa_store::DbError;
use serde::Serialize;

/// Error returned from storefront operations.
///
/// ## Serialization
/// ```json
/// {
///   "code": "FORBIDDEN",
///   "message": "Admin access required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not in the catalog
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Reserved admin email with the wrong password
    InvalidCredentials,

    /// Checkout with nothing in the cart
    EmptyCart,

    /// Admin operation with no session
    Unauthenticated,

    /// Admin operation from a non-admin session
    Forbidden,

    /// Local storage could not be opened
    StorageError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthenticated() -> Self {
        ApiError::new(ErrorCode::Unauthenticated, "Sign in required")
    }

    pub fn forbidden() -> Self {
        ApiError::new(ErrorCode::Forbidden, "Admin access required")
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(e) => {
                tracing::error!("Storage connection failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage unavailable")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Storage migration failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage migration failed")
            }
            DbError::QueryFailed(e) | DbError::TransactionFailed(e) => {
                tracing::error!("Storage operation failed: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::StorageError, "Local storage busy")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal storage error: {}", e);
                ApiError::new(ErrorCode::StorageError, "Local storage operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCredentials => {
                ApiError::new(ErrorCode::InvalidCredentials, err.to_string())
            }
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, "Your cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for storefront operations.
pub type ApiResult<T> = Result<T, ApiError>;
