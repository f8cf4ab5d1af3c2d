//! # Error Types
//!
//! Domain-specific error types for nexa-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nexa-core errors (this file)                                          │
//! │  ├── CoreError        - Domain rule failures                           │
//! │  └── ValidationError  - Form input failures                            │
//! │                                                                         │
//! │  nexa-store errors (separate crate)                                    │
//! │  └── DbError          - Local storage failures (logged, never shown)   │
//! │                                                                         │
//! │  nexa-state errors                                                     │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI alert               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookup misses (order not found, product not found in a read) are NOT
//! errors: they come back as `Option::None`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Mock credential check rejected the login.
    ///
    /// Only raised for the reserved admin address with a wrong password;
    /// every other email/password pair is accepted.
    #[error("Invalid admin password")]
    InvalidCredentials,

    /// Product id is not in the catalog (admin update/delete).
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors from sign-in, sign-up and the product form.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
