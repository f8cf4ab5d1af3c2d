//! # Validation Module
//!
//! Input validation for the sign-in, sign-up and admin product forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Mobile UI                                                     │
//! │  └── Immediate feedback while typing                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Same rules, enforced before any store mutation                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stores                                                       │
//! │  └── Structural invariants (unique entries, quantity ≥ 1)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nexa_core::validation::{validate_login, validate_registration};
//!
//! assert!(validate_login("olivia@example.com", "secret").is_ok());
//! assert!(validate_registration("Olivia", "olivia@example.com", "12345").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CATEGORIES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted by sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a field is present and not just whitespace.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a new password.
///
/// ## Rules
/// - Must not be blank
/// - At least [`MIN_PASSWORD_LENGTH`] characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    validate_required("password", password)?;

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates the sign-in form: both fields required.
///
/// Password length is deliberately not checked here: the admin password
/// and any legacy account must still reach the credential check.
pub fn validate_login(email: &str, password: &str) -> ValidationResult<()> {
    validate_required("email", email)?;
    validate_required("password", password)?;
    Ok(())
}

/// Validates the sign-up form.
///
/// ## Rules
/// - name, email, password required
/// - password at least 6 characters
pub fn validate_registration(name: &str, email: &str, password: &str) -> ValidationResult<()> {
    validate_required("name", name)?;
    validate_required("email", email)?;
    validate_password(password)
}

/// Normalizes a search query (trimmed, lowercased).
///
/// An empty result means "no filter".
pub fn normalize_search_query(query: &str) -> String {
    query.trim().to_lowercase()
}

// =============================================================================
// Product Form Validators
// =============================================================================

/// Validates a price entered on the product form.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for giveaways)
///
/// ```rust
/// use nexa_core::money::Money;
/// use nexa_core::validation::validate_price;
///
/// assert!(validate_price("price", Money::from_major(999)).is_ok());
/// assert!(validate_price("price", Money::from_minor(-1)).is_err());
/// ```
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a category against [`CATEGORIES`].
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if CATEGORIES.contains(&category) {
        return Ok(());
    }

    Err(ValidationError::NotAllowed {
        field: "category".to_string(),
        allowed: CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
