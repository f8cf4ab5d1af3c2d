//! # Mock Authentication
//!
//! There is no credential store. Sign-in accepts any email/password pair
//! except the reserved admin address with a wrong password.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  email (lowercased)        password           result                 │
//! │  ───────────────────       ────────           ──────                 │
//! │  admin@shopnexa.com        Admin@123          Session(role=admin)    │
//! │  admin@shopnexa.com        anything else      InvalidCredentials     │
//! │  anything else             anything           Session(role=user)     │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reserved pair lives in code on purpose: this is a stand-in until a
//! server exists, not a security model.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Role, Session, User};
use crate::validation::{validate_login, validate_registration};

/// Reserved administrative address.
pub const ADMIN_EMAIL: &str = "admin@shopnexa.com";

/// Password accepted for [`ADMIN_EMAIL`].
pub const ADMIN_PASSWORD: &str = "Admin@123";

const ADMIN_USER_ID: &str = "admin_001";
const ADMIN_NAME: &str = "Admin";
const DEFAULT_USER_ID: &str = "user_001";
const DEFAULT_USER_NAME: &str = "Olivia";

/// Issues an opaque session token, unique per call.
///
/// Format: `mock_jwt_token_<unix millis>_<uuid>`.
pub fn issue_token(now: DateTime<Utc>) -> String {
    format!(
        "mock_jwt_token_{}_{}",
        now.timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Runs the mock sign-in check.
///
/// ## Errors
/// - `CoreError::Validation` if email or password is blank
/// - `CoreError::InvalidCredentials` for the admin address with a wrong
///   password
///
/// The email is lowercased but not trimmed, so `" admin@shopnexa.com"` is
/// an ordinary user address.
pub fn authenticate(email: &str, password: &str, now: DateTime<Utc>) -> CoreResult<Session> {
    validate_login(email, password)?;

    let email = email.to_lowercase();
    let is_admin_email = email == ADMIN_EMAIL;

    if is_admin_email && password != ADMIN_PASSWORD {
        return Err(CoreError::InvalidCredentials);
    }

    let user = if is_admin_email {
        User {
            id: ADMIN_USER_ID.to_string(),
            name: ADMIN_NAME.to_string(),
            email,
            role: Role::Admin,
        }
    } else {
        User {
            id: DEFAULT_USER_ID.to_string(),
            name: DEFAULT_USER_NAME.to_string(),
            email,
            role: Role::User,
        }
    };

    Ok(Session {
        user,
        token: issue_token(now),
    })
}

/// Creates a `user`-role session for a new account.
///
/// There are no existing accounts, so there is no uniqueness check.
pub fn register(name: &str, email: &str, password: &str, now: DateTime<Utc>) -> CoreResult<Session> {
    validate_registration(name, email, password)?;

    let user = User {
        id: format!("user_{}", now.timestamp_millis()),
        name: name.trim().to_string(),
        email: email.trim().to_lowercase(),
        role: Role::User,
    };

    Ok(Session {
        user,
        token: issue_token(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_exact_pair() {
        let session = authenticate("admin@shopnexa.com", "Admin@123", Utc::now()).unwrap();
        assert_eq!(session.user.role, Role::Admin);
        assert_eq!(session.user.id, "admin_001");
    }

    #[test]
    fn test_admin_email_is_case_insensitive() {
        let session = authenticate("Admin@ShopNexa.com", "Admin@123", Utc::now()).unwrap();
        assert!(session.user.is_admin());
        assert_eq!(session.user.email, "admin@shopnexa.com");

        let err = authenticate("ADMIN@SHOPNEXA.COM", "admin@123", Utc::now());
        assert!(matches!(err, Err(CoreError::InvalidCredentials)));
    }

    #[test]
    fn test_padded_admin_email_is_user() {
        let session = authenticate(" admin@shopnexa.com", "wrong", Utc::now()).unwrap();
        assert_eq!(session.user.role, Role::User);
        assert_eq!(session.user.email, " admin@shopnexa.com");
    }

    #[test]
    fn test_admin_wrong_password() {
        let err = authenticate("admin@shopnexa.com", "wrong", Utc::now());
        assert!(matches!(err, Err(CoreError::InvalidCredentials)));
    }

    #[test]
    fn test_anyone_else_is_user() {
        let session = authenticate("anyone@x.com", "anything", Utc::now()).unwrap();
        assert_eq!(session.user.role, Role::User);
        assert_eq!(session.user.name, "Olivia");
        assert_eq!(session.user.email, "anyone@x.com");
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = authenticate("", "anything", Utc::now());
        assert!(matches!(err, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_tokens_unique_per_login() {
        let now = Utc::now();
        let a = authenticate("anyone@x.com", "anything", now).unwrap();
        let b = authenticate("anyone@x.com", "anything", now).unwrap();
        assert_ne!(a.token, b.token);
        assert!(a.token.starts_with("mock_jwt_token_"));
    }

    #[test]
    fn test_register() {
        let now = Utc::now();
        let session = register(" Priya ", "Priya@Example.com", "secret1", now).unwrap();

        assert_eq!(session.user.role, Role::User);
        assert_eq!(session.user.name, "Priya");
        assert_eq!(session.user.email, "priya@example.com");
        assert_eq!(session.user.id, format!("user_{}", now.timestamp_millis()));

        assert!(register("Priya", "p@x.com", "123", now).is_err());
    }
}
