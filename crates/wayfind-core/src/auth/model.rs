//! Authentication domain models.

use serde::{Deserialize, Serialize};

use crate::auth::validation::is_valid_email;
use crate::error::{Result, WayfindError};

/// Email and password pair collected by a login form.
///
/// Created per submission and discarded after the attempt.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks format invariants locally, before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(WayfindError::validation("email and password are required"));
        }
        if !is_valid_email(&self.email) {
            return Err(WayfindError::validation("email address is malformed"));
        }
        Ok(())
    }
}

/// Fields collected by the signup form.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub phone: Option<String>,
}

impl RegistrationForm {
    /// Validates the whole form locally.
    ///
    /// Registration is stricter than login: the password must already meet
    /// the eight-character minimum and match its confirmation.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WayfindError::validation("display name is required"));
        }
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(WayfindError::validation("email and password are required"));
        }
        if !is_valid_email(&self.email) {
            return Err(WayfindError::validation("email address is malformed"));
        }
        if self.password.chars().count() < 8 {
            return Err(WayfindError::validation(
                "password must be at least 8 characters",
            ));
        }
        if self.password != self.confirm_password {
            return Err(WayfindError::validation("passwords do not match"));
        }
        Ok(())
    }
}

/// Profile of the authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The authenticated identity state held for the lifetime of a logged-in
/// app instance.
///
/// Invariant: a token is never stored without its profile, and vice versa.
/// The two travel together through every save and clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub profile: UserProfile,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            token: token.into(),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            email: "test@example.com".to_string(),
            password: "abcdefgh".to_string(),
            confirm_password: "abcdefgh".to_string(),
            name: "Test User".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_credentials_validate_ok() {
        assert!(Credentials::new("test@example.com", "abcd").validate().is_ok());
    }

    #[test]
    fn test_credentials_reject_empty_fields() {
        assert!(Credentials::new("", "abcd").validate().is_err());
        assert!(Credentials::new("test@example.com", "").validate().is_err());
    }

    #[test]
    fn test_credentials_reject_malformed_email() {
        let err = Credentials::new("testexample.com", "abcd")
            .validate()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_registration_ok() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_registration_rejects_short_password() {
        let mut f = form();
        f.password = "abcd".to_string();
        f.confirm_password = "abcd".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_registration_rejects_mismatched_confirmation() {
        let mut f = form();
        f.confirm_password = "abcdefgi".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn test_registration_rejects_blank_name() {
        let mut f = form();
        f.name = "  ".to_string();
        assert!(f.validate().is_err());
    }
}
