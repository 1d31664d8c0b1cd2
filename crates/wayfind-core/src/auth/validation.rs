//! Form-level validation helpers.
//!
//! These run before any network call is attempted; a rejection here is a
//! `Validation` error and never reaches a provider.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // local@domain.tld with dot- or dash-separated word segments.
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,})+$").expect("email regex is valid")
});

/// Returns true when the input looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Coarse password-strength indicator shown next to the password field.
///
/// Length is the only signal: anything under eight characters is weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    /// Nothing entered yet.
    Empty,
    /// Fewer than eight characters.
    Weak,
    /// Eight characters or more.
    Strong,
}

impl PasswordStrength {
    /// Classifies a password by length.
    pub fn of(password: &str) -> Self {
        match password.chars().count() {
            0 => Self::Empty,
            1..=7 => Self::Weak,
            _ => Self::Strong,
        }
    }

    /// Human-readable label for the indicator.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "weak",
            Self::Strong => "strong",
        }
    }
}
