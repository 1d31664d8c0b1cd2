//! Error types for the Wayfind application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a client error reported by a remote provider.
///
/// Maps one-to-one onto the HTTP status codes the identity and places
/// providers use to reject requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Credentials or session were rejected (HTTP 401).
    Unauthorized,
    /// The resource already exists, e.g. a duplicate account (HTTP 409).
    Conflict,
    /// The provider throttled the caller (HTTP 429).
    RateLimited,
    /// The provider rejected the request shape or contents (HTTP 400).
    BadRequest,
}

impl RejectionKind {
    /// Classifies an HTTP status code, if it is one of the known rejections.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            409 => Some(Self::Conflict),
            429 => Some(Self::RateLimited),
            _ => None,
        }
    }
}

/// A shared error type for the entire Wayfind application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum WayfindError {
    /// Locally detected validation failure. Never reaches the network.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A remote provider returned a client error.
    #[error("Provider rejected the request: {message}")]
    ProviderRejected {
        kind: RejectionKind,
        message: String,
    },

    /// Network failure or malformed response from a remote provider.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// A device capability was refused by the user or the OS.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WayfindError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a ProviderRejected error
    pub fn rejected(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self::ProviderRejected {
            kind,
            message: message.into(),
        }
    }

    /// Creates a ProviderUnavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::ProviderUnavailable(message.into())
    }

    /// Creates a PermissionDenied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a PermissionDenied error
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    /// Check if this is a ProviderUnavailable error
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable(_))
    }

    /// Check if this is a provider rejection of the given kind
    pub fn is_rejected(&self, expected: RejectionKind) -> bool {
        matches!(self, Self::ProviderRejected { kind, .. } if *kind == expected)
    }

    /// Check if this is an unauthorized provider rejection
    pub fn is_unauthorized(&self) -> bool {
        self.is_rejected(RejectionKind::Unauthorized)
    }

    /// Check if this is a rate-limited provider rejection
    pub fn is_rate_limited(&self) -> bool {
        self.is_rejected(RejectionKind::RateLimited)
    }

    /// Check if this is a conflict provider rejection
    pub fn is_conflict(&self) -> bool {
        self.is_rejected(RejectionKind::Conflict)
    }
}

impl From<std::io::Error> for WayfindError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for WayfindError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: e.to_string(),
        }
    }
}

/// A Result type alias using WayfindError
pub type Result<T> = std::result::Result<T, WayfindError>;
