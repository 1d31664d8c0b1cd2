//! Secret configuration file storage.
//!
//! Provides loading of provider endpoints and API keys from
//! `~/.config/wayfind/secret.json`, with an environment-variable fallback.
//! Keys never come from source literals.

use std::env;
use std::fs;
use std::path::PathBuf;

use wayfind_core::config::{IdentityConfig, MapsConfig, SecretConfig};

use crate::paths::WayfindPaths;

/// Environment variables consulted when `secret.json` is absent.
pub const ENV_IDENTITY_ENDPOINT: &str = "WAYFIND_IDENTITY_ENDPOINT";
pub const ENV_PROJECT_ID: &str = "WAYFIND_PROJECT_ID";
pub const ENV_PLATFORM: &str = "WAYFIND_PLATFORM";
pub const ENV_MAPS_API_KEY: &str = "WAYFIND_MAPS_API_KEY";

/// Errors that can occur during secret storage operations.
#[derive(Debug)]
pub enum SecretStorageError {
    /// Configuration file not found.
    NotFound(PathBuf),
    /// File I/O error.
    IoError(std::io::Error),
    /// JSON parsing error.
    ParseError(serde_json::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// A required environment variable is missing.
    EnvVarMissing(&'static str),
}

impl std::fmt::Display for SecretStorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretStorageError::NotFound(path) => {
                write!(f, "Configuration file not found at: {}", path.display())
            }
            SecretStorageError::IoError(e) => write!(f, "I/O error: {}", e),
            SecretStorageError::ParseError(e) => write!(f, "JSON parse error: {}", e),
            SecretStorageError::ConfigDirNotFound => {
                write!(f, "Could not determine config directory")
            }
            SecretStorageError::EnvVarMissing(name) => {
                write!(f, "Environment variable {} is not set", name)
            }
        }
    }
}

impl std::error::Error for SecretStorageError {}

impl From<std::io::Error> for SecretStorageError {
    fn from(e: std::io::Error) -> Self {
        SecretStorageError::IoError(e)
    }
}

impl From<serde_json::Error> for SecretStorageError {
    fn from(e: serde_json::Error) -> Self {
        SecretStorageError::ParseError(e)
    }
}

/// Storage for the secret configuration file (secret.json).
///
/// Responsibilities:
/// - Load secret.json from ~/.config/wayfind/
/// - Parse JSON into the SecretConfig domain model
/// - Fall back to environment variables when the file is absent
///
/// Does NOT:
/// - Write or modify secret files (read-only)
/// - Validate API keys or credentials
/// - Handle encryption (plaintext JSON storage)
///
/// # Security Note
///
/// This storage reads plaintext JSON files. The secret.json file should have
/// appropriate file permissions (e.g., 600) to prevent unauthorized access.
/// Error messages never contain secret values.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Creates a new SecretStorage with the default path
    /// (`~/.config/wayfind/secret.json`).
    pub fn new() -> Result<Self, SecretStorageError> {
        let path =
            WayfindPaths::secret_file().map_err(|_| SecretStorageError::ConfigDirNotFound)?;
        Ok(Self { path })
    }

    /// Creates a new SecretStorage with a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the secret configuration from the JSON file.
    pub fn load(&self) -> Result<SecretConfig, SecretStorageError> {
        if !self.path.exists() {
            return Err(SecretStorageError::NotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;

        Ok(config)
    }

    /// Loads secrets from the file, falling back to environment variables.
    ///
    /// Priority:
    /// 1. `secret.json`
    /// 2. `WAYFIND_*` environment variables
    pub fn resolve(&self) -> Result<SecretConfig, SecretStorageError> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(SecretStorageError::NotFound(_)) => Self::from_env(),
            Err(e) => Err(e),
        }
    }

    /// Assembles a SecretConfig purely from environment variables.
    pub fn from_env() -> Result<SecretConfig, SecretStorageError> {
        let endpoint = env::var(ENV_IDENTITY_ENDPOINT)
            .map_err(|_| SecretStorageError::EnvVarMissing(ENV_IDENTITY_ENDPOINT))?;
        let project_id = env::var(ENV_PROJECT_ID)
            .map_err(|_| SecretStorageError::EnvVarMissing(ENV_PROJECT_ID))?;
        let platform = env::var(ENV_PLATFORM).ok();
        let api_key = env::var(ENV_MAPS_API_KEY)
            .map_err(|_| SecretStorageError::EnvVarMissing(ENV_MAPS_API_KEY))?;

        Ok(SecretConfig {
            identity: IdentityConfig {
                endpoint,
                project_id,
                platform,
            },
            maps: MapsConfig { api_key },
        })
    }

    /// Returns the path to the secret file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
