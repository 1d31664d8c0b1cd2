//! Configuration and secret schemas.
//!
//! Secrets (provider endpoints, project id, API keys) come from
//! `secret.json` or the environment; behavioral defaults live in
//! `config.toml`. API keys are never embedded in source.

use serde::{Deserialize, Serialize};

use crate::geo::model::{Coordinate, SearchRadius};

/// Identity provider connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base endpoint URL, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    /// Project identifier sent with every request.
    pub project_id: String,
    /// Platform package identifier, when the provider requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Maps provider credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    pub api_key: String,
}

/// All secrets the application needs, loaded from secure storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretConfig {
    pub identity: IdentityConfig,
    pub maps: MapsConfig,
}

fn default_keyword() -> String {
    "museum".to_string()
}

/// Behavioral defaults, persisted in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Radius used when the user has not picked one.
    #[serde(default)]
    pub default_radius: SearchRadius,
    /// Category keyword the nearby search is scoped and filtered to.
    #[serde(default = "default_keyword")]
    pub category_keyword: String,
    /// Fixed position standing in for a device GPS fix. Absent means
    /// device location is unavailable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_position: Option<Coordinate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_radius: SearchRadius::default(),
            category_keyword: default_keyword(),
            device_position: None,
        }
    }
}
