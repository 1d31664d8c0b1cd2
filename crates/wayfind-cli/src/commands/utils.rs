//! Shared wiring for CLI commands.
//!
//! Builds concrete provider clients and storages from the secret file (or
//! environment) and the app configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use wayfind_application::{AuthUseCase, MapSearchUseCase};
use wayfind_core::auth::SessionHolder;
use wayfind_core::config::{AppConfig, SecretConfig};
use wayfind_core::geo::SearchRadius;
use wayfind_infrastructure::{
    ConfigStorage, ConfiguredDeviceLocator, SecretStorage, SessionStore,
};
use wayfind_interaction::{GeocodingClient, IdentityClient, PlacesClient};

/// Loads secrets from `secret.json`, falling back to the environment.
pub fn load_secrets() -> Result<SecretConfig> {
    let storage = SecretStorage::new().context("could not locate the config directory")?;
    storage
        .resolve()
        .context("failed to load provider secrets (secret.json or WAYFIND_* variables)")
}

/// Loads behavioral defaults from `config.toml`.
pub fn load_config() -> Result<AppConfig> {
    let storage = ConfigStorage::default_location()?;
    Ok(storage.load()?)
}

/// Wires the auth flow against the configured identity provider.
pub fn auth_usecase() -> Result<AuthUseCase> {
    let secrets = load_secrets()?;
    let identity = Arc::new(IdentityClient::new(&secrets.identity));
    let store = Arc::new(SessionStore::default_location()?);
    let holder = Arc::new(SessionHolder::new());
    Ok(AuthUseCase::new(identity, store, holder))
}

/// Wires the map-search flow against the configured maps provider.
pub fn search_usecase(
    config: &AppConfig,
    radius: SearchRadius,
    keyword: Option<String>,
) -> Result<MapSearchUseCase> {
    let secrets = load_secrets()?;
    let api_key = secrets.maps.api_key;

    let device = Arc::new(ConfiguredDeviceLocator::new(config.device_position));
    let geocoder = Arc::new(GeocodingClient::new(api_key.clone()));
    let places = Arc::new(PlacesClient::new(api_key));
    let keyword = keyword.unwrap_or_else(|| config.category_keyword.clone());

    Ok(MapSearchUseCase::new(
        device, geocoder, places, keyword, radius,
    ))
}
