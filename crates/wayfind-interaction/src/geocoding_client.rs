//! GeocodingClient - free-text address to coordinate resolution.
//!
//! Wraps the maps provider's geocoding endpoint. The provider reports its
//! outcome in a body-level `status` string alongside the HTTP status; both
//! are handled here so callers only see the shared error taxonomy.

use async_trait::async_trait;
use serde::Deserialize;

use wayfind_core::error::{Result, WayfindError};
use wayfind_core::geo::{Coordinate, GeocodingService};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Client for the geocoding endpoint.
#[derive(Clone)]
pub struct GeocodingClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeocodingClient {
    /// Creates a new client using the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the provider base URL (for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl GeocodingService for GeocodingClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>> {
        let url = format!("{}/maps/api/geocode/json", self.base_url);
        let response = self
            .client
            .get(url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|err| {
                WayfindError::unavailable(format!("geocoding request failed: {err}"))
            })?;

        let body = response.text().await.map_err(|err| {
            WayfindError::unavailable(format!("failed to read geocoding response: {err}"))
        })?;

        parse_geocode_response(&body)
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Interprets the provider's body-level status.
///
/// `OK` yields the first candidate's coordinate, `ZERO_RESULTS` yields
/// `None`, anything else is a provider failure.
fn parse_geocode_response(body: &str) -> Result<Option<Coordinate>> {
    let response: GeocodeResponse = serde_json::from_str(body).map_err(|err| {
        WayfindError::unavailable(format!("malformed geocoding response: {err}"))
    })?;

    match response.status.as_str() {
        "OK" => {
            let first = response.results.into_iter().next().ok_or_else(|| {
                WayfindError::unavailable("geocoding reported OK with no results")
            })?;
            Ok(Some(Coordinate::new(
                first.geometry.location.lat,
                first.geometry.location.lng,
            )))
        }
        "ZERO_RESULTS" => Ok(None),
        status => {
            let detail = response
                .error_message
                .unwrap_or_else(|| "no detail".to_string());
            Err(WayfindError::unavailable(format!(
                "geocoding failed with status {status}: {detail}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_takes_first_candidate() {
        let body = r#"{
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 48.8606, "lng": 2.3376}}},
                {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]
        }"#;
        let coord = parse_geocode_response(body).unwrap().unwrap();
        assert_eq!(coord.latitude, 48.8606);
        assert_eq!(coord.longitude, 2.3376);
    }

    #[test]
    fn test_parse_zero_results_is_none() {
        let body = r#"{"status": "ZERO_RESULTS", "results": []}"#;
        assert_eq!(parse_geocode_response(body).unwrap(), None);
    }

    #[test]
    fn test_parse_denied_status_is_error() {
        let body = r#"{
            "status": "REQUEST_DENIED",
            "results": [],
            "error_message": "The provided API key is invalid."
        }"#;
        let err = parse_geocode_response(body).unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("REQUEST_DENIED"));
    }

    #[test]
    fn test_parse_malformed_body_is_error() {
        assert!(parse_geocode_response("<html>oops</html>").is_err());
    }

    #[test]
    fn test_parse_ok_without_results_is_error() {
        let body = r#"{"status": "OK", "results": []}"#;
        assert!(parse_geocode_response(body).is_err());
    }
}
