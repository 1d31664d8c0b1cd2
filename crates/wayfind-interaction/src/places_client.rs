//! PlacesClient - radius-bounded nearby search for points of interest.
//!
//! Wraps the maps provider's nearby-search endpoint. Zero results and
//! non-OK provider statuses both come back to the caller as an empty list;
//! the log line tells the two apart.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use wayfind_core::error::{Result, WayfindError};
use wayfind_core::geo::{Coordinate, NearbySearchService, Place, SearchRadius};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";

/// Client for the nearby-search endpoint.
#[derive(Clone)]
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PlacesClient {
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
impl NearbySearchService for PlacesClient {
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius: SearchRadius,
        category: &str,
    ) -> Result<Vec<Place>> {
        let url = format!("{}/maps/api/place/nearbysearch/json", self.base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("location", center.to_string()),
                ("radius", radius.as_meters().to_string()),
                ("type", category.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|err| {
                WayfindError::unavailable(format!("nearby search request failed: {err}"))
            })?;

        let body = response.text().await.map_err(|err| {
            WayfindError::unavailable(format!("failed to read nearby search response: {err}"))
        })?;

        parse_nearby_response(&body, radius)
    }
}

#[derive(Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceRecord>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct PlaceRecord {
    place_id: String,
    name: String,
    #[serde(default)]
    vicinity: Option<String>,
    geometry: Geometry,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<PhotoRecord>,
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

#[derive(Deserialize)]
struct PhotoRecord {
    photo_reference: String,
}

impl PlaceRecord {
    fn into_place(self) -> Place {
        Place {
            id: self.place_id,
            name: self.name,
            vicinity: self.vicinity,
            location: Coordinate::new(self.geometry.location.lat, self.geometry.location.lng),
            rating: self.rating,
            price_level: self.price_level,
            categories: self.types,
            photo_refs: self
                .photos
                .into_iter()
                .map(|p| p.photo_reference)
                .collect(),
        }
    }
}

/// Interprets the provider's body-level status.
fn parse_nearby_response(body: &str, radius: SearchRadius) -> Result<Vec<Place>> {
    let response: NearbyResponse = serde_json::from_str(body).map_err(|err| {
        WayfindError::unavailable(format!("malformed nearby search response: {err}"))
    })?;

    match response.status.as_str() {
        "OK" => Ok(response
            .results
            .into_iter()
            .map(PlaceRecord::into_place)
            .collect()),
        "ZERO_RESULTS" => {
            info!("Nearby search found nothing within {radius}");
            Ok(Vec::new())
        }
        status => {
            let detail = response
                .error_message
                .unwrap_or_else(|| "no detail".to_string());
            warn!("Nearby search returned non-OK status {status}: {detail}");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "status": "OK",
        "results": [
            {
                "place_id": "pl-1",
                "name": "City Museum",
                "vicinity": "1 Museum Street",
                "geometry": {"location": {"lat": 48.86, "lng": 2.34}},
                "rating": 4.5,
                "price_level": 2,
                "types": ["museum", "point_of_interest"],
                "photos": [{"photo_reference": "photo-abc"}]
            },
            {
                "place_id": "pl-2",
                "name": "Old Gallery",
                "geometry": {"location": {"lat": 48.87, "lng": 2.35}}
            }
        ]
    }"#;

    #[test]
    fn test_parse_ok_maps_records() {
        let places = parse_nearby_response(OK_BODY, SearchRadius::Km10).unwrap();
        assert_eq!(places.len(), 2);

        let first = &places[0];
        assert_eq!(first.id, "pl-1");
        assert_eq!(first.vicinity.as_deref(), Some("1 Museum Street"));
        assert_eq!(first.rating, Some(4.5));
        assert_eq!(first.price_level, Some(2));
        assert_eq!(first.categories, vec!["museum", "point_of_interest"]);
        assert_eq!(first.photo_refs, vec!["photo-abc"]);

        // Optional fields default cleanly.
        let second = &places[1];
        assert_eq!(second.vicinity, None);
        assert_eq!(second.rating, None);
        assert!(second.categories.is_empty());
    }

    #[test]
    fn test_parse_zero_results_is_empty_not_error() {
        let body = r#"{"status": "ZERO_RESULTS", "results": []}"#;
        let places = parse_nearby_response(body, SearchRadius::Km10).unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_parse_non_ok_status_is_empty_not_error() {
        let body = r#"{"status": "OVER_QUERY_LIMIT", "results": [], "error_message": "quota"}"#;
        let places = parse_nearby_response(body, SearchRadius::Km5).unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn test_parse_malformed_body_is_error() {
        assert!(parse_nearby_response("not json", SearchRadius::Km10).is_err());
    }
}
