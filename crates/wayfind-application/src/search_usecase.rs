//! Map-search use case implementation.
//!
//! Owns the map screen's view state: the resolved search location, the
//! selected radius, and the current result set. Each successful location
//! resolution triggers one search as a stated side effect, and every search
//! wholly replaces the previous result set.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use wayfind_core::error::{Result, WayfindError};
use wayfind_core::geo::{
    DeviceLocator, GeocodingService, NearbySearchService, Place, SearchLocation, SearchRadius,
    filter_places,
};

/// Snapshot of the map screen's view state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Where the search is centered, once a resolver has produced a fix.
    pub location: Option<SearchLocation>,
    /// Current search radius.
    pub radius: SearchRadius,
    /// Places on display. Replaced wholesale on every search.
    pub places: Vec<Place>,
    /// Id of the selected marker, when it still resolves to a place.
    pub selected: Option<String>,
}

/// Use case for the location-search flow.
///
/// The resolvers here are the sole producers of the search location, and a
/// successful resolution immediately triggers one place search - the caller
/// never has to remember to invoke it.
pub struct MapSearchUseCase {
    device: Arc<dyn DeviceLocator>,
    geocoder: Arc<dyn GeocodingService>,
    search: Arc<dyn NearbySearchService>,
    keyword: String,
    state: RwLock<SearchState>,
}

impl MapSearchUseCase {
    pub fn new(
        device: Arc<dyn DeviceLocator>,
        geocoder: Arc<dyn GeocodingService>,
        search: Arc<dyn NearbySearchService>,
        keyword: impl Into<String>,
        default_radius: SearchRadius,
    ) -> Self {
        Self {
            device,
            geocoder,
            search,
            keyword: keyword.into(),
            state: RwLock::new(SearchState {
                radius: default_radius,
                ..SearchState::default()
            }),
        }
    }

    /// Resolves the search location from the device position.
    ///
    /// A refused permission propagates as `PermissionDenied` without
    /// touching the state or triggering a search.
    pub async fn locate_from_device(&self) -> Result<SearchState> {
        let fix = self.device.locate().await?;
        self.relocate(SearchLocation::new(fix, "current position"))
            .await
    }

    /// Resolves the search location by geocoding a free-text address.
    ///
    /// Blank input is a validation error; zero geocoding candidates leave
    /// the previously selected location and results unchanged.
    pub async fn locate_from_address(&self, address: &str) -> Result<SearchState> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(WayfindError::validation("address must not be empty"));
        }

        match self.geocoder.geocode(trimmed).await? {
            Some(center) => self.relocate(SearchLocation::new(center, trimmed)).await,
            None => Err(WayfindError::not_found("address", trimmed)),
        }
    }

    /// Changes the radius and re-issues exactly one search at the last
    /// known location.
    pub async fn set_radius(&self, radius: SearchRadius) -> Result<SearchState> {
        {
            let mut state = self.state.write().await;
            if state.location.is_none() {
                return Err(WayfindError::validation(
                    "set a search location before changing the radius",
                ));
            }
            state.radius = radius;
        }
        self.run_search().await
    }

    /// Re-runs the search at the current location and radius.
    pub async fn refresh(&self) -> Result<SearchState> {
        if self.state.read().await.location.is_none() {
            return Err(WayfindError::validation("no search location set"));
        }
        self.run_search().await
    }

    /// Marks a displayed place as selected and returns it.
    pub async fn select_place(&self, id: &str) -> Result<Place> {
        let mut state = self.state.write().await;
        match state.places.iter().find(|p| p.id == id).cloned() {
            Some(place) => {
                state.selected = Some(place.id.clone());
                Ok(place)
            }
            None => Err(WayfindError::not_found("place", id)),
        }
    }

    /// Returns the selected place, if it is still displayed.
    pub async fn selected_place(&self) -> Option<Place> {
        let state = self.state.read().await;
        let id = state.selected.as_deref()?;
        state.places.iter().find(|p| p.id == id).cloned()
    }

    /// Snapshot of the current view state.
    pub async fn state(&self) -> SearchState {
        self.state.read().await.clone()
    }

    async fn relocate(&self, location: SearchLocation) -> Result<SearchState> {
        {
            let mut state = self.state.write().await;
            state.location = Some(location);
        }
        self.run_search().await
    }

    /// Issues one nearby search and replaces the displayed result set.
    ///
    /// A failed search never leaves stale results up: the set is cleared
    /// before the error propagates.
    async fn run_search(&self) -> Result<SearchState> {
        let (center, radius) = {
            let state = self.state.read().await;
            let location = state
                .location
                .as_ref()
                .ok_or_else(|| WayfindError::internal("search without a location"))?;
            (location.center, state.radius)
        };

        let outcome = self.search.search_nearby(center, radius, &self.keyword).await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(results) => {
                let total = results.len();
                let filtered = filter_places(results, &self.keyword);
                debug!(
                    "Nearby search within {radius} returned {total} places, {} after '{}' filter",
                    filtered.len(),
                    self.keyword
                );
                state.places = filtered;
            }
            Err(err) => {
                warn!("Nearby search failed, clearing displayed results: {err}");
                state.places.clear();
                state.selected = None;
                return Err(err);
            }
        }

        // Drop a selection that no longer points at a displayed place.
        state.selected = state
            .selected
            .take()
            .filter(|id| state.places.iter().any(|p| &p.id == id));

        Ok(state.clone())
    }
}
