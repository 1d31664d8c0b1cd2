//! Location and search service contracts.

use async_trait::async_trait;

use crate::error::Result;
use crate::geo::model::{Coordinate, Place, SearchRadius};

/// Source of the device's own position.
///
/// Returns `PermissionDenied` when the user or OS refuses location access;
/// callers must not fall back to a search in that case.
#[async_trait]
pub trait DeviceLocator: Send + Sync {
    /// Obtains a single high-accuracy fix.
    async fn locate(&self) -> Result<Coordinate>;
}

/// Converts free-text addresses into coordinates.
#[async_trait]
pub trait GeocodingService: Send + Sync {
    /// Geocodes an address.
    ///
    /// Returns `Ok(None)` when the provider reports zero candidates;
    /// otherwise the first candidate's coordinate wins.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>>;
}

/// Radius-bounded point-of-interest search.
#[async_trait]
pub trait NearbySearchService: Send + Sync {
    /// Returns points of interest within `radius` of `center`, scoped to
    /// the provider category.
    ///
    /// Zero results and non-OK provider statuses both come back as an empty
    /// list; implementations log the two cases distinctly.
    async fn search_nearby(
        &self,
        center: Coordinate,
        radius: SearchRadius,
        category: &str,
    ) -> Result<Vec<Place>>;
}
