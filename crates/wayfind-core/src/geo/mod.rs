//! Geographic domain: coordinates, search radii, places, and the
//! resolver/search service contracts.

pub mod filter;
pub mod model;
pub mod service;

pub use filter::filter_places;
pub use model::{Coordinate, Place, SearchLocation, SearchRadius};
pub use service::{DeviceLocator, GeocodingService, NearbySearchService};
