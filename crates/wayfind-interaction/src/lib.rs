//! HTTP provider clients.
//!
//! Concrete implementations of the core service traits against the hosted
//! identity provider and the maps provider's geocoding and nearby-search
//! endpoints. Calls are single round trips: no retry, no timeout, no
//! cancellation.

pub mod geocoding_client;
pub mod identity_client;
pub mod places_client;

pub use geocoding_client::GeocodingClient;
pub use identity_client::IdentityClient;
pub use places_client::PlacesClient;
