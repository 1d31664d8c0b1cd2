//! Geographic domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Search radius around the resolved location.
///
/// The radius is picked from a fixed set rather than entered freely, so a
/// search request can never carry an arbitrary scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchRadius {
    Km5,
    Km10,
    Km20,
    Km30,
}

impl SearchRadius {
    /// All selectable radii, in ascending order.
    pub const ALL: [SearchRadius; 4] = [Self::Km5, Self::Km10, Self::Km20, Self::Km30];

    pub fn as_km(&self) -> u32 {
        match self {
            Self::Km5 => 5,
            Self::Km10 => 10,
            Self::Km20 => 20,
            Self::Km30 => 30,
        }
    }

    /// Radius in meters, as the places API expects it.
    pub fn as_meters(&self) -> u32 {
        self.as_km() * 1000
    }
}

impl Default for SearchRadius {
    fn default() -> Self {
        Self::Km10
    }
}

impl fmt::Display for SearchRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.as_km())
    }
}

impl FromStr for SearchRadius {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5" => Ok(Self::Km5),
            "10" => Ok(Self::Km10),
            "20" => Ok(Self::Km20),
            "30" => Ok(Self::Km30),
            other => Err(format!(
                "invalid radius '{other}': expected one of 5, 10, 20, 30"
            )),
        }
    }
}

/// The geographic scope of a place search.
///
/// Produced only by the location resolvers and replaced wholesale on each
/// new resolution, never merged with the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLocation {
    pub center: Coordinate,
    /// What the user asked for, e.g. the geocoded address text or
    /// "current position".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SearchLocation {
    pub fn new(center: Coordinate, label: impl Into<String>) -> Self {
        Self {
            center,
            label: Some(label.into()),
        }
    }
}

/// A point of interest returned by the nearby-search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Provider-assigned id, unique within one search response.
    pub id: String,
    pub name: String,
    /// Short address snippet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vicinity: Option<String>,
    pub location: Coordinate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Category tags assigned by the provider.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Opaque photo references for later retrieval.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photo_refs: Vec<String>,
}
