//! Client-side category filter over nearby-search results.
//!
//! The provider's nearby search can return loosely related categories, so
//! results are narrowed to entries whose tags or name match the target
//! keyword before they reach the caller.

use crate::geo::model::Place;

/// True when the place carries the keyword as a category tag or in its name.
pub fn matches_keyword(place: &Place, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    place
        .categories
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(&keyword))
        || place.name.to_lowercase().contains(&keyword)
}

/// Keeps only places matching the keyword, preserving provider order.
pub fn filter_places(places: Vec<Place>, keyword: &str) -> Vec<Place> {
    places
        .into_iter()
        .filter(|p| matches_keyword(p, keyword))
        .collect()
}
