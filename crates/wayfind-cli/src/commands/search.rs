//! Search command: resolve a location and list nearby places.

use anyhow::{Result, bail};

use wayfind_core::geo::SearchRadius;

use crate::commands::utils;

pub async fn run(
    address: Option<String>,
    device: bool,
    radius: Option<String>,
    keyword: Option<String>,
) -> Result<()> {
    let config = utils::load_config()?;

    let radius = match radius {
        Some(raw) => raw
            .parse::<SearchRadius>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => config.default_radius,
    };

    let search = utils::search_usecase(&config, radius, keyword)?;

    let state = if let Some(address) = address {
        search.locate_from_address(&address).await?
    } else if device {
        search.locate_from_device().await?
    } else {
        bail!("pass --address <text> or --device to pick a search location");
    };

    let label = state
        .location
        .as_ref()
        .and_then(|l| l.label.clone())
        .unwrap_or_else(|| "the selected location".to_string());

    if state.places.is_empty() {
        println!("No matches found within {radius} of {label}.");
        return Ok(());
    }

    println!(
        "{} places within {radius} of {label}:",
        state.places.len()
    );
    for place in &state.places {
        let rating = place
            .rating
            .map(|r| format!(" [{r:.1}]"))
            .unwrap_or_default();
        let vicinity = place
            .vicinity
            .as_deref()
            .map(|v| format!(" - {v}"))
            .unwrap_or_default();
        println!("  {}{rating}{vicinity}", place.name);
    }

    Ok(())
}
