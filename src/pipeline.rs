use std::fmt::Write;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::{
    export::{kml, table},
    matcher::{find_nearby_pairs, par_find_nearby_pairs},
    sources,
    utils::spinner,
    Brand, Config, Location, MatchedPair,
};

/// Fetches one brand's California locations and replaces the stored copy.
pub fn fetch(config: &Config, brand: Brand) -> Result<Vec<Location>> {
    let agent = config.agent();

    let pb = spinner(format!("Fetching {brand} locations in California..."));
    let result = sources::fetch(brand, &agent);
    pb.finish_and_clear();
    let locations = result.with_context(|| format!("failed to fetch {brand} locations"))?;

    if locations.is_empty() {
        warn!(%brand, "upstream returned no locations");
    }

    let path = config.data().save_locations(brand, &locations)?;
    info!(%brand, count = locations.len(), path = %path.display(), "saved locations");
    Ok(locations)
}

/// Matches the stored locations and replaces the stored pairs.
pub fn find_nearby(config: &Config) -> Result<Vec<MatchedPair>> {
    let params = config.match_params();
    params.validate()?;

    let data = config.data();
    let superchargers = data.load_locations(Brand::Supercharger)?;
    let in_n_outs = data.load_locations(Brand::InNOut)?;

    info!(
        superchargers = superchargers.len(),
        in_n_outs = in_n_outs.len(),
        max_distance = config.max_distance,
        "finding In-N-Out locations near superchargers"
    );

    let pairs = if config.parallel {
        par_find_nearby_pairs(&superchargers, &in_n_outs, &params)
    } else {
        find_nearby_pairs(&superchargers, &in_n_outs, &params)
    };

    let path = data.save_pairs(&pairs)?;
    info!(count = pairs.len(), path = %path.display(), "saved nearby pairs");
    Ok(pairs)
}

/// Writes the CSV and KML exports of the stored pairs.
pub fn export(config: &Config) -> Result<()> {
    let data = config.data();
    let pairs = data.load_pairs()?;

    let path = data.csv_path();
    data.write(&path, &table::render(&pairs)?)?;
    info!(count = pairs.len(), path = %path.display(), "exported CSV");

    let path = data.kml_path();
    data.write(&path, &kml::render(&pairs)?)?;
    info!(count = pairs.len(), path = %path.display(), "exported KML");

    Ok(())
}

/// Every stage in order. The first failure stops the run.
pub fn run(config: &Config) -> Result<Vec<MatchedPair>> {
    for brand in Brand::all() {
        fetch(config, brand)?;
    }
    let pairs = find_nearby(config)?;
    export(config)?;
    Ok(pairs)
}

pub fn report(pairs: &[MatchedPair]) -> Result<String> {
    let mut output = String::new();
    writeln!(
        output,
        "Found {} Supercharger + In-N-Out combinations!\n",
        pairs.len()
    )?;

    for pair in pairs {
        let sc = &pair.supercharger;
        let ino = &pair.in_n_out;
        writeln!(output, "📍 {}, {}", sc.name, sc.city)?;
        writeln!(output, "   🍔 {}, {}", ino.address, ino.city)?;
        writeln!(
            output,
            "   📏 {}m (~{} min walk)\n",
            pair.distance_meters, pair.walking_minutes
        )?;
    }

    Ok(output)
}
