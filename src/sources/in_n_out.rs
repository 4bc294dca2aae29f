use anyhow::Result;
use ureq::Agent;

use crate::Location;

use super::overpass::{self, OsmElement};

const QUERY: &str = r#"
    [out:json][timeout:60];
    area["ISO3166-2"="US-CA"]->.ca;
    (
        node["brand"="In-N-Out Burger"](area.ca);
        way["brand"="In-N-Out Burger"](area.ca);
        rel["brand"="In-N-Out Burger"](area.ca);
    );
    out center;
"#;

pub fn fetch(agent: &Agent) -> Result<Vec<Location>> {
    Ok(overpass::query(agent, QUERY)?
        .into_iter()
        .map(normalize)
        .collect())
}

fn normalize(elem: OsmElement) -> Location {
    let tag = |k: &str| elem.tags.get(k).map(String::as_str);

    let number = tag("ref").or(tag("store_number")).unwrap_or("Unknown");
    let address = format!(
        "{} {}",
        tag("addr:housenumber").unwrap_or_default(),
        tag("addr:street").unwrap_or_default()
    );

    Location {
        name: format!("In-N-Out #{number}"),
        address: address.trim().to_string(),
        city: tag("addr:city").unwrap_or_default().to_string(),
        lat: Some(elem.point.y()),
        lng: Some(elem.point.x()),
        stalls: None,
    }
}
