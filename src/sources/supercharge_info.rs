use anyhow::{Context, Result};
use serde::Deserialize;
use ureq::Agent;

use crate::Location;

const ALL_SITES: &str = "https://supercharge.info/service/supercharge/allSites";

const STATE: &str = "CA";
const OPEN: &str = "OPEN";

pub fn fetch(agent: &Agent) -> Result<Vec<Location>> {
    let sites: Vec<RawSite> = agent
        .get(ALL_SITES)
        .call()?
        .into_json()
        .context("malformed supercharge.info response")?;

    Ok(california(sites))
}

fn california(sites: Vec<RawSite>) -> Vec<Location> {
    sites
        .into_iter()
        .filter(|x| x.status.as_deref() == Some(OPEN))
        .filter_map(|x| {
            let address = x.address.unwrap_or_default();
            if address.state.as_deref() != Some(STATE) {
                return None;
            }

            let gps = x.gps.unwrap_or_default();
            Some(Location {
                name: x.name.unwrap_or_default(),
                address: address.street.unwrap_or_default(),
                city: address.city.unwrap_or_default(),
                lat: gps.latitude,
                lng: gps.longitude,
                stalls: x.stall_count,
            })
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSite {
    name: Option<String>,
    status: Option<String>,
    address: Option<RawAddress>,
    gps: Option<RawGps>,
    stall_count: Option<u32>,
}

#[derive(Default, Deserialize)]
struct RawAddress {
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
}

#[derive(Default, Deserialize)]
struct RawGps {
    latitude: Option<f64>,
    longitude: Option<f64>,
}
