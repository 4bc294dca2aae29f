//! Upstream location providers.
//!
//! Each provider returns normalised [`Location`]s; any transport or decoding
//! failure is returned as an error and aborts the fetch.

use anyhow::Result;
use ureq::Agent;

use crate::{Brand, Location};

mod in_n_out;
mod overpass;
mod supercharge_info;

pub fn fetch(brand: Brand, agent: &Agent) -> Result<Vec<Location>> {
    match brand {
        Brand::Supercharger => supercharge_info::fetch(agent),
        Brand::InNOut => in_n_out::fetch(agent),
    }
}
