//! Tesla Superchargers within walking distance of In-N-Out Burger in California.
//!
//! The work is split into stages that communicate only through files in the
//! data directory: [`pipeline::fetch`] stores each brand's locations,
//! [`pipeline::find_nearby`] pairs them with [`find_nearby_pairs`], and
//! [`pipeline::export`] writes CSV and KML for map tools.

pub mod brand;
pub mod config;
pub mod export;
pub mod matcher;
pub mod model;
pub mod pipeline;
pub mod sources;
pub mod storage;
mod utils;

pub use brand::Brand;
pub use config::Config;
pub use matcher::{find_nearby_pairs, par_find_nearby_pairs, MatchParams, MatchedPair};
pub use model::Location;
pub use storage::DataDir;
