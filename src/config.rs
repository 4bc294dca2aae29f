use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Result};
use clap::Args;
use ureq::{Agent, AgentBuilder};

use crate::{
    matcher::{MatchParams, MAX_DISTANCE_METERS, WALKING_SPEED},
    storage::DataDir,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Settings shared by every stage, each with a NEARBY_* environment fallback.
#[derive(Clone, Debug, Args)]
pub struct Config {
    /// Directory for fetched locations, matches and exports
    #[arg(long, global = true, env = "NEARBY_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Maximum walking distance in metres
    #[arg(long, global = true, env = "NEARBY_MAX_DISTANCE", default_value_t = MAX_DISTANCE_METERS)]
    pub max_distance: f64,

    /// Walking speed in metres per minute
    #[arg(long, global = true, env = "NEARBY_WALKING_SPEED", default_value_t = WALKING_SPEED)]
    pub walking_speed: f64,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, env = "NEARBY_TIMEOUT", default_value_t = 60)]
    pub timeout: u64,

    /// Spread matching over all cores
    #[arg(long, global = true, env = "NEARBY_PARALLEL")]
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            max_distance: MAX_DISTANCE_METERS,
            walking_speed: WALKING_SPEED,
            timeout: 60,
            parallel: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.match_params().validate()?;
        if self.timeout == 0 {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    pub fn data(&self) -> DataDir {
        DataDir::new(&self.data_dir)
    }

    pub fn match_params(&self) -> MatchParams {
        MatchParams {
            max_distance_meters: self.max_distance,
            walking_speed: self.walking_speed,
        }
    }

    pub fn agent(&self) -> Agent {
        AgentBuilder::new()
            .timeout(Duration::from_secs(self.timeout))
            .user_agent(USER_AGENT)
            .build()
    }
}
