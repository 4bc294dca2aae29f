use anyhow::{bail, Result};
use geo::{GeodesicDistance, Point};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Location;

// metres
pub const MAX_DISTANCE_METERS: f64 = 400.0;
// metres per minute
pub const WALKING_SPEED: f64 = 80.0;

// a degree of latitude is never shorter than ~110.57km on WGS-84
const MIN_METERS_PER_DEGREE_LAT: f64 = 110_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchParams {
    pub max_distance_meters: f64,
    pub walking_speed: f64,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            max_distance_meters: MAX_DISTANCE_METERS,
            walking_speed: WALKING_SPEED,
        }
    }
}

impl MatchParams {
    /// Rejects parameters whose rounded metres or minutes would not fit a `u32`.
    pub fn validate(&self) -> Result<()> {
        let max = f64::from(u32::MAX);
        if !self.max_distance_meters.is_finite()
            || !(0.0..=max).contains(&self.max_distance_meters)
        {
            bail!("invalid max distance: {}", self.max_distance_meters);
        }
        if !self.walking_speed.is_finite()
            || self.walking_speed <= 0.0
            || self.max_distance_meters / self.walking_speed > max
        {
            bail!("invalid walking speed: {}", self.walking_speed);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub supercharger: Location,
    pub in_n_out: Location,
    pub distance_meters: u32,
    pub walking_minutes: u32,
}

/// Pairs every supercharger with every In-N-Out within walking distance.
///
/// `params` are expected to have passed [`MatchParams::validate`].
/// Records missing a coordinate are skipped. The result is sorted by rounded
/// distance; ties keep supercharger-major, In-N-Out-minor input order.
pub fn find_nearby_pairs(
    superchargers: &[Location],
    in_n_outs: &[Location],
    params: &MatchParams,
) -> Vec<MatchedPair> {
    let in_n_outs = located(in_n_outs);
    let mut pairs: Vec<_> = superchargers
        .iter()
        .flat_map(|charger| nearby(charger, &in_n_outs, params))
        .collect();

    pairs.sort_by_key(|x| x.distance_meters);
    pairs
}

/// Same result as [`find_nearby_pairs`], with the supercharger loop spread
/// over the rayon pool. Collection keeps input order so ties are unchanged.
pub fn par_find_nearby_pairs(
    superchargers: &[Location],
    in_n_outs: &[Location],
    params: &MatchParams,
) -> Vec<MatchedPair> {
    let in_n_outs = located(in_n_outs);
    let mut pairs: Vec<_> = superchargers
        .par_iter()
        .flat_map_iter(|charger| nearby(charger, &in_n_outs, params))
        .collect();

    pairs.sort_by_key(|x| x.distance_meters);
    pairs
}

fn located(locations: &[Location]) -> Vec<(Point, &Location)> {
    locations
        .iter()
        .filter_map(|x| Some((x.point()?, x)))
        .collect()
}

fn nearby<'a>(
    charger: &'a Location,
    in_n_outs: &'a [(Point, &'a Location)],
    params: &'a MatchParams,
) -> impl Iterator<Item = MatchedPair> + 'a {
    charger.point().into_iter().flat_map(move |origin| {
        in_n_outs.iter().filter_map(move |(point, store)| {
            // cheap latitude-only bound, never rejects a real match
            let lat_gap = (origin.y() - point.y()).abs() * MIN_METERS_PER_DEGREE_LAT;
            if lat_gap > params.max_distance_meters {
                return None;
            }

            let distance = origin.geodesic_distance(point);
            if distance > params.max_distance_meters {
                return None;
            }

            Some(MatchedPair {
                supercharger: charger.clone(),
                in_n_out: (*store).clone(),
                distance_meters: round(distance),
                walking_minutes: round(distance / params.walking_speed),
            })
        })
    })
}

// half to even
fn round(x: f64) -> u32 {
    x.round_ties_even() as u32
}
