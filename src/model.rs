use geo::Point;
use serde::{Deserialize, Deserializer, Serialize};

/// A normalised point of interest from either upstream source.
///
/// Coordinates are optional because upstream data does not always carry a
/// fix. Records without both are kept in storage but never matched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub city: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    // superchargers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stalls: Option<u32>,
}

impl Location {
    /// `x` is longitude and `y` latitude, as `geo` expects.
    pub fn point(&self) -> Option<Point> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Point::new(lng, lat)),
            _ => None,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
