use std::collections::BTreeMap;

use anyhow::{Context, Result};
use geo::Point;
use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

const INTERPRETER: &str = "https://overpass-api.de/api/interpreter";

pub fn query(agent: &Agent, q: &str) -> Result<Vec<OsmElement>> {
    let response: OverpassResponse = agent
        .post(INTERPRETER)
        .send_form(&[("data", q)])?
        .into_json()
        .context("malformed Overpass response")?;

    Ok(response.simplify())
}

#[derive(Deserialize)]
pub(crate) struct OverpassResponse {
    #[serde(default)]
    elements: Vec<RawElement>,
}

impl OverpassResponse {
    pub(crate) fn simplify(self) -> Vec<OsmElement> {
        self.elements
            .into_iter()
            .filter_map(|x| x.simplify())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum RawElement {
    Node {
        id: u64,
        lat: Option<f64>,
        lon: Option<f64>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Way {
        id: u64,
        center: Option<RawPosition>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: u64,
        center: Option<RawPosition>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    #[serde(other)]
    Other,
}

impl RawElement {
    fn simplify(self) -> Option<OsmElement> {
        let (id, position, tags) = match self {
            Self::Node { id, lat, lon, tags } => (
                OsmId::Node(id),
                lat.zip(lon).map(|(lat, lon)| RawPosition { lat, lon }),
                tags,
            ),
            Self::Way { id, center, tags } => (OsmId::Way(id), center, tags),
            Self::Relation { id, center, tags } => (OsmId::Relation(id), center, tags),
            Self::Other => return None,
        };

        let Some(position) = position else {
            debug!(element = %id.link(), "skipping element without a position");
            return None;
        };

        Some(OsmElement {
            id,
            point: position.simplify(),
            tags,
        })
    }
}

#[derive(Deserialize)]
struct RawPosition {
    lat: f64,
    lon: f64,
}

impl RawPosition {
    fn simplify(self) -> Point {
        Point::new(self.lon, self.lat)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OsmId {
    Node(u64),
    Way(u64),
    Relation(u64),
}

impl OsmId {
    pub fn link(&self) -> String {
        match self {
            Self::Node(x) => format!("https://www.openstreetmap.org/node/{x}"),
            Self::Way(x) => format!("https://www.openstreetmap.org/way/{x}"),
            Self::Relation(x) => format!("https://www.openstreetmap.org/relation/{x}"),
        }
    }
}

#[derive(Debug)]
pub struct OsmElement {
    pub id: OsmId,
    pub point: Point,
    pub tags: BTreeMap<String, String>,
}
