use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::graph::NodeIndex;

/// Planar coordinates for an intersection.
///
/// Serialized as a `[longitude, latitude]` pair. Distances are plain
/// Euclidean distances on the plane, not geodesic ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

impl Position {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.longitude - other.longitude;
        let dy = self.latitude - other.latitude;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Position {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Position> for (f64, f64) {
    fn from(position: Position) -> Self {
        position.as_tuple()
    }
}

/// Raw map data as supplied by a map source.
///
/// `intersections` maps each node index to its coordinates and must cover a
/// dense `0..N` range. `roads[i]` lists the nodes directly reachable from
/// node `i`; a `null` entry means "no edge" and is skipped when the graph is
/// built. Roads are directed as encoded, so two-way roads appear in both
/// nodes' lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadMap {
    pub intersections: BTreeMap<NodeIndex, Position>,
    #[serde(default)]
    pub roads: Vec<Vec<Option<NodeIndex>>>,
}

impl RoadMap {
    /// Build a map from coordinate pairs and fully populated road lists.
    ///
    /// Intersections are indexed in the order given.
    pub fn from_parts(coordinates: &[(f64, f64)], roads: &[&[NodeIndex]]) -> Self {
        Self {
            intersections: coordinates
                .iter()
                .copied()
                .map(Position::from)
                .enumerate()
                .collect(),
            roads: roads
                .iter()
                .map(|targets| targets.iter().copied().map(Some).collect())
                .collect(),
        }
    }

    /// Parse a map from its JSON representation.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Render the map as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }
}

/// Load a road map from a JSON file on disk.
pub fn load_map(path: &Path) -> Result<RoadMap> {
    let contents = fs::read_to_string(path)?;
    let map = RoadMap::from_json_str(&contents)?;
    debug!(
        path = %path.display(),
        intersections = map.intersection_count(),
        road_lists = map.roads.len(),
        "loaded road map"
    );
    Ok(map)
}
