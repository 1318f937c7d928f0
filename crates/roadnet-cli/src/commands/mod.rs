// Each module handles one CLI subcommand; main.rs only parses and dispatches.

pub mod inspect;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use roadnet_lib::{load_map, Graph};

/// Load the map at `path` and build its routing graph.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let map =
        load_map(path).with_context(|| format!("failed to load map from {}", path.display()))?;
    Graph::from_map(&map)
        .with_context(|| format!("{} is not a valid road network", path.display()))
}
