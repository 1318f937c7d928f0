use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use roadnet_cli::output::{render_summary, MapSummary, OutputFormat};

use super::load_graph;

/// Handle the inspect subcommand.
pub fn handle_inspect_command(map_path: &Path, format: OutputFormat) -> Result<()> {
    let graph = load_graph(map_path)?;
    let summary = MapSummary::from_graph(&graph);

    let stdout = io::stdout();
    render_summary(&mut stdout.lock(), format, &summary).context("failed to write map summary")
}
