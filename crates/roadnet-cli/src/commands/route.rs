//! Route command handler for computing paths between intersections.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use roadnet_cli::output::{render_route, OutputFormat};
use roadnet_lib::{plan_route, NodeIndex, RouteRequest};

use super::load_graph;

/// Arguments for the route command.
#[derive(Debug, Clone, Copy)]
pub struct RouteCommandArgs {
    /// Starting intersection index.
    pub from: NodeIndex,
    /// Destination intersection index.
    pub to: NodeIndex,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(self) -> RouteRequest {
        RouteRequest::new(self.from, self.to)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    map_path: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let graph = load_graph(map_path)?;
    let plan = plan_route(&graph, &args.to_request())?;
    debug!(
        hops = plan.hop_count(),
        cost = plan.total_cost,
        expanded = plan.expanded,
        "route planned"
    );

    let stdout = io::stdout();
    render_route(&mut stdout.lock(), format, &plan, &graph).context("failed to write route")
}
