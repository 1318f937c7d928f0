//! Output formatting for routes and map summaries.
//!
//! Renderers write to any [`Write`] so the binary can target stdout while
//! tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use roadnet_lib::{Graph, NodeIndex, RoutePlan};

/// Output formats supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Serializable overview of a loaded road network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub intersections: usize,
    pub roads: usize,
    pub nodes: Vec<NodeSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub index: NodeIndex,
    pub position: (f64, f64),
    pub neighbours: Vec<NodeIndex>,
}

impl MapSummary {
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            intersections: graph.len(),
            roads: graph.edge_count(),
            nodes: graph
                .nodes()
                .iter()
                .map(|node| NodeSummary {
                    index: node.index,
                    position: node.coordinates(),
                    neighbours: node.neighbours().to_vec(),
                })
                .collect(),
        }
    }
}

/// Render a planned route.
pub fn render_route(
    out: &mut impl Write,
    format: OutputFormat,
    plan: &RoutePlan,
    graph: &Graph,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, plan),
        OutputFormat::Text => {
            writeln!(
                out,
                "Route from {} to {} ({} hops):",
                plan.start,
                plan.goal,
                plan.hop_count()
            )?;
            for &step in &plan.steps {
                match graph.node(step) {
                    Some(node) => {
                        let (x, y) = node.coordinates();
                        writeln!(out, "- {step} ({x:.2}, {y:.2})")?;
                    }
                    None => writeln!(out, "- {step}")?,
                }
            }
            writeln!(out)?;
            writeln!(out, "Total distance: {:.3}", plan.total_cost)
        }
    }
}

/// Render the node table of a road network.
pub fn render_summary(
    out: &mut impl Write,
    format: OutputFormat,
    summary: &MapSummary,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, summary),
        OutputFormat::Text => {
            writeln!(out, "Intersections: {}", summary.intersections)?;
            writeln!(out, "Roads: {}", summary.roads)?;
            for node in &summary.nodes {
                let (x, y) = node.position;
                let neighbours = node
                    .neighbours
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                if neighbours.is_empty() {
                    writeln!(out, "{} ({x:.2}, {y:.2}) -> (none)", node.index)?;
                } else {
                    writeln!(out, "{} ({x:.2}, {y:.2}) -> {neighbours}", node.index)?;
                }
            }
            Ok(())
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
