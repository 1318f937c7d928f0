use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};
use crate::map::RoadMap;
use crate::path::SearchSession;

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: NodeIndex,
    pub goal: NodeIndex,
}

impl RouteRequest {
    pub fn new(start: NodeIndex, goal: NodeIndex) -> Self {
        Self { start, goal }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeIndex,
    pub goal: NodeIndex,
    pub steps: Vec<NodeIndex>,
    /// Euclidean length of the whole route.
    pub total_cost: f64,
    /// Nodes expanded by the search that produced this plan.
    pub expanded: usize,
}

impl RoutePlan {
    /// Number of roads travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the shortest route for `request`, treating "no route" as an error.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let mut session = SearchSession::with_endpoints(graph, request.start, request.goal)?;
    let Some(route) = session.run()? else {
        return Err(Error::RouteNotFound {
            start: request.start,
            goal: request.goal,
        });
    };

    let total_cost = route.g_value();
    let steps = route.indices();
    if steps.is_empty() {
        return Err(Error::EmptyRoutePlan);
    }

    Ok(RoutePlan {
        start: request.start,
        goal: request.goal,
        steps,
        total_cost,
        expanded: session.expanded_count(),
    })
}

/// Build a graph for `map` and return the shortest path from `start` to `goal`.
///
/// `Ok(None)` means the goal is unreachable.
pub fn shortest_path(
    map: &RoadMap,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Option<Vec<NodeIndex>>> {
    debug!(start, goal, "shortest path requested");
    let graph = Graph::from_map(map)?;
    SearchSession::new(&graph).find_route(start, goal)
}
