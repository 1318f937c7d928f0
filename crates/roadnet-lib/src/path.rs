use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, Node, NodeIndex};

/// Candidate path from the search root to some frontier node.
///
/// `f` is always `g + h`: `g` is the travelled distance along `path` and `h`
/// the straight-line distance from the last node of `path` to the target.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path: Vec<NodeIndex>,
    g: f64,
    h: f64,
    f: f64,
}

impl Route {
    fn new(path: Vec<NodeIndex>, g: f64, h: f64) -> Self {
        debug_assert!(!path.is_empty(), "route paths always contain the root");
        Self { path, g, h, f: g + h }
    }

    /// Route that has not left `root` yet.
    fn start(root: NodeIndex, h: f64) -> Self {
        Self::new(vec![root], 0.0, h)
    }

    /// Child route that continues one edge further to `next`.
    fn extend(&self, next: NodeIndex, step: f64, h: f64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Self::new(path, self.g + step, h)
    }

    /// Last node of the route.
    pub fn frontier_node(&self) -> NodeIndex {
        self.path[self.path.len() - 1]
    }

    /// Node indices from the root to the frontier node.
    pub fn path(&self) -> &[NodeIndex] {
        &self.path
    }

    pub fn indices(&self) -> Vec<NodeIndex> {
        self.path.clone()
    }

    pub fn into_indices(self) -> Vec<NodeIndex> {
        self.path
    }

    pub fn g_value(&self) -> f64 {
        self.g
    }

    pub fn h_value(&self) -> f64 {
        self.h
    }

    pub fn f_value(&self) -> f64 {
        self.f
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Frontier slot ordering routes by lowest `f`, then by latest insertion.
#[derive(Debug)]
struct FrontierEntry {
    estimate: FloatOrd,
    sequence: u64,
    route: Route,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse the estimate so BinaryHeap pops the minimum; equal estimates
        // pop the most recently pushed route first.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Search state for one query at a time over a shared, read-only [`Graph`].
///
/// A session may be reused for sequential queries; every run starts from a
/// clean frontier. Independent sessions over the same graph do not interact.
#[derive(Debug)]
pub struct SearchSession<'g> {
    graph: &'g Graph,
    root: Option<NodeIndex>,
    target: Option<NodeIndex>,
    frontier: BinaryHeap<FrontierEntry>,
    visited: Vec<bool>,
    result: Option<Route>,
    expanded: usize,
    next_sequence: u64,
}

impl<'g> SearchSession<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            root: None,
            target: None,
            frontier: BinaryHeap::new(),
            visited: Vec::new(),
            result: None,
            expanded: 0,
            next_sequence: 0,
        }
    }

    /// Session with both endpoints selected up front.
    pub fn with_endpoints(graph: &'g Graph, root: NodeIndex, target: NodeIndex) -> Result<Self> {
        let mut session = Self::new(graph);
        session.set_root(root)?;
        session.set_target(target)?;
        Ok(session)
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn root(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn target(&self) -> Option<NodeIndex> {
        self.target
    }

    pub fn set_root(&mut self, root: NodeIndex) -> Result<()> {
        self.graph.validate_index(root)?;
        self.root = Some(root);
        Ok(())
    }

    pub fn set_target(&mut self, target: NodeIndex) -> Result<()> {
        self.graph.validate_index(target)?;
        self.target = Some(target);
        Ok(())
    }

    /// Select both endpoints, run the search, and return the path indices.
    ///
    /// `Ok(None)` means the target is unreachable from the root.
    pub fn find_route(
        &mut self,
        root: NodeIndex,
        target: NodeIndex,
    ) -> Result<Option<Vec<NodeIndex>>> {
        self.set_root(root)?;
        self.set_target(target)?;
        Ok(self.run()?.map(Route::indices))
    }

    /// Path of the route found by the last run, if any.
    pub fn found_path(&self) -> Option<Vec<NodeIndex>> {
        self.result.as_ref().map(Route::indices)
    }

    pub fn found_route(&self) -> Option<&Route> {
        self.result.as_ref()
    }

    /// Number of nodes expanded by the last run.
    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Run A* from the selected root to the selected target.
    pub fn run(&mut self) -> Result<Option<&Route>> {
        let root = self.root.ok_or(Error::MissingEndpoint { which: "root" })?;
        let target = self
            .target
            .ok_or(Error::MissingEndpoint { which: "target" })?;

        let graph = self.graph;
        let root_node = graph.validate_index(root)?;
        let target_node = graph.validate_index(target)?;

        self.reset();
        debug!(root, target, nodes = graph.len(), "starting route search");
        self.push(Route::start(root, root_node.distance_to(target_node)));

        while let Some(FrontierEntry { route, .. }) = self.frontier.pop() {
            let current = route.frontier_node();
            if self.visited[current] {
                continue;
            }
            self.visited[current] = true;
            self.expanded += 1;

            if current == target {
                debug!(
                    root,
                    target,
                    cost = route.g_value(),
                    hops = route.path().len() - 1,
                    expanded = self.expanded,
                    "route found"
                );
                self.result = Some(route);
                return Ok(self.result.as_ref());
            }

            self.expand(&route, &graph.nodes()[current], target_node);
        }

        debug!(
            root,
            target,
            expanded = self.expanded,
            "frontier exhausted without reaching target"
        );
        Ok(None)
    }

    fn expand(&mut self, route: &Route, current: &Node, target: &Node) {
        trace!(
            node = current.index,
            g = route.g_value(),
            f = route.f_value(),
            "expanding"
        );
        let graph = self.graph;
        let nodes = graph.nodes();
        for &neighbour in current.neighbours() {
            if self.visited[neighbour] {
                continue;
            }
            let next = &nodes[neighbour];
            let child = route.extend(neighbour, current.distance_to(next), next.distance_to(target));
            self.push(child);
        }
    }

    fn push(&mut self, route: Route) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.frontier.push(FrontierEntry {
            estimate: FloatOrd(route.f_value()),
            sequence,
            route,
        });
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.visited.resize(self.graph.len(), false);
        self.result = None;
        self.expanded = 0;
        self.next_sequence = 0;
    }
}

/// Find the shortest route between `root` and `target` with a fresh session.
///
/// Returns `Ok(None)` when no route exists and `InvalidIndex` when either
/// endpoint is not a node of `graph`.
pub fn find_route(
    graph: &Graph,
    root: NodeIndex,
    target: NodeIndex,
) -> Result<Option<Vec<NodeIndex>>> {
    SearchSession::new(graph).find_route(root, target)
}
