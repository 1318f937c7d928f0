use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::map::{Position, RoadMap};

/// Dense identifier for an intersection; equals its slot in the node table.
pub type NodeIndex = usize;

/// One intersection in the road network.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub index: NodeIndex,
    pub position: Position,
    neighbours: Vec<NodeIndex>,
}

impl Node {
    fn new(index: NodeIndex, position: Position) -> Self {
        Self {
            index,
            position,
            neighbours: Vec::new(),
        }
    }

    /// Outgoing connections, in the order they were declared.
    pub fn neighbours(&self) -> &[NodeIndex] {
        &self.neighbours
    }

    pub fn coordinates(&self) -> (f64, f64) {
        self.position.as_tuple()
    }

    /// Straight-line distance between two intersections.
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.position.distance_to(&other.position)
    }

    fn add_connection(&mut self, target: NodeIndex) {
        self.neighbours.push(target);
    }

    fn add_connections(&mut self, targets: impl IntoIterator<Item = NodeIndex>) {
        for target in targets {
            self.add_connection(target);
        }
    }
}

/// Immutable node table used by the search.
///
/// Neighbour lists hold indices into the same table, so the graph owns every
/// node outright. Cloning is cheap and clones share the table.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<Vec<Node>>,
}

impl Graph {
    /// Build the graph for a loaded road map.
    pub fn from_map(map: &RoadMap) -> Result<Self> {
        build_graph(&map.intersections, &map.roads)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Return the node at `index`, or `InvalidIndex` when it does not exist.
    pub fn validate_index(&self, index: NodeIndex) -> Result<&Node> {
        self.nodes.get(index).ok_or(Error::InvalidIndex {
            index,
            node_count: self.nodes.len(),
        })
    }

    /// Return the neighbours for a given node, or nothing for unknown nodes.
    pub fn neighbours(&self, index: NodeIndex) -> &[NodeIndex] {
        self.nodes
            .get(index)
            .map(Node::neighbours)
            .unwrap_or(&[])
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbours.len()).sum()
    }

    pub fn has_edge(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.neighbours(from).contains(&to)
    }

    /// Euclidean distance between two nodes of this graph.
    pub fn distance(&self, a: NodeIndex, b: NodeIndex) -> Result<f64> {
        let a = self.validate_index(a)?;
        let b = self.validate_index(b)?;
        Ok(a.distance_to(b))
    }

    /// Sum of edge lengths along `path`.
    ///
    /// Returns `None` if the path is empty, names an unknown node, or steps
    /// between two nodes that are not connected by an edge.
    pub fn path_cost(&self, path: &[NodeIndex]) -> Option<f64> {
        let first = *path.first()?;
        self.node(first)?;

        path.windows(2).try_fold(0.0, |total, pair| {
            if !self.has_edge(pair[0], pair[1]) {
                return None;
            }
            let from = self.node(pair[0])?;
            let to = self.node(pair[1])?;
            Some(total + from.distance_to(to))
        })
    }
}

/// Build a graph from intersection coordinates and per-node road lists.
///
/// Nodes are allocated first so that road lists may refer to any node,
/// including ones declared later; connections are attached in a second pass.
/// `None` road entries are skipped.
pub fn build_graph(
    intersections: &BTreeMap<NodeIndex, Position>,
    roads: &[Vec<Option<NodeIndex>>],
) -> Result<Graph> {
    let mut nodes = Vec::with_capacity(intersections.len());
    for (expected, (&index, &position)) in intersections.iter().enumerate() {
        if index != expected {
            return Err(Error::invalid_map(format!(
                "intersection indices must be contiguous from 0; expected {expected}, found {index}"
            )));
        }
        nodes.push(Node::new(index, position));
    }

    if roads.len() > nodes.len() {
        return Err(Error::invalid_map(format!(
            "road lists declared for {} nodes but only {} intersections exist",
            roads.len(),
            nodes.len()
        )));
    }

    let node_count = nodes.len();
    for (index, targets) in roads.iter().enumerate() {
        if let Some(&bad) = targets.iter().flatten().find(|&&target| target >= node_count) {
            return Err(Error::invalid_map(format!(
                "road from node {index} references node {bad}, but only {node_count} intersections exist"
            )));
        }
        nodes[index].add_connections(targets.iter().flatten().copied());
    }

    let graph = Graph {
        nodes: Arc::new(nodes),
    };
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built road graph"
    );
    Ok(graph)
}
