//! Shared fixtures and reference helpers for integration tests.

use std::path::PathBuf;

use roadnet_lib::{load_map, Graph, NodeIndex, RoadMap};

/// Tolerance used when comparing summed edge lengths.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-9;

/// Path to the fixtures directory shared by the workspace.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_map(name: &str) -> RoadMap {
    let path = fixtures_dir().join(name);
    load_map(&path).unwrap_or_else(|err| panic!("load fixture {}: {err}", path.display()))
}

#[allow(dead_code)]
pub fn fixture_graph(name: &str) -> Graph {
    Graph::from_map(&fixture_map(name)).expect("fixture graph builds")
}

/// Square lattice with `width * height` nodes, unit spacing, and two-way
/// roads between orthogonal neighbours plus one-way diagonals going up-right.
#[allow(dead_code)]
pub fn grid_map(width: usize, height: usize) -> RoadMap {
    let index = |x: usize, y: usize| y * width + x;
    let mut coordinates = Vec::with_capacity(width * height);
    let mut roads: Vec<Vec<NodeIndex>> = vec![Vec::new(); width * height];

    for y in 0..height {
        for x in 0..width {
            coordinates.push((x as f64, y as f64));
            let here = index(x, y);
            if x + 1 < width {
                roads[here].push(index(x + 1, y));
                roads[index(x + 1, y)].push(here);
            }
            if y + 1 < height {
                roads[here].push(index(x, y + 1));
                roads[index(x, y + 1)].push(here);
            }
            if x + 1 < width && y + 1 < height {
                roads[here].push(index(x + 1, y + 1));
            }
        }
    }

    let road_refs: Vec<&[NodeIndex]> = roads.iter().map(Vec::as_slice).collect();
    RoadMap::from_parts(&coordinates, &road_refs)
}

/// Cheapest cost between two nodes found by exhaustive search over every
/// simple path. Only suitable for small graphs.
#[allow(dead_code)]
pub fn brute_force_cost(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<f64> {
    fn walk(
        graph: &Graph,
        current: NodeIndex,
        goal: NodeIndex,
        cost: f64,
        on_path: &mut Vec<bool>,
        best: &mut Option<f64>,
    ) {
        if current == goal {
            if best.map_or(true, |b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        for &next in graph.neighbours(current) {
            if on_path[next] {
                continue;
            }
            let step = graph.distance(current, next).expect("valid edge");
            on_path[next] = true;
            walk(graph, next, goal, cost + step, on_path, best);
            on_path[next] = false;
        }
    }

    let mut on_path = vec![false; graph.len()];
    on_path[start] = true;
    let mut best = None;
    walk(graph, start, goal, 0.0, &mut on_path, &mut best);
    best
}

/// Assert `path` starts at `start`, ends at `goal`, and follows real edges.
#[allow(dead_code)]
pub fn assert_connected_path(graph: &Graph, path: &[NodeIndex], start: NodeIndex, goal: NodeIndex) {
    assert_eq!(path.first(), Some(&start), "path begins at the root");
    assert_eq!(path.last(), Some(&goal), "path ends at the target");
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(pair[0], pair[1]),
            "no road from {} to {} in {path:?}",
            pair[0],
            pair[1]
        );
    }
}
