//! Road network library entry points.
//!
//! This crate exposes helpers to load a road map, build the indexed node graph
//! from it, and run A* shortest-path searches between intersections. Higher
//! level consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod map;
pub mod path;
pub mod routing;

pub use error::{Error, Result};
pub use graph::{build_graph, Graph, Node, NodeIndex};
pub use map::{load_map, Position, RoadMap};
pub use path::{find_route, Route, SearchSession};
pub use routing::{plan_route, shortest_path, RoutePlan, RouteRequest};
