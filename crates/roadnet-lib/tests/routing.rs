mod common;

use roadnet_lib::{plan_route, shortest_path, Error, RoadMap, RouteRequest};

use common::{fixture_graph, fixture_map, EPSILON};

#[test]
fn plan_reports_steps_and_cost() {
    let graph = fixture_graph("line.json");
    let plan = plan_route(&graph, &RouteRequest::new(0, 2)).expect("route exists");

    assert_eq!(plan.start, 0);
    assert_eq!(plan.goal, 2);
    assert_eq!(plan.steps, vec![0, 1, 2]);
    assert_eq!(plan.hop_count(), 2);
    assert_eq!(plan.total_cost, 2.0);
    assert_eq!(plan.expanded, 3);
}

#[test]
fn plan_for_same_start_and_goal_has_no_hops() {
    let graph = fixture_graph("square.json");
    let plan = plan_route(&graph, &RouteRequest::new(3, 3)).expect("trivial route");

    assert_eq!(plan.steps, vec![3]);
    assert_eq!(plan.hop_count(), 0);
    assert_eq!(plan.total_cost, 0.0);
}

#[test]
fn unreachable_goal_is_route_not_found() {
    let graph = fixture_graph("town.json");
    let error = plan_route(&graph, &RouteRequest::new(0, 9)).expect_err("disconnected");

    assert!(matches!(error, Error::RouteNotFound { start: 0, goal: 9 }));
    assert!(format!("{error}").contains("no route found"));
}

#[test]
fn plan_rejects_unknown_nodes() {
    let graph = fixture_graph("square.json");
    let error = plan_route(&graph, &RouteRequest::new(0, 4)).expect_err("no node 4");
    assert!(matches!(error, Error::InvalidIndex { index: 4, .. }));
}

#[test]
fn plan_serializes_to_json() {
    let graph = fixture_graph("town.json");
    let plan = plan_route(&graph, &RouteRequest::new(0, 1)).unwrap();
    let value = serde_json::to_value(&plan).expect("plan serializes");

    assert_eq!(value["steps"], serde_json::json!([0, 1]));
    assert_eq!(value["total_cost"], serde_json::json!(2.0));
    assert_eq!(value["start"], serde_json::json!(0));
}

#[test]
fn shortest_path_builds_graph_from_map() {
    let map = fixture_map("town.json");

    let path = shortest_path(&map, 2, 6).unwrap().expect("route exists");
    assert_eq!(path, vec![2, 5, 7, 6]);
    assert_eq!(shortest_path(&map, 3, 8).unwrap(), None);
}

#[test]
fn shortest_path_on_square_costs_two() {
    let map = fixture_map("square.json");
    let graph = fixture_graph("square.json");

    let path = shortest_path(&map, 0, 2).unwrap().expect("route exists");
    let cost = graph.path_cost(&path).unwrap();
    assert!((cost - 2.0).abs() < EPSILON);
}

#[test]
fn shortest_path_rejects_invalid_maps() {
    let map = RoadMap::from_parts(&[(0.0, 0.0), (1.0, 1.0)], &[&[1], &[2]]);
    let error = shortest_path(&map, 0, 1).expect_err("road to missing node");
    assert!(matches!(error, Error::InvalidMap { .. }));
}
