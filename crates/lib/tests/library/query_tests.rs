//! Queries against loaded graphs.

use buildgraph_lib::{Graph, GraphError, MAX_ID, TargetId, load_str};

use super::common::PROJECT_DOC;

fn project() -> Graph {
  load_str(PROJECT_DOC).unwrap()
}

#[test]
fn top_level_targets_follow_document_root() {
  let graph = project();
  let top: Vec<_> = graph.top_level_targets().unwrap().iter().map(|t| t.name()).collect();
  assert_eq!(top, vec!["app", "docs"]);
}

#[test]
fn second_document_root_is_rejected() {
  let err = load_str("DOCUMENT: [a]\na: []\nDOCUMENT: []\n").unwrap_err();
  assert!(err.to_string().contains("declared more than once"));
}

#[test]
fn every_target_round_trips_by_id() {
  let graph = project();
  for target in graph.all_targets() {
    assert_eq!(graph.target_by_id(target.id()), Ok(target));
  }
}

#[test]
fn sentinel_and_past_end_ids_fail() {
  let graph = project();
  let size = graph.size();

  let past_end = TargetId::from_index(size).unwrap();
  assert_eq!(
    graph.target_by_id(past_end),
    Err(GraphError::OutOfRange { id: past_end, size })
  );
  assert_eq!(graph.target_by_id(MAX_ID), Err(GraphError::OutOfRange { id: MAX_ID, size }));
}

#[test]
fn lookup_errors_leave_graph_usable() {
  let graph = project();
  assert!(graph.target_by_id(MAX_ID).is_err());
  assert_eq!(graph.top_level_targets().map(|t| t.len()), Some(2));
}

#[test]
fn queries_are_stable() {
  let graph = project();
  let first: Vec<_> = graph.all_targets().to_vec();
  let second: Vec<_> = graph.all_targets().to_vec();
  assert_eq!(first, second);
  assert_eq!(graph.top_level_targets(), graph.top_level_targets());
}

#[test]
fn graph_without_root_still_lists_targets() {
  let graph = load_str("a: [b]\nb: []\n").unwrap();
  assert!(graph.top_level_targets().is_none());
  assert_eq!(graph.all_targets().len(), 2);
}
