//! Tests for `bgraph targets`.

use predicates::prelude::*;
use serde_json::json;

use super::common::{PROJECT_DOC, TestEnv};

#[test]
fn lists_targets_in_declaration_order() {
  let env = TestEnv::with_doc(PROJECT_DOC);

  let value = env.json(&["targets"]);
  let names: Vec<_> = value
    .as_array()
    .unwrap()
    .iter()
    .map(|t| t["name"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(names, vec!["DOCUMENT", "app", "libnet", "libcore", "docs"]);
}

#[test]
fn json_has_dense_ids_and_resolved_dependencies() {
  let env = TestEnv::with_doc(PROJECT_DOC);

  let value = env.json(&["targets"]);
  assert_eq!(value[0], json!({ "id": 0, "name": "DOCUMENT", "dependencies": [1, 4] }));
  assert_eq!(value[1], json!({ "id": 1, "name": "app", "dependencies": [3, 2] }));
  assert_eq!(value[3], json!({ "id": 3, "name": "libcore", "dependencies": [] }));
}

#[test]
fn text_output_shows_dependency_names() {
  let env = TestEnv::with_doc(PROJECT_DOC);

  env
    .cmd()
    .arg("targets")
    .assert()
    .success()
    .stdout(predicate::str::contains("5 target(s)"))
    .stdout(predicate::str::contains("libcore, libnet"));
}

#[test]
fn empty_document_lists_nothing() {
  let env = TestEnv::with_doc("{}");
  assert_eq!(env.json(&["targets"]), json!([]));
}

#[test]
fn duplicate_target_fails() {
  let env = TestEnv::with_doc("app: []\napp: []\n");

  env
    .cmd()
    .arg("targets")
    .assert()
    .failure()
    .stderr(predicate::str::contains("declared more than once"));
}
