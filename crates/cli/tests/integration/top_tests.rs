//! Tests for `bgraph top`.

use predicates::prelude::*;
use serde_json::json;

use super::common::{PROJECT_DOC, TestEnv};

#[test]
fn lists_document_root_dependencies() {
  let env = TestEnv::with_doc(PROJECT_DOC);

  let value = env.json(&["top"]);
  assert_eq!(
    value,
    json!([
      { "id": 1, "name": "app", "dependencies": [3, 2] },
      { "id": 4, "name": "docs", "dependencies": [] },
    ])
  );
}

#[test]
fn missing_root_is_not_an_error() {
  let env = TestEnv::with_doc("a: [b]\nb: []\n");

  env
    .cmd()
    .arg("top")
    .assert()
    .success()
    .stdout(predicate::str::contains("No DOCUMENT target"));

  assert_eq!(env.json(&["top"]), json!(null));
}
