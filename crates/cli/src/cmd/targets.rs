//! Implementation of the `bgraph targets` command.
//!
//! Lists every target of the document in id order along with the names of
//! its dependencies.

use std::path::Path;

use anyhow::Result;

use crate::output::{print_json, print_success, print_target};

use super::load_graph;

pub fn cmd_targets(file: &Path, json: bool) -> Result<()> {
  let graph = load_graph(file)?;

  if json {
    return print_json(&graph);
  }

  print_success(&format!("{} target(s) in {}", graph.size(), file.display()));
  for target in &graph {
    print_target(&graph, target);
  }

  Ok(())
}
