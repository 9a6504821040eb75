//! Implementation of the `bgraph show` command.

use std::path::Path;

use anyhow::{Result, anyhow};
use buildgraph_lib::{Graph, Target, TargetId};

use crate::output::{dependency_names, format_dependencies, print_json, print_stat, print_success};

use super::load_graph;

/// Resolve a command-line target reference: an id if it parses as one and is in
/// range, otherwise a name.
fn find_target<'a>(graph: &'a Graph, reference: &str) -> Result<&'a Target> {
  if let Ok(raw) = reference.parse::<u32>()
    && let Ok(target) = graph.target_by_id(TargetId::new(raw))
  {
    return Ok(target);
  }

  graph
    .target_by_name(reference)
    .ok_or_else(|| anyhow!("No target with id or name '{}'", reference))
}

pub fn cmd_show(file: &Path, reference: &str, json: bool) -> Result<()> {
  let graph = load_graph(file)?;
  let target = find_target(&graph, reference)?;
  let deps = dependency_names(&graph, target);

  if json {
    let json_output = serde_json::json!({
      "id": target.id(),
      "name": target.name(),
      "dependencies": target.dependencies(),
      "dependency_names": deps,
    });
    return print_json(&json_output);
  }

  print_success(&format!("Target {}", target.name()));
  print_stat("Id", &target.id().to_string());
  print_stat("Dependencies", &format_dependencies(&deps));

  Ok(())
}
