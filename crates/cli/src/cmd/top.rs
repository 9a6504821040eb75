//! Implementation of the `bgraph top` command.
//!
//! Prints the dependencies of the `DOCUMENT` target. A document without one is
//! not an error.

use std::path::Path;

use anyhow::Result;
use buildgraph_lib::consts::DOCUMENT_ROOT;

use crate::output::{print_info, print_json, print_success, print_target};

use super::load_graph;

pub fn cmd_top(file: &Path, json: bool) -> Result<()> {
  let graph = load_graph(file)?;
  let top = graph.top_level_targets();

  if json {
    return print_json(&top);
  }

  match top {
    Some(targets) => {
      print_success(&format!("{} top-level target(s)", targets.len()));
      for target in targets {
        print_target(&graph, target);
      }
    }
    None => print_info(&format!("No {} target in {}", DOCUMENT_ROOT, file.display())),
  }

  Ok(())
}
