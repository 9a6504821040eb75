mod show;
mod targets;
mod top;

pub use show::cmd_show;
pub use targets::cmd_targets;
pub use top::cmd_top;

use std::path::Path;

use anyhow::{Context, Result};
use buildgraph_lib::{Graph, load_path};
use tracing::debug;

/// Load the target document at `file` into a graph.
fn load_graph(file: &Path) -> Result<Graph> {
  let graph = load_path(file).with_context(|| format!("Failed to load target document: {}", file.display()))?;
  debug!(targets = graph.size(), "loaded target graph");
  Ok(graph)
}
