//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output including colored status
//! messages and target listings.

use anyhow::Context;
use owo_colors::{OwoColorize, Stream};

use buildgraph_lib::{Graph, Target};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const INFO: &str = "•";
  pub const ARROW: &str = "→";
}

/// Names of a target's dependencies, in declared order.
pub fn dependency_names<'a>(graph: &'a Graph, target: &Target) -> Vec<&'a str> {
  target.dependencies().iter().map(|&id| graph[id].name()).collect()
}

pub fn format_dependencies(names: &[&str]) -> String {
  if names.is_empty() {
    "(none)".to_string()
  } else {
    names.join(", ")
  }
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// Print one target as `  <id> <name> → <deps>`.
pub fn print_target(graph: &Graph, target: &Target) {
  let deps = dependency_names(graph, target);
  println!(
    "  {:>4} {} {} {}",
    target.id().if_supports_color(Stream::Stdout, |s| s.dimmed()),
    target.name().if_supports_color(Stream::Stdout, |s| s.bold()),
    symbols::ARROW,
    format_dependencies(&deps)
  );
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
  let json = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
  println!("{}", json);
  Ok(())
}
