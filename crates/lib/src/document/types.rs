use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A single target declaration as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDecl {
  /// The declared target name.
  pub name: String,
  /// Dependency names, in declaration order.
  pub dependencies: Vec<String>,
}

impl TargetDecl {
  pub fn new<N, I, D>(name: N, dependencies: I) -> Self
  where
    N: Into<String>,
    I: IntoIterator<Item = D>,
    D: Into<String>,
  {
    Self {
      name: name.into(),
      dependencies: dependencies.into_iter().map(Into::into).collect(),
    }
  }
}

/// A parsed target document: declarations in source order.
///
/// Repeated target names are kept as separate entries; rejecting them is the
/// graph's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
  pub targets: Vec<TargetDecl>,
}

impl Document {
  /// Create an empty document.
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of declared entries.
  pub fn len(&self) -> usize {
    self.targets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.targets.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, TargetDecl> {
    self.targets.iter()
  }
}

impl From<Vec<TargetDecl>> for Document {
  fn from(targets: Vec<TargetDecl>) -> Self {
    Self { targets }
  }
}

impl<'a> IntoIterator for &'a Document {
  type Item = &'a TargetDecl;
  type IntoIter = std::slice::Iter<'a, TargetDecl>;

  fn into_iter(self) -> Self::IntoIter {
    self.targets.iter()
  }
}

/// Errors that can occur while loading a target document.
#[derive(Debug, Error)]
pub enum DocumentError {
  /// The document file does not exist.
  #[error("document not found: {}", path.display())]
  NotFound { path: PathBuf },

  /// Failed to read the document stream.
  #[error("failed to read document: {0}")]
  Read(#[source] io::Error),

  /// The stream is not valid YAML.
  #[error("failed to parse document: {0}")]
  Syntax(#[source] serde_yaml::Error),

  /// The document is valid YAML but not a mapping of names to lists of names.
  #[error("{}", parse_message(target.as_deref(), message))]
  Parse { target: Option<String>, message: String },
}

fn parse_message(target: Option<&str>, message: &str) -> String {
  match target {
    Some(target) => format!("invalid entry for target '{}': {}", target, message),
    None => format!("invalid document: {}", message),
  }
}
