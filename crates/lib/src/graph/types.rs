use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Stable identifier of a target within its graph.
///
/// Ids are assigned densely from 0 in declaration order and double as the
/// target's index into the graph's target list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TargetId(u32);

/// The "no id" sentinel. Never assigned to a target.
pub const MAX_ID: TargetId = TargetId::MAX;

impl TargetId {
  pub const MAX: TargetId = TargetId(u32::MAX);

  pub const fn new(raw: u32) -> Self {
    Self(raw)
  }

  /// Id for the target at `index`, or `None` if the index would collide with
  /// the sentinel.
  pub fn from_index(index: usize) -> Option<Self> {
    u32::try_from(index).ok().filter(|&raw| raw != u32::MAX).map(Self)
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }

  pub fn as_u32(self) -> u32 {
    self.0
  }

  pub fn is_none(self) -> bool {
    self == Self::MAX
  }
}

impl From<u32> for TargetId {
  fn from(raw: u32) -> Self {
    Self(raw)
  }
}

impl fmt::Display for TargetId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_none() {
      f.write_str("<none>")
    } else {
      write!(f, "{}", self.0)
    }
  }
}

/// A named build unit.
///
/// Targets are created by the graph's registration pass and only handed out
/// by shared reference, so none of their fields can change after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
  id: TargetId,
  name: String,
  dependencies: Vec<TargetId>,
}

impl Target {
  pub(super) fn new(id: TargetId, name: String) -> Self {
    Self {
      id,
      name,
      dependencies: Vec::new(),
    }
  }

  pub(super) fn push_dependency(&mut self, dep: TargetId) {
    self.dependencies.push(dep);
  }

  pub fn id(&self) -> TargetId {
    self.id
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Dependency ids in the order they were declared.
  pub fn dependencies(&self) -> &[TargetId] {
    &self.dependencies
  }
}

/// Lifecycle state of a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphState {
  /// Constructed, not loaded yet.
  #[default]
  Empty,
  /// Successfully loaded; read-only from here on.
  Loaded,
}

/// Errors that can occur while building or querying a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
  /// The same target name was declared twice.
  #[error("target '{name}' is declared more than once (first declared with id {first})")]
  DuplicateTarget { name: String, first: TargetId },

  /// A dependency name does not match any declared target.
  #[error("target '{target}' depends on undeclared target '{dependency}'")]
  UnresolvedDependency { target: String, dependency: String },

  /// A lookup used an id outside the graph.
  #[error("target id {id} is out of range (graph has {size} targets)")]
  OutOfRange { id: TargetId, size: usize },

  /// The document declares more targets than ids are available.
  #[error("too many targets: {count} exceeds the id space")]
  TooManyTargets { count: usize },

  /// `load` was called on a graph that is already loaded.
  #[error("graph is already loaded")]
  AlreadyLoaded,
}
