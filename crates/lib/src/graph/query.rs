//! Read-only queries over a loaded graph.

use std::ops::Index;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::Graph;
use super::types::{GraphError, Target, TargetId};
use crate::consts::DOCUMENT_ROOT;

impl Graph {
  /// Look up a target by id.
  ///
  /// # Errors
  ///
  /// Returns [`GraphError::OutOfRange`] if `id` is the sentinel or not below
  /// [`Graph::size`].
  pub fn target_by_id(&self, id: TargetId) -> Result<&Target, GraphError> {
    if id.is_none() {
      return Err(self.out_of_range(id));
    }
    self.targets.get(id.index()).ok_or_else(|| self.out_of_range(id))
  }

  fn out_of_range(&self, id: TargetId) -> GraphError {
    GraphError::OutOfRange {
      id,
      size: self.targets.len(),
    }
  }

  /// Look up a target by its declared name.
  pub fn target_by_name(&self, name: &str) -> Option<&Target> {
    self.index.get(name).map(|&id| &self.targets[id.index()])
  }

  /// Every target, in id (declaration) order.
  pub fn all_targets(&self) -> &[Target] {
    &self.targets
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Target> {
    self.targets.iter()
  }

  /// The dependencies of a target, as targets, in declared order.
  pub fn dependencies_of(&self, id: TargetId) -> Result<Vec<&Target>, GraphError> {
    let target = self.target_by_id(id)?;
    Ok(self.resolve(target.dependencies()))
  }

  /// The top-level targets: the dependencies of the first target named
  /// `DOCUMENT`, in declared order.
  ///
  /// Returns `None` when no such target exists. That is not an error; the
  /// graph simply has no conventional root.
  pub fn top_level_targets(&self) -> Option<Vec<&Target>> {
    self
      .targets
      .iter()
      .find(|target| target.name() == DOCUMENT_ROOT)
      .map(|root| self.resolve(root.dependencies()))
  }

  fn resolve(&self, ids: &[TargetId]) -> Vec<&Target> {
    // Loading guarantees every stored edge points into `targets`.
    ids.iter().map(|id| &self.targets[id.index()]).collect()
  }
}

impl Index<TargetId> for Graph {
  type Output = Target;

  fn index(&self, id: TargetId) -> &Target {
    &self.targets[id.index()]
  }
}

impl<'a> IntoIterator for &'a Graph {
  type Item = &'a Target;
  type IntoIter = std::slice::Iter<'a, Target>;

  fn into_iter(self) -> Self::IntoIter {
    self.targets.iter()
  }
}

/// Serializes as the list of targets in id order.
impl Serialize for Graph {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut seq = serializer.serialize_seq(Some(self.targets.len()))?;
    for target in &self.targets {
      seq.serialize_element(target)?;
    }
    seq.end()
  }
}
