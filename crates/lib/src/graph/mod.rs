//! Target dependency graph.
//!
//! The graph is an arena of [`Target`] values addressed by dense [`TargetId`]s.
//! Dependency edges are stored as ids, never references, so the graph owns all
//! of its data and has no reference cycles even when the declared
//! dependencies do.
//!
//! # Loading
//!
//! [`Graph::load`] builds the graph in two passes over the declarations:
//!
//! 1. Registration: every declared name gets the next id and an empty target.
//! 2. Resolution: every dependency name is looked up in the name index built by
//!    the first pass and appended to its owner's dependency list.
//!
//! Because all names are registered before any edge is resolved, a target may
//! depend on one declared later in the document.

mod query;
mod types;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, trace};

use crate::document::{Document, TargetDecl};

pub use types::{GraphError, GraphState, MAX_ID, Target, TargetId};

/// Owns every target of a loaded document.
#[derive(Debug, Default)]
pub struct Graph {
  /// Targets in declaration order; `targets[i].id() == i`.
  targets: Vec<Target>,

  /// Name to id, built by the registration pass.
  index: HashMap<String, TargetId>,

  state: GraphState,
}

impl Graph {
  /// Create an empty, unloaded graph.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a graph from a parsed document.
  pub fn from_document(document: &Document) -> Result<Self, GraphError> {
    let mut graph = Self::new();
    graph.load(&document.targets)?;
    Ok(graph)
  }

  /// Populate the graph from target declarations.
  ///
  /// This is a one-shot operation: a graph that is already loaded returns
  /// [`GraphError::AlreadyLoaded`]. On any other error nothing is committed and
  /// the graph stays [`GraphState::Empty`]; callers should still start over
  /// with a fresh graph rather than reuse it.
  ///
  /// # Errors
  ///
  /// - [`GraphError::DuplicateTarget`] if a name is declared twice.
  /// - [`GraphError::UnresolvedDependency`] if a dependency names no declared target.
  /// - [`GraphError::TooManyTargets`] if the ids would run into [`MAX_ID`].
  pub fn load(&mut self, decls: &[TargetDecl]) -> Result<(), GraphError> {
    if self.state == GraphState::Loaded {
      return Err(GraphError::AlreadyLoaded);
    }

    let mut targets = Vec::with_capacity(decls.len());
    let mut index = HashMap::with_capacity(decls.len());

    // First pass: register every name so forward references resolve
    for (position, decl) in decls.iter().enumerate() {
      let id = TargetId::from_index(position).ok_or(GraphError::TooManyTargets { count: decls.len() })?;

      match index.entry(decl.name.clone()) {
        Entry::Occupied(existing) => {
          return Err(GraphError::DuplicateTarget {
            name: decl.name.clone(),
            first: *existing.get(),
          });
        }
        Entry::Vacant(slot) => {
          slot.insert(id);
        }
      }

      targets.push(Target::new(id, decl.name.clone()));
    }

    debug!(targets = targets.len(), "registered targets");

    // Second pass: translate dependency names into ids
    let mut edges = 0usize;
    for (target, decl) in targets.iter_mut().zip(decls) {
      for dep_name in &decl.dependencies {
        let dep_id = index
          .get(dep_name)
          .copied()
          .ok_or_else(|| GraphError::UnresolvedDependency {
            target: decl.name.clone(),
            dependency: dep_name.clone(),
          })?;

        trace!(owner = %decl.name, dependency = %dep_name, id = %dep_id, "resolved dependency");
        target.push_dependency(dep_id);
        edges += 1;
      }
    }

    debug!(edges, "resolved dependencies");

    self.targets = targets;
    self.index = index;
    self.state = GraphState::Loaded;

    Ok(())
  }

  pub fn state(&self) -> GraphState {
    self.state
  }

  /// Number of targets; always equal to the number of assigned ids.
  pub fn size(&self) -> usize {
    self.targets.len()
  }

  pub fn is_empty(&self) -> bool {
    self.targets.is_empty()
  }
}
