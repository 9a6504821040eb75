//! buildgraph-lib: build target documents and their dependency graphs
//!
//! This crate provides:
//! - `document`: reading a target document into ordered declarations
//! - `graph`: the id-addressed target graph and its queries
//! - `load`: reading and building in one call

pub mod consts;
pub mod document;
pub mod graph;
pub mod load;

pub use document::{Document, DocumentError, TargetDecl};
pub use graph::{Graph, GraphError, GraphState, MAX_ID, Target, TargetId};
pub use load::{LoadError, load, load_path, load_str};
