//! Target document loading.
//!
//! A target document maps each target name to the ordered list of target names it
//! depends on:
//!
//! ```yaml
//! DOCUMENT: [app, docs]
//! app: [libfoo, libbar]
//! libfoo: []
//! libbar: [libfoo]
//! docs: []
//! ```
//!
//! Loading turns the document into an ordered list of [`TargetDecl`] values,
//! one per mapping entry, in source order. Dependency names may refer to
//! targets declared further down; resolving them is left to the graph.

mod parse;
mod types;

pub use types::{Document, DocumentError, TargetDecl};
