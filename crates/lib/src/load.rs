//! One-call loading: read a document and build its graph.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::document::{Document, DocumentError};
use crate::graph::{Graph, GraphError};

/// Errors that can abort a load.
#[derive(Debug, Error)]
pub enum LoadError {
  #[error(transparent)]
  Document(#[from] DocumentError),

  #[error(transparent)]
  Graph(#[from] GraphError),
}

/// Load a graph from a stream holding a target document.
pub fn load<R: Read>(reader: R) -> Result<Graph, LoadError> {
  let document = Document::from_reader(reader)?;
  Ok(Graph::from_document(&document)?)
}

/// Load a graph from document text.
pub fn load_str(content: &str) -> Result<Graph, LoadError> {
  let document: Document = content.parse()?;
  Ok(Graph::from_document(&document)?)
}

/// Load a graph from a document file.
pub fn load_path(path: &Path) -> Result<Graph, LoadError> {
  let document = Document::from_path(path)?;
  Ok(Graph::from_document(&document)?)
}
