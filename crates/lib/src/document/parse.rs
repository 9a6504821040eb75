//! YAML parsing for target documents.
//!
//! The document is first read into a list of raw `(key, value)` entries with a
//! visitor that keeps source order and repeated keys, then each entry is checked
//! against the expected shape.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_yaml::Value;
use tracing::debug;

use super::types::{Document, DocumentError, TargetDecl};

/// Mapping entries in source order, before shape validation.
struct RawDocument(Vec<(Value, Value)>);

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
  type Value = RawDocument;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a mapping of target names to lists of dependency names")
  }

  fn visit_unit<E>(self) -> Result<RawDocument, E>
  where
    E: serde::de::Error,
  {
    Ok(RawDocument(Vec::new()))
  }

  fn visit_none<E>(self) -> Result<RawDocument, E>
  where
    E: serde::de::Error,
  {
    Ok(RawDocument(Vec::new()))
  }

  fn visit_map<A>(self, mut map: A) -> Result<RawDocument, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some(entry) = map.next_entry::<Value, Value>()? {
      entries.push(entry);
    }
    Ok(RawDocument(entries))
  }
}

impl<'de> Deserialize<'de> for RawDocument {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_any(RawDocumentVisitor)
  }
}

fn describe(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Sequence(_) => "a list",
    Value::Mapping(_) => "a mapping",
    Value::Tagged(_) => "a tagged value",
  }
}

fn decl_from_entry(position: usize, key: Value, value: Value) -> Result<TargetDecl, DocumentError> {
  let name = match key {
    Value::String(name) if !name.is_empty() => name,
    Value::String(_) => {
      return Err(DocumentError::Parse {
        target: None,
        message: format!("entry {} has an empty target name", position),
      });
    }
    other => {
      return Err(DocumentError::Parse {
        target: None,
        message: format!("entry {} has {} as its target name, expected a string", position, describe(&other)),
      });
    }
  };

  let items = match value {
    Value::Sequence(items) => items,
    other => {
      return Err(DocumentError::Parse {
        target: Some(name),
        message: format!("expected a list of dependency names, found {}", describe(&other)),
      });
    }
  };

  let mut dependencies = Vec::with_capacity(items.len());
  for (index, item) in items.into_iter().enumerate() {
    match item {
      Value::String(dep) if !dep.is_empty() => dependencies.push(dep),
      Value::String(_) => {
        return Err(DocumentError::Parse {
          target: Some(name),
          message: format!("dependency {} is an empty name", index),
        });
      }
      other => {
        return Err(DocumentError::Parse {
          target: Some(name),
          message: format!("dependency {} is {}, expected a string", index, describe(&other)),
        });
      }
    }
  }

  Ok(TargetDecl { name, dependencies })
}

impl Document {
  /// Read a document from a stream positioned at its start.
  pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DocumentError> {
    let mut content = String::new();
    reader.read_to_string(&mut content).map_err(DocumentError::Read)?;
    content.parse()
  }

  /// Read a document from a file.
  ///
  /// A missing file is reported as [`DocumentError::NotFound`] rather than a
  /// generic read failure.
  pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
    let file = match fs::File::open(path) {
      Ok(file) => file,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Err(DocumentError::NotFound {
          path: path.to_path_buf(),
        });
      }
      Err(e) => return Err(DocumentError::Read(e)),
    };

    debug!(path = %path.display(), "reading target document");
    Self::from_reader(io::BufReader::new(file))
  }
}

impl FromStr for Document {
  type Err = DocumentError;

  fn from_str(content: &str) -> Result<Self, Self::Err> {
    if content.trim().is_empty() {
      return Ok(Document::new());
    }

    let RawDocument(entries) = serde_yaml::from_str(content).map_err(DocumentError::Syntax)?;

    let targets = entries
      .into_iter()
      .enumerate()
      .map(|(position, (key, value))| decl_from_entry(position, key, value))
      .collect::<Result<Vec<_>, _>>()?;

    debug!(entries = targets.len(), "parsed target document");
    Ok(Document { targets })
  }
}
