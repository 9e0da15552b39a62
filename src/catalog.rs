//! Catalog index resolver
//!
//! The catalog build produces a read-only file tree: a root `index.json`
//! whose `definitions` list points at one detailed index per distribution,
//! and the per-distribution index maps schema names to relative schema
//! files. This module loads the root index, validates its shape, and
//! resolves the detailed registry the rest of the pipeline works from.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, TypegenError};

/// One row of the root catalog index
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogIndexEntry {
    /// Detailed per-distribution index file, relative to the root index
    pub file_name: String,
}

/// One registry row: a relative schema file reference
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaRef {
    pub file: String,
}

/// Mapping from schema name to its file reference, loaded from the
/// detailed index of one distribution
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaRegistry {
    pub schemas: HashMap<String, SchemaRef>,
}

impl SchemaRegistry {
    /// Look up a schema by name
    pub fn get(&self, name: &str) -> Option<&SchemaRef> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// Read and deserialize a JSON file, mapping a missing file to
/// [`TypegenError::FileNotFound`].
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TypegenError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TypegenError::Io(err),
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Resolve the schema registry referenced by the root catalog index.
///
/// Fails with [`TypegenError::InvalidIndex`] when the root index has no
/// `definitions` sequence or the sequence is empty, which signals that the
/// catalog build has not run. On success the `fileName` of the first
/// definition entry is resolved against the root index's directory and
/// loaded as the registry. Returns the registry together with the base
/// directory used to resolve further relative references.
pub fn resolve_registry(root_index: &Path) -> Result<(SchemaRegistry, PathBuf)> {
    let index: Value = load_json(root_index)?;

    let definitions = match index.get("definitions") {
        Some(Value::Array(entries)) if !entries.is_empty() => entries,
        _ => {
            return Err(TypegenError::InvalidIndex(
                "missing or empty `definitions`, a catalog needs to be generated first"
                    .to_string(),
            ))
        }
    };

    let entry: CatalogIndexEntry = serde_json::from_value(definitions[0].clone())?;
    let base_dir = root_index
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let registry: SchemaRegistry = load_json(&base_dir.join(&entry.file_name))?;
    tracing::debug!(
        index = %root_index.display(),
        registry = %entry.file_name,
        schemas = registry.len(),
        "resolved catalog registry"
    );
    Ok((registry, base_dir))
}
