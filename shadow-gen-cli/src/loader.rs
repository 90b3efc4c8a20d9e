//! Schema document discovery and loading.
//!
//! Accepts either a single `.json` document or a directory, which is walked
//! recursively for `.json` files in sorted order so a pass is reproducible
//! regardless of filesystem iteration order.

use std::path::{Path, PathBuf};

use shadow_gen::{SchemaDoc, SchemaRegistry};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{CliResult, LoadError};

/// Loads schema documents into a registry.
#[derive(Debug)]
pub struct SchemaLoader {
    path: PathBuf,
}

impl SchemaLoader {
    /// Create a loader for a file or directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Discover the schema documents under the path.
    pub fn discover(&self) -> CliResult<Vec<PathBuf>> {
        if !self.path.exists() {
            return Err(LoadError::NotFound {
                path: self.path.clone(),
            }
            .into());
        }

        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(LoadError::NoDocuments {
                path: self.path.clone(),
            }
            .into());
        }

        Ok(files)
    }

    /// Load every discovered document into a registry.
    pub fn load(&self) -> CliResult<SchemaRegistry> {
        let mut registry = SchemaRegistry::new();
        for file in self.discover()? {
            let doc = Self::load_doc(&file)?;
            debug!(path = %file.display(), namespace = %doc.namespace, "loaded schema document");
            registry.insert_doc(doc);
        }
        Ok(registry)
    }

    fn load_doc(path: &Path) -> CliResult<SchemaDoc> {
        let raw = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc = serde_json::from_str(&raw)
            .map_err(|e| LoadError::invalid_document(path, e.to_string()))?;
        Ok(doc)
    }
}
