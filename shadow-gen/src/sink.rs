//! Artifact sinks: where generated source ends up.
//!
//! The sink owns the collision check. `create` is create-only by contract;
//! a sink that overwrites an existing artifact is broken, because the driver
//! relies on the collision signal to keep repeated passes idempotent.

use std::collections::BTreeMap;

use crate::error::SinkError;

/// One generated source artifact, addressed by namespace and type name.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    /// Namespace the artifact belongs to (e.g. `"flex::component"`).
    pub namespace: String,

    /// Name of the generated shadow type (e.g. `"VideoShadow"`).
    pub name: String,

    /// Complete Rust source text.
    pub source: String,
}

impl GeneratedArtifact {
    /// Create an artifact.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Destination for generated artifacts.
pub trait ArtifactSink {
    /// Store an artifact, failing with [`SinkError::AlreadyExists`] if the
    /// slot is occupied. Never overwrites.
    fn create(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn create(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        (**self).create(artifact)
    }
}

/// In-memory sink, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    artifacts: BTreeMap<(String, String), String>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored artifact's source.
    pub fn get(&self, namespace: &str, name: &str) -> Option<&str> {
        self.artifacts
            .get(&(namespace.to_string(), name.to_string()))
            .map(String::as_str)
    }

    /// Number of stored artifacts.
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if the sink is empty.
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn create(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        let key = (artifact.namespace.clone(), artifact.name.clone());
        if self.artifacts.contains_key(&key) {
            return Err(SinkError::already_exists(
                &artifact.namespace,
                &artifact.name,
            ));
        }
        self.artifacts.insert(key, artifact.source.clone());
        Ok(())
    }
}
