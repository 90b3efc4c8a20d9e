//! Directory sink: maps artifacts to module files on disk.
//!
//! Namespace segments become subdirectories and the artifact name becomes a
//! snake_case module filename, so `flex::component` / `VideoShadow` lands at
//! `<root>/flex/component/video_shadow.rs`. Files are opened create-only;
//! an existing file surfaces as a collision for the driver to skip.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use convert_case::{Case, Casing};
use shadow_gen::{ArtifactSink, GeneratedArtifact, SinkError};

/// Filesystem sink with dry-run support.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    dry_run: bool,
    written: Vec<PathBuf>,
    planned: Vec<PathBuf>,
}

impl DirectorySink {
    /// Create a sink rooted at the given output directory.
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
            written: Vec::new(),
            planned: Vec::new(),
        }
    }

    /// Path an artifact would be written to.
    pub fn artifact_path(&self, artifact: &GeneratedArtifact) -> PathBuf {
        let mut path = self.root.clone();
        for segment in artifact.namespace.split("::") {
            path.push(segment);
        }
        path.push(format!("{}.rs", artifact.name.to_case(Case::Snake)));
        path
    }

    /// Files written this pass.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Files a dry run would have written.
    pub fn planned(&self) -> &[PathBuf] {
        &self.planned
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn write_new(path: &Path, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SinkError::Io {
                name: artifact.name.clone(),
                source: e,
            })?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    SinkError::already_exists(&artifact.namespace, &artifact.name)
                } else {
                    SinkError::Io {
                        name: artifact.name.clone(),
                        source: e,
                    }
                }
            })?;

        file.write_all(artifact.source.as_bytes())
            .map_err(|e| SinkError::Io {
                name: artifact.name.clone(),
                source: e,
            })
    }
}

impl ArtifactSink for DirectorySink {
    fn create(&mut self, artifact: &GeneratedArtifact) -> Result<(), SinkError> {
        let path = self.artifact_path(artifact);

        // Collision detection applies in dry-run mode too, so a dry run
        // predicts the skips a real pass would report.
        if path.exists() {
            return Err(SinkError::already_exists(
                &artifact.namespace,
                &artifact.name,
            ));
        }

        if self.dry_run {
            self.planned.push(path);
            return Ok(());
        }

        Self::write_new(&path, artifact)?;
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> GeneratedArtifact {
        GeneratedArtifact::new("flex::component", "VideoShadow", "pub struct VideoShadow;\n")
    }

    #[test]
    fn writes_under_namespace_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path(), false);

        sink.create(&artifact()).unwrap();

        let expected = dir.path().join("flex/component/video_shadow.rs");
        assert_eq!(sink.written(), &[expected.clone()]);
        assert_eq!(
            fs::read_to_string(expected).unwrap(),
            "pub struct VideoShadow;\n"
        );
    }

    #[test]
    fn existing_file_is_a_collision_and_survives() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flex/component/video_shadow.rs");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        let mut sink = DirectorySink::new(dir.path(), false);
        let err = sink.create(&artifact()).unwrap_err();
        assert!(err.is_collision());
        assert_eq!(fs::read_to_string(path).unwrap(), "original");
    }

    #[test]
    fn dry_run_plans_without_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path(), true);

        sink.create(&artifact()).unwrap();

        assert_eq!(sink.planned().len(), 1);
        assert!(sink.written().is_empty());
        assert!(!dir.path().join("flex").exists());
    }

    #[test]
    fn dry_run_still_reports_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flex/component/video_shadow.rs");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "original").unwrap();

        let mut sink = DirectorySink::new(dir.path(), true);
        assert!(sink.create(&artifact()).unwrap_err().is_collision());
    }
}
