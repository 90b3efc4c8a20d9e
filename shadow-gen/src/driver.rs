//! Generation driver: one synchronous pass over the requested namespaces.
//!
//! The driver is single-use. A provider hands out one driver per pass, the
//! driver walks classes strictly in discovery order, and every per-class
//! outcome lands in the report. A collision at the sink is an intentional
//! skip, not a failure; any other per-class error aborts that class only.

use tracing::{debug, info, warn};

use crate::emit::emit_artifact;
use crate::error::GenerationError;
use crate::introspect::FieldIntrospector;
use crate::nullability::{NullabilityOverrides, NullabilityPolicy};
use crate::schema::{ClassId, SchemaRegistry};
use crate::sink::ArtifactSink;

/// Outcome of one generation pass.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Classes whose artifact was written this pass.
    pub generated: Vec<ClassId>,

    /// Classes skipped because their artifact already existed.
    pub skipped: Vec<ClassId>,

    /// Per-class failures. Siblings of a failed class still proceed.
    pub errors: Vec<(ClassId, GenerationError)>,

    /// Work deferred to a later pass. Always empty: every qualifying class
    /// is handled in the pass that sees it.
    pub deferred: Vec<ClassId>,
}

impl GenerationReport {
    /// Check whether the pass completed without per-class errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Builds one driver per pass.
#[derive(Debug, Default, Clone)]
pub struct DriverProvider {
    overrides: NullabilityOverrides,
}

impl DriverProvider {
    /// Create a provider with the given override table.
    pub fn new(overrides: NullabilityOverrides) -> Self {
        Self { overrides }
    }

    /// Create a driver writing to the given sink.
    pub fn create<S: ArtifactSink>(&self, sink: S) -> GenerationDriver<S> {
        GenerationDriver {
            introspector: FieldIntrospector::new(NullabilityPolicy::new(self.overrides.clone())),
            sink,
        }
    }
}

/// A single generation pass.
pub struct GenerationDriver<S> {
    introspector: FieldIntrospector,
    sink: S,
}

impl<S: ArtifactSink> GenerationDriver<S> {
    /// Run the pass over the given namespaces.
    pub fn run(mut self, registry: &SchemaRegistry, namespaces: &[String]) -> GenerationReport {
        let mut report = GenerationReport::default();

        for namespace in namespaces {
            for id in registry.classes_in(namespace) {
                self.process(registry, &id, &mut report);
            }
        }

        info!(
            generated = report.generated.len(),
            skipped = report.skipped.len(),
            errors = report.errors.len(),
            "generation pass finished"
        );
        report
    }

    fn process(&mut self, registry: &SchemaRegistry, id: &ClassId, report: &mut GenerationReport) {
        let descriptor = match self.introspector.introspect(registry, id) {
            Ok(Some(descriptor)) => descriptor,
            Ok(None) => return,
            Err(err) => {
                warn!(class = %id, error = %err, "class failed, continuing with siblings");
                report.errors.push((id.clone(), err));
                return;
            }
        };

        let artifact = emit_artifact(&descriptor);
        match self.sink.create(&artifact) {
            Ok(()) => {
                debug!(class = %id, artifact = %artifact.name, "artifact written");
                report.generated.push(id.clone());
            }
            Err(err) if err.is_collision() => {
                // Rerun over an already-generated tree. Keep the existing
                // artifact and record the skip.
                info!(class = %id, artifact = %artifact.name, "artifact exists, skipping");
                report.skipped.push(id.clone());
            }
            Err(err) => {
                warn!(class = %id, error = %err, "sink rejected artifact");
                report.errors.push((id.clone(), err.into()));
            }
        }
    }
}
