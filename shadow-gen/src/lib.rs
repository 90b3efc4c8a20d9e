//! Shadow companion generator for builder-constructed model classes.
//!
//! Builder-constructed model types are immutable and verbose to assemble.
//! This crate generates, per qualifying class, a mutable "shadow" struct
//! plus a free factory function, so callers write
//!
//! ```text
//! let video = video("https://example.com/clip.mp4".into(), |v| {
//!     v.duration = Some(42);
//! });
//! ```
//!
//! instead of threading every field through the builder by hand.
//!
//! The pipeline: schema documents describe the model library's field
//! layouts ([`schema`]), the introspector admits builder-capable concrete
//! classes and computes field nullability ([`introspect`], [`nullability`]),
//! the type mapper turns declared types into generated-code types
//! ([`mapper`]), the emitters render source ([`emit`]), and the driver runs
//! one synchronous pass writing artifacts through a sink ([`driver`],
//! [`sink`]).
//!
//! # Example
//!
//! ```
//! use shadow_gen::{
//!     ClassDecl, DriverProvider, FieldDecl, MemorySink, NullabilityOverrides, RawType,
//!     SchemaDoc, SchemaRegistry,
//! };
//!
//! let registry = SchemaRegistry::from_docs(vec![SchemaDoc {
//!     namespace: "flex::component".to_string(),
//!     classes: vec![ClassDecl::with_builder(
//!         "Video",
//!         vec![
//!             FieldDecl::new("url", RawType::Str).optional(),
//!             FieldDecl::new("duration", RawType::boxed("i64")).optional(),
//!         ],
//!     )],
//! }]);
//!
//! let provider = DriverProvider::new(NullabilityOverrides::builtin());
//! let mut sink = MemorySink::new();
//! let report = provider
//!     .create(&mut sink)
//!     .run(&registry, &["flex::component".to_string()]);
//!
//! assert!(report.is_clean());
//! assert!(sink.get("flex::component", "VideoShadow").is_some());
//! ```

pub mod descriptor;
pub mod driver;
pub mod emit;
pub mod error;
pub mod introspect;
pub mod mapper;
pub mod nullability;
pub mod schema;
pub mod sink;

pub use descriptor::{FieldDescriptor, MappedType, ScalarKind, TargetClassDescriptor};
pub use driver::{DriverProvider, GenerationDriver, GenerationReport};
pub use emit::{emit_artifact, FactoryEmitter, ShadowEmitter};
pub use error::{GenResult, GenerationError, SinkError};
pub use introspect::FieldIntrospector;
pub use mapper::TypeMapper;
pub use nullability::{NullabilityOverrides, NullabilityPolicy};
pub use schema::{ClassDecl, ClassId, ClassKind, FieldDecl, RawType, SchemaDoc, SchemaRegistry};
pub use sink::{ArtifactSink, GeneratedArtifact, MemorySink};
