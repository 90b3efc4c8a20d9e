//! Build-time schema description of the model library.
//!
//! The original generator discovered field layouts through runtime
//! reflection; here the same information arrives as declarative schema
//! documents evaluated once per generation pass.

mod registry;
mod types;

pub use registry::{ClassId, SchemaRegistry};
pub use types::{ClassDecl, ClassKind, FieldDecl, RawType, SchemaDoc};
