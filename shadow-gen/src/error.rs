//! Error types for the generator.
//!
//! Only two failure kinds are fatal, and only to the class being generated:
//! a primitive kind outside the supported set and a list declaration that
//! breaks the single-argument shape assumption. Resolution misses and
//! artifact collisions are routine and absorbed by their callers.

use thiserror::Error;

/// Result alias for per-class generation steps.
pub type GenResult<T> = Result<T, GenerationError>;

/// Fatal-per-class generation errors.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A primitive kind outside the supported eight.
    #[error("unsupported primitive kind `{kind}` on field `{field}` of `{class}`")]
    UnsupportedPrimitiveKind {
        class: String,
        field: String,
        kind: String,
    },

    /// A list declaration without exactly one type argument.
    #[error(
        "list field `{field}` of `{class}` must carry exactly one type argument, found {found}"
    )]
    ShapeAssumptionViolation {
        class: String,
        field: String,
        found: usize,
    },

    /// Sink failure other than a collision.
    #[error("failed to write artifact: {0}")]
    Sink(#[from] SinkError),
}

impl GenerationError {
    /// Create an unsupported-primitive-kind error.
    pub fn unsupported_primitive(
        class: impl Into<String>,
        field: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self::UnsupportedPrimitiveKind {
            class: class.into(),
            field: field.into(),
            kind: kind.into(),
        }
    }

    /// Create a shape-assumption-violation error.
    pub fn bad_list_shape(
        class: impl Into<String>,
        field: impl Into<String>,
        found: usize,
    ) -> Self {
        Self::ShapeAssumptionViolation {
            class: class.into(),
            field: field.into(),
            found,
        }
    }
}

/// Errors reported by an artifact sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The artifact slot is already occupied. Routine: the driver turns this
    /// into an explicit skip, never an overwrite.
    #[error("artifact `{name}` already exists in `{namespace}`")]
    AlreadyExists { namespace: String, name: String },

    /// I/O failure while writing the artifact.
    #[error("failed to write `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl SinkError {
    /// Create a collision error.
    pub fn already_exists(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Check if this is the routine collision case.
    pub fn is_collision(&self) -> bool {
        matches!(self, SinkError::AlreadyExists { .. })
    }
}
