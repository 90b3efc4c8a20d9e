//! Field introspector: admission check plus descriptor construction.
//!
//! The admission check is deliberately silent. A class that fails it is not
//! an error and not a diagnostic; it simply yields no descriptor, so hosts
//! can point the generator at a namespace full of mixed declarations.

use tracing::debug;

use crate::descriptor::{FieldDescriptor, TargetClassDescriptor};
use crate::error::GenResult;
use crate::mapper::TypeMapper;
use crate::nullability::NullabilityPolicy;
use crate::schema::{ClassId, ClassKind, SchemaRegistry};

/// Turns class identities into target descriptors, or nothing.
#[derive(Debug, Default, Clone)]
pub struct FieldIntrospector {
    mapper: TypeMapper,
    policy: NullabilityPolicy,
}

impl FieldIntrospector {
    /// Create an introspector with the given nullability policy.
    pub fn new(policy: NullabilityPolicy) -> Self {
        Self {
            mapper: TypeMapper::new(),
            policy,
        }
    }

    /// Introspect one class identity.
    ///
    /// Returns `Ok(None)` when the class does not qualify: it cannot be
    /// resolved, it is not concrete, or it lacks a builder. Returns `Err`
    /// only for mapping failures on a class that did qualify.
    pub fn introspect(
        &self,
        registry: &SchemaRegistry,
        id: &ClassId,
    ) -> GenResult<Option<TargetClassDescriptor>> {
        let Some(class) = registry.resolve(id) else {
            debug!(class = %id, "skipping unresolved class");
            return Ok(None);
        };
        if class.kind != ClassKind::Concrete {
            debug!(class = %id, kind = ?class.kind, "skipping non-concrete class");
            return Ok(None);
        }
        if !class.has_builder {
            debug!(class = %id, "skipping class without builder");
            return Ok(None);
        }

        let mut fields = Vec::with_capacity(class.fields.len());
        for field in &class.fields {
            let ty = self.mapper.map(&id.name, &field.name, &field.ty)?;
            let nullable = self.policy.nullability(&id.name, field);
            fields.push(FieldDescriptor::new(field.name.clone(), ty, nullable));
        }

        Ok(Some(TargetClassDescriptor::new(id.clone(), fields)))
    }
}
