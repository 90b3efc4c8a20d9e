//! Type mapper: declared schema types to the types used in generated code.
//!
//! The mapper is total over well-formed declarations and fails on exactly
//! two inputs: a primitive kind outside the supported eight and a list
//! declaration that breaks the single-type-argument shape assumption.

use crate::descriptor::{MappedType, ScalarKind};
use crate::error::{GenResult, GenerationError};
use crate::schema::RawType;

/// Maps raw declared types to mapped types, carrying the class and field
/// names purely for error context.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeMapper;

impl TypeMapper {
    /// Create a mapper.
    pub fn new() -> Self {
        Self
    }

    /// Map one declared type.
    pub fn map(&self, class: &str, field: &str, ty: &RawType) -> GenResult<MappedType> {
        match ty {
            RawType::Primitive(kind) | RawType::Boxed(kind) => {
                let scalar = ScalarKind::parse(kind).ok_or_else(|| {
                    GenerationError::unsupported_primitive(class, field, kind.clone())
                })?;
                Ok(MappedType::Scalar(scalar))
            }
            RawType::Str => Ok(MappedType::Str),
            RawType::List(args) => {
                if args.len() != 1 {
                    return Err(GenerationError::bad_list_shape(class, field, args.len()));
                }
                let element = self.map(class, field, &args[0])?;
                Ok(MappedType::List(Box::new(element)))
            }
            RawType::Class(path) => Ok(MappedType::Reference(path.clone())),
        }
    }
}
