//! Field and class descriptors: the introspection output the emitters run on.
//!
//! Descriptors are recomputed on every generation pass and never cached. The
//! mapped type deliberately keeps nullability *beside* the type rather than
//! inside it; the emitters decide how nullability is spelled in generated
//! code.

use serde::{Deserialize, Serialize};

use crate::schema::ClassId;

/// The eight supported primitive kinds and their fixed properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarKind {
    Bool,
    I8,
    Char,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ScalarKind {
    /// All supported kinds, in table order.
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::Bool,
        ScalarKind::I8,
        ScalarKind::Char,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Parse a schema kind name. Anything outside the supported eight is
    /// `None`; the mapper turns that into an unsupported-kind error.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "bool" => Some(ScalarKind::Bool),
            "i8" => Some(ScalarKind::I8),
            "char" => Some(ScalarKind::Char),
            "i16" => Some(ScalarKind::I16),
            "i32" => Some(ScalarKind::I32),
            "i64" => Some(ScalarKind::I64),
            "f32" => Some(ScalarKind::F32),
            "f64" => Some(ScalarKind::F64),
            _ => None,
        }
    }

    /// The Rust type name used in generated code.
    pub fn rust_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::Char => "char",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    /// Fixed zero-value literal per kind.
    pub fn zero_literal(self) -> &'static str {
        match self {
            ScalarKind::Bool => "false",
            ScalarKind::I8 => "0",
            ScalarKind::Char => "'\\0'",
            ScalarKind::I16 => "0",
            ScalarKind::I32 => "0",
            ScalarKind::I64 => "0",
            ScalarKind::F32 => "0.0",
            ScalarKind::F64 => "0.0",
        }
    }
}

/// Semantic type used in generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MappedType {
    /// One of the eight scalar kinds.
    Scalar(ScalarKind),

    /// The generated string type.
    Str,

    /// List of a mapped element type.
    List(Box<MappedType>),

    /// Best-guess named reference to another type, by path.
    Reference(String),
}

impl MappedType {
    /// Render the bare Rust type.
    pub fn render(&self) -> String {
        match self {
            MappedType::Scalar(kind) => kind.rust_name().to_string(),
            MappedType::Str => "String".to_string(),
            MappedType::List(element) => format!("Vec<{}>", element.render()),
            MappedType::Reference(path) => path.clone(),
        }
    }

    /// Render the Rust type with nullability applied.
    pub fn render_nullable(&self, nullable: bool) -> String {
        if nullable {
            format!("Option<{}>", self.render())
        } else {
            self.render()
        }
    }

    /// Default-value literal for a field of this type.
    ///
    /// Nullable fields default to `None`; lists default to an empty list,
    /// never a null form; scalars use the fixed zero-value table.
    pub fn default_literal(&self, nullable: bool) -> String {
        if nullable {
            return "None".to_string();
        }
        match self {
            MappedType::Scalar(kind) => kind.zero_literal().to_string(),
            MappedType::Str => "String::new()".to_string(),
            MappedType::List(_) => "Vec::new()".to_string(),
            MappedType::Reference(_) => "Default::default()".to_string(),
        }
    }

    /// Check if this is a list type.
    pub fn is_list(&self) -> bool {
        matches!(self, MappedType::List(_))
    }
}

/// One introspected field: name, mapped type, computed nullability.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: MappedType,
    pub nullable: bool,
}

impl FieldDescriptor {
    /// Create a field descriptor.
    pub fn new(name: impl Into<String>, ty: MappedType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
        }
    }

    /// The Rust type of the shadow property or constructor parameter.
    pub fn property_type(&self) -> String {
        self.ty.render_nullable(self.nullable)
    }
}

/// A qualifying target class: identity plus fields in declaration order.
///
/// Only produced for classes passing the admission check, so holding one is
/// proof of builder capability.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetClassDescriptor {
    pub id: ClassId,
    pub fields: Vec<FieldDescriptor>,
}

impl TargetClassDescriptor {
    /// Create a descriptor.
    pub fn new(id: ClassId, fields: Vec<FieldDescriptor>) -> Self {
        Self { id, fields }
    }

    /// Name of the generated shadow type.
    pub fn shadow_name(&self) -> String {
        format!("{}Shadow", self.id.name)
    }

    /// Non-nullable fields, in declaration order: the required constructor
    /// parameters.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| !field.nullable)
    }

    /// Nullable fields, in declaration order: the mutable properties.
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kind_parses_exactly_the_supported_eight() {
        for kind in ScalarKind::ALL {
            assert_eq!(ScalarKind::parse(kind.rust_name()), Some(kind));
        }
        assert_eq!(ScalarKind::parse("u32"), None);
        assert_eq!(ScalarKind::parse("usize"), None);
        assert_eq!(ScalarKind::parse("i128"), None);
    }

    #[test]
    fn zero_value_table_is_fixed() {
        let expected = [
            (ScalarKind::Bool, "false"),
            (ScalarKind::I8, "0"),
            (ScalarKind::Char, "'\\0'"),
            (ScalarKind::I16, "0"),
            (ScalarKind::I32, "0"),
            (ScalarKind::I64, "0"),
            (ScalarKind::F32, "0.0"),
            (ScalarKind::F64, "0.0"),
        ];
        for (kind, literal) in expected {
            assert_eq!(kind.zero_literal(), literal);
        }
    }

    #[test]
    fn render_spells_rust_types() {
        assert_eq!(MappedType::Scalar(ScalarKind::I64).render(), "i64");
        assert_eq!(MappedType::Str.render(), "String");
        assert_eq!(
            MappedType::List(Box::new(MappedType::Str)).render(),
            "Vec<String>"
        );
        assert_eq!(
            MappedType::Reference("crate::flex::component::FlexBox".to_string()).render(),
            "crate::flex::component::FlexBox"
        );
    }

    #[test]
    fn render_nullable_wraps_in_option() {
        assert_eq!(
            MappedType::Str.render_nullable(true),
            "Option<String>"
        );
        assert_eq!(MappedType::Str.render_nullable(false), "String");
    }

    #[test]
    fn list_default_is_empty_list_never_none() {
        let list = MappedType::List(Box::new(MappedType::Str));
        assert_eq!(list.default_literal(false), "Vec::new()");
    }

    #[test]
    fn nullable_default_is_none() {
        assert_eq!(MappedType::Str.default_literal(true), "None");
        assert_eq!(
            MappedType::Scalar(ScalarKind::I64).default_literal(true),
            "None"
        );
    }

    #[test]
    fn descriptor_partitions_fields_in_order() {
        let descriptor = TargetClassDescriptor::new(
            ClassId::new("flex::container", "Carousel"),
            vec![
                FieldDescriptor::new("name", MappedType::Str, true),
                FieldDescriptor::new(
                    "items",
                    MappedType::List(Box::new(MappedType::Str)),
                    false,
                ),
                FieldDescriptor::new("count", MappedType::Scalar(ScalarKind::I32), false),
            ],
        );

        assert_eq!(descriptor.shadow_name(), "CarouselShadow");

        let required: Vec<_> = descriptor.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(required, vec!["items", "count"]);

        let optional: Vec<_> = descriptor.optional_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(optional, vec!["name"]);
    }
}
