//! Schema description types.
//!
//! A schema document is the declarative, build-time stand-in for runtime
//! reflection over the model library: for every class it records the field
//! layout the generator needs, as plain data. Documents are shipped as JSON
//! and deserialized with serde.

use serde::{Deserialize, Serialize};

/// Raw declared type of a model field, as recorded in the schema document.
///
/// This is the *declared* shape, before the type mapper decides what the
/// generated code should use. Primitive kind names are carried as data, not
/// as a closed enum: the schema describes an external library, and a kind
/// outside the supported set must surface as a mapping error rather than a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum RawType {
    /// Unboxed primitive kind, e.g. `"bool"`, `"i32"`.
    Primitive(String),

    /// A primitive wrapped in the model library's nullable cell form.
    ///
    /// Maps to the same scalar as the bare kind; whether the generated field
    /// is optional is decided by the nullability policy, not here.
    Boxed(String),

    /// The string type.
    Str,

    /// A generic list with its declared type arguments.
    ///
    /// The declaration is carried verbatim; the type mapper enforces the
    /// single-argument shape assumption.
    List(Vec<RawType>),

    /// Any other class, referenced by path (e.g.
    /// `"crate::flex::component::FlexBox"`).
    Class(String),
}

impl RawType {
    /// Shorthand for a primitive kind.
    pub fn primitive(kind: impl Into<String>) -> Self {
        RawType::Primitive(kind.into())
    }

    /// Shorthand for a boxed primitive kind.
    pub fn boxed(kind: impl Into<String>) -> Self {
        RawType::Boxed(kind.into())
    }

    /// Shorthand for a single-argument list.
    pub fn list_of(element: RawType) -> Self {
        RawType::List(vec![element])
    }

    /// Shorthand for a class reference.
    pub fn class(path: impl Into<String>) -> Self {
        RawType::Class(path.into())
    }

    /// Check if this is a bare primitive declaration.
    pub fn is_primitive(&self) -> bool {
        matches!(self, RawType::Primitive(_))
    }

    /// Check if this is a list declaration, regardless of argument arity.
    pub fn is_list(&self) -> bool {
        matches!(self, RawType::List(_))
    }
}

/// One declared field of a model class, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field name as declared on the model class.
    pub name: String,

    /// Declared type.
    pub ty: RawType,

    /// Whether the source metadata marks the field optional/nullable.
    #[serde(default)]
    pub optional: bool,
}

impl FieldDecl {
    /// Create a non-optional field declaration.
    pub fn new(name: impl Into<String>, ty: RawType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Mark the field optional per source metadata.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Kind of class declaration.
///
/// Only concrete classes can qualify for generation; abstract classes and
/// interfaces are excluded by the admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Concrete,
    Abstract,
    Interface,
}

/// One model class as recorded in a schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDecl {
    /// Simple class name (e.g. `"Video"`).
    pub name: String,

    /// Concrete, abstract, or interface.
    #[serde(default)]
    pub kind: ClassKind,

    /// Whether the class exposes the builder-acquisition operation.
    ///
    /// This is the sole admission invariant together with `kind`: classes
    /// without a builder yield no generated artifact.
    #[serde(default)]
    pub has_builder: bool,

    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

impl ClassDecl {
    /// Create a concrete, builder-capable class declaration.
    pub fn with_builder(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Concrete,
            has_builder: true,
            fields,
        }
    }

    /// Create a declaration that will not qualify for generation.
    pub fn without_builder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Concrete,
            has_builder: false,
            fields: Vec::new(),
        }
    }
}

/// One schema document: a namespace plus its class declarations.
///
/// Corresponds to a single JSON file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDoc {
    /// Module path of the namespace (e.g. `"flex::component"`).
    pub namespace: String,

    /// Classes declared in the namespace, in discovery order.
    pub classes: Vec<ClassDecl>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_type_constructors() {
        assert!(RawType::primitive("i32").is_primitive());
        assert!(RawType::list_of(RawType::Str).is_list());
        assert!(!RawType::Str.is_primitive());
        assert_eq!(
            RawType::class("crate::flex::component::Text"),
            RawType::Class("crate::flex::component::Text".to_string())
        );
    }

    #[test]
    fn field_decl_defaults_to_required_metadata() {
        let field = FieldDecl::new("duration", RawType::boxed("i64"));
        assert!(!field.optional);
        assert!(field.clone().optional().optional);
    }

    #[test]
    fn class_decl_admission_flags() {
        let class = ClassDecl::with_builder("Video", vec![]);
        assert_eq!(class.kind, ClassKind::Concrete);
        assert!(class.has_builder);

        let layout = ClassDecl::without_builder("FlexLayout");
        assert!(!layout.has_builder);
    }

    #[test]
    fn schema_doc_round_trips_through_json() {
        let doc = SchemaDoc {
            namespace: "flex::component".to_string(),
            classes: vec![ClassDecl::with_builder(
                "Text",
                vec![
                    FieldDecl::new("text", RawType::Str).optional(),
                    FieldDecl::new("wrap", RawType::primitive("bool")),
                ],
            )],
        };

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: SchemaDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn raw_type_json_shape_is_tagged() {
        let json = serde_json::to_value(RawType::primitive("i32")).unwrap();
        assert_eq!(json["type"], "Primitive");
        assert_eq!(json["value"], "i32");

        let json = serde_json::to_value(RawType::Str).unwrap();
        assert_eq!(json["type"], "Str");
    }
}
