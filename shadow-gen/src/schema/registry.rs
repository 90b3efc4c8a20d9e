//! Schema registry: the host-facing discovery and resolution capabilities.
//!
//! The registry holds the schema documents for one generation pass. It is
//! rebuilt from the documents on every pass; nothing in it persists between
//! passes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{ClassDecl, SchemaDoc};

/// Namespace-qualified class identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassId {
    /// Module path of the namespace.
    pub namespace: String,

    /// Simple class name.
    pub name: String,
}

impl ClassId {
    /// Create a class identity.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

/// Registry of schema documents, keyed by namespace.
///
/// Provides the two capabilities the driver consumes: namespace-scoped
/// discovery (`classes_in`) and class resolution (`resolve`).
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    namespaces: BTreeMap<String, Vec<ClassDecl>>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from schema documents.
    pub fn from_docs(docs: impl IntoIterator<Item = SchemaDoc>) -> Self {
        let mut registry = Self::new();
        for doc in docs {
            registry.insert_doc(doc);
        }
        registry
    }

    /// Add one schema document.
    ///
    /// Documents for the same namespace accumulate; class order within a
    /// namespace follows document order.
    pub fn insert_doc(&mut self, doc: SchemaDoc) {
        self.namespaces
            .entry(doc.namespace)
            .or_default()
            .extend(doc.classes);
    }

    /// Discovery capability: lazily iterate the class identities declared in
    /// a namespace, in declaration order.
    ///
    /// Unknown namespaces yield nothing.
    pub fn classes_in<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = ClassId> + 'a {
        self.namespaces
            .get(namespace)
            .into_iter()
            .flatten()
            .map(move |class| ClassId::new(namespace, class.name.clone()))
    }

    /// Resolution capability: look up the declaration behind an identity.
    pub fn resolve(&self, id: &ClassId) -> Option<&ClassDecl> {
        self.namespaces
            .get(&id.namespace)?
            .iter()
            .find(|class| class.name == id.name)
    }

    /// All namespaces known to the registry, in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Total number of class declarations.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(Vec::len).sum()
    }

    /// Check if the registry holds no declarations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{ClassDecl, FieldDecl, RawType};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::from_docs(vec![
            SchemaDoc {
                namespace: "flex::component".to_string(),
                classes: vec![
                    ClassDecl::with_builder(
                        "Text",
                        vec![FieldDecl::new("text", RawType::Str).optional()],
                    ),
                    ClassDecl::without_builder("Icon"),
                ],
            },
            SchemaDoc {
                namespace: "flex::container".to_string(),
                classes: vec![ClassDecl::with_builder("Bubble", vec![])],
            },
        ])
    }

    #[test]
    fn discovery_preserves_declaration_order() {
        let registry = registry();
        let ids: Vec<_> = registry.classes_in("flex::component").collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], ClassId::new("flex::component", "Text"));
        assert_eq!(ids[1], ClassId::new("flex::component", "Icon"));
    }

    #[test]
    fn discovery_of_unknown_namespace_is_empty() {
        let registry = registry();
        assert_eq!(registry.classes_in("flex::unit").count(), 0);
    }

    #[test]
    fn resolve_finds_declared_classes() {
        let registry = registry();
        let id = ClassId::new("flex::container", "Bubble");
        let class = registry.resolve(&id).unwrap();
        assert_eq!(class.name, "Bubble");
        assert!(class.has_builder);
    }

    #[test]
    fn resolve_misses_are_none() {
        let registry = registry();
        assert!(registry
            .resolve(&ClassId::new("flex::component", "Missing"))
            .is_none());
        assert!(registry
            .resolve(&ClassId::new("unknown", "Text"))
            .is_none());
    }

    #[test]
    fn docs_for_one_namespace_accumulate() {
        let mut registry = registry();
        registry.insert_doc(SchemaDoc {
            namespace: "flex::component".to_string(),
            classes: vec![ClassDecl::with_builder("Video", vec![])],
        });

        let ids: Vec<_> = registry.classes_in("flex::component").collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[2].name, "Video");
    }

    #[test]
    fn class_id_display_is_qualified() {
        let id = ClassId::new("flex::component", "Video");
        assert_eq!(id.to_string(), "flex::component::Video");
    }
}
