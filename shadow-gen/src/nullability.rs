//! Nullability policy: fixed precedence rules deciding each field's
//! nullability.
//!
//! Rules 1-3 are forced non-null overrides and win over explicit source
//! metadata; metadata only gets a vote once the structural rules have
//! passed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::schema::FieldDecl;

/// Named, versioned table of (class, field) pairs forced non-null.
///
/// The table exists so that known inaccuracies in the model library's
/// optionality metadata can be patched in one auditable place instead of
/// being buried in mapper logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullabilityOverrides {
    /// Table name, for audit output.
    pub name: String,

    /// Table revision.
    pub version: u32,

    /// Forced-non-null (class, field) pairs.
    entries: BTreeSet<(String, String)>,
}

impl NullabilityOverrides {
    /// Create an empty table.
    pub fn empty(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            entries: BTreeSet::new(),
        }
    }

    /// The built-in table.
    ///
    /// `Video`'s url fields are marked optional in the upstream model
    /// metadata but the class is unusable without them; the generated
    /// nullable form would be wrong. Scoped to this one class; not known to
    /// generalize.
    pub fn builtin() -> Self {
        let mut table = Self::empty("flex-video-non-null", 1);
        for field in ["url", "preview_url", "alt_content"] {
            table.force_non_null("Video", field);
        }
        table
    }

    /// Add a forced-non-null entry.
    pub fn force_non_null(&mut self, class: impl Into<String>, field: impl Into<String>) {
        self.entries.insert((class.into(), field.into()));
    }

    /// Check whether a (class, field) pair is forced non-null.
    pub fn contains(&self, class: &str, field: &str) -> bool {
        self.entries
            .contains(&(class.to_string(), field.to_string()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NullabilityOverrides {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The fixed precedence rule set of the nullability policy.
#[derive(Debug, Clone, Default)]
pub struct NullabilityPolicy {
    overrides: NullabilityOverrides,
}

impl NullabilityPolicy {
    /// Create a policy with the given override table.
    pub fn new(overrides: NullabilityOverrides) -> Self {
        Self { overrides }
    }

    /// The override table in force.
    pub fn overrides(&self) -> &NullabilityOverrides {
        &self.overrides
    }

    /// Decide nullability for one field. First matching rule wins:
    ///
    /// 1. primitive kind -> non-null (primitives cannot represent absence);
    /// 2. list type -> non-null (absence is the empty list);
    /// 3. override table entry -> non-null;
    /// 4. metadata marks the field optional -> nullable;
    /// 5. default -> nullable.
    pub fn nullability(&self, class: &str, field: &FieldDecl) -> bool {
        if field.ty.is_primitive() {
            return false;
        }
        if field.ty.is_list() {
            return false;
        }
        if self.overrides.contains(class, &field.name) {
            return false;
        }
        if field.optional {
            return true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RawType;

    fn policy() -> NullabilityPolicy {
        NullabilityPolicy::new(NullabilityOverrides::builtin())
    }

    #[test]
    fn primitives_are_never_nullable() {
        let field = FieldDecl::new("wrap", RawType::primitive("bool")).optional();
        assert!(!policy().nullability("Text", &field));
    }

    #[test]
    fn lists_are_never_nullable() {
        let field = FieldDecl::new("contents", RawType::list_of(RawType::Str)).optional();
        assert!(!policy().nullability("FlexBox", &field));
    }

    #[test]
    fn override_beats_optional_metadata() {
        let field = FieldDecl::new("url", RawType::Str).optional();
        assert!(!policy().nullability("Video", &field));
    }

    #[test]
    fn override_is_scoped_to_its_class() {
        let field = FieldDecl::new("url", RawType::Str).optional();
        assert!(policy().nullability("Text", &field));
    }

    #[test]
    fn optional_metadata_yields_nullable() {
        let field = FieldDecl::new("duration", RawType::boxed("i64")).optional();
        assert!(policy().nullability("Video", &field));
    }

    #[test]
    fn default_is_nullable() {
        let field = FieldDecl::new("size", RawType::Str);
        assert!(policy().nullability("Text", &field));

        let field = FieldDecl::new("header", RawType::class("crate::flex::component::FlexBox"));
        assert!(policy().nullability("Bubble", &field));
    }

    #[test]
    fn builtin_table_is_named_and_versioned() {
        let table = NullabilityOverrides::builtin();
        assert_eq!(table.name, "flex-video-non-null");
        assert_eq!(table.version, 1);
        assert_eq!(table.len(), 3);
        assert!(table.contains("Video", "preview_url"));
        assert!(!table.contains("Video", "duration"));
    }

    #[test]
    fn empty_table_forces_nothing() {
        let policy = NullabilityPolicy::new(NullabilityOverrides::empty("none", 1));
        let field = FieldDecl::new("url", RawType::Str).optional();
        assert!(policy.nullability("Video", &field));
    }
}
