//! Source emitters for generated shadow companions.
//!
//! Both emitters build plain source text; nothing here touches the
//! filesystem. The composed artifact is a complete Rust module: header
//! comment, one `use` for the target class, the shadow struct, and the
//! factory function.

mod factory;
mod shadow;

pub use factory::FactoryEmitter;
pub use shadow::ShadowEmitter;

use crate::descriptor::TargetClassDescriptor;
use crate::sink::GeneratedArtifact;

/// Header line stamped on every generated file.
pub const GENERATED_HEADER: &str = "// Generated by shadow-gen. Do not edit by hand.";

/// Emit the complete artifact for one target class.
///
/// The generated module lives next to the target class in its namespace, so
/// the target itself is imported through `super` while every other reference
/// is spelled as the full path recorded in the schema.
pub fn emit_artifact(descriptor: &TargetClassDescriptor) -> GeneratedArtifact {
    let class = &descriptor.id.name;

    let mut source = String::new();
    source.push_str(GENERATED_HEADER);
    source.push_str("\n\n");
    source.push_str(&format!("use super::{class};\n\n"));
    source.push_str(&ShadowEmitter::new().emit(descriptor));
    source.push('\n');
    source.push_str(&FactoryEmitter::new().emit(descriptor));

    GeneratedArtifact::new(
        descriptor.id.namespace.clone(),
        descriptor.shadow_name(),
        source,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, MappedType, ScalarKind};
    use crate::schema::ClassId;

    fn video() -> TargetClassDescriptor {
        TargetClassDescriptor::new(
            ClassId::new("flex::component", "Video"),
            vec![
                FieldDescriptor::new("url", MappedType::Str, false),
                FieldDescriptor::new("duration", MappedType::Scalar(ScalarKind::I64), true),
            ],
        )
    }

    #[test]
    fn artifact_is_addressed_by_namespace_and_shadow_name() {
        let artifact = emit_artifact(&video());
        assert_eq!(artifact.namespace, "flex::component");
        assert_eq!(artifact.name, "VideoShadow");
    }

    #[test]
    fn artifact_starts_with_the_header_and_imports_the_target() {
        let artifact = emit_artifact(&video());
        assert!(artifact.source.starts_with(GENERATED_HEADER));
        assert!(artifact.source.contains("use super::Video;"));
    }

    #[test]
    fn artifact_parses_as_valid_rust() {
        let artifact = emit_artifact(&video());
        syn::parse_file(&artifact.source).unwrap();
    }

    #[test]
    fn references_keep_full_paths_instead_of_imports() {
        let descriptor = TargetClassDescriptor::new(
            ClassId::new("flex::container", "Bubble"),
            vec![FieldDescriptor::new(
                "header",
                MappedType::Reference("crate::flex::component::FlexBox".to_string()),
                true,
            )],
        );
        let artifact = emit_artifact(&descriptor);
        assert!(artifact
            .source
            .contains("Option<crate::flex::component::FlexBox>"));
        assert!(!artifact.source.contains("use crate::flex::component::FlexBox"));
        syn::parse_file(&artifact.source).unwrap();
    }
}
