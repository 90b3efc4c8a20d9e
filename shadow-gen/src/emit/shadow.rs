//! Shadow struct emitter.

use crate::descriptor::TargetClassDescriptor;

/// Emits the `pub struct <Class>Shadow` definition and its impl block.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShadowEmitter;

impl ShadowEmitter {
    /// Create an emitter.
    pub fn new() -> Self {
        Self
    }

    /// Emit the shadow struct for one target class.
    pub fn emit(&self, descriptor: &TargetClassDescriptor) -> String {
        let class = &descriptor.id.name;
        let shadow = descriptor.shadow_name();
        let mut out = String::new();

        out.push_str(&format!(
            "/// Mutable shadow of [`{class}`] for staged construction.\n"
        ));
        out.push_str(&format!("pub struct {shadow} {{\n"));
        for field in &descriptor.fields {
            out.push_str(&format!(
                "    pub {}: {},\n",
                field.name,
                field.property_type()
            ));
        }
        out.push_str("}\n\n");

        out.push_str(&format!("impl {shadow} {{\n"));
        out.push_str(&self.emit_new(descriptor));
        out.push('\n');
        out.push_str(&self.emit_build(descriptor));
        out.push_str("}\n");

        out
    }

    /// The `new` constructor: one parameter per required field, in
    /// declaration order; nullable fields start as `None`.
    fn emit_new(&self, descriptor: &TargetClassDescriptor) -> String {
        let params = descriptor
            .required_fields()
            .map(|field| format!("{}: {}", field.name, field.property_type()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        out.push_str("    /// Create a shadow with every required field supplied.\n");
        out.push_str(&format!("    pub fn new({params}) -> Self {{\n"));
        out.push_str("        Self {\n");
        for field in &descriptor.fields {
            if field.nullable {
                out.push_str(&format!(
                    "            {}: {},\n",
                    field.name,
                    field.ty.default_literal(true)
                ));
            } else {
                out.push_str(&format!("            {},\n", field.name));
            }
        }
        out.push_str("        }\n");
        out.push_str("    }\n");
        out
    }

    /// The terminal `build`: chains one builder setter per field, in
    /// introspection order. Builders may be order-sensitive, so the chain
    /// never reorders fields.
    fn emit_build(&self, descriptor: &TargetClassDescriptor) -> String {
        let class = &descriptor.id.name;

        let mut out = String::new();
        out.push_str("    /// Assemble the finished value through the target's builder.\n");
        out.push_str(&format!("    pub fn build(self) -> {class} {{\n"));
        out.push_str(&format!("        {class}::builder()\n"));
        for field in &descriptor.fields {
            out.push_str(&format!("            .{}(self.{})\n", field.name, field.name));
        }
        out.push_str("            .build()\n");
        out.push_str("    }\n");
        out
    }
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
    fn struct_has_one_property_per_field() {
        let source = ShadowEmitter::new().emit(&video());
        assert!(source.contains("pub struct VideoShadow {"));
        assert!(source.contains("    pub url: String,"));
        assert!(source.contains("    pub duration: Option<i64>,"));
    }

    #[test]
    fn new_takes_required_fields_and_defaults_the_rest() {
        let source = ShadowEmitter::new().emit(&video());
        assert!(source.contains("pub fn new(url: String) -> Self {"));
        assert!(source.contains("duration: None,"));
    }

    #[test]
    fn build_chains_setters_in_declaration_order() {
        let source = ShadowEmitter::new().emit(&video());
        let url = source.find(".url(self.url)").unwrap();
        let duration = source.find(".duration(self.duration)").unwrap();
        let terminal = source.find(".build()").unwrap();
        assert!(url < duration);
        assert!(duration < terminal);
        assert!(source.contains("Video::builder()"));
    }

    #[test]
    fn class_with_no_required_fields_gets_a_nullary_new() {
        let descriptor = TargetClassDescriptor::new(
            ClassId::new("flex::container", "Bubble"),
            vec![FieldDescriptor::new(
                "header",
                MappedType::Reference("crate::flex::component::FlexBox".to_string()),
                true,
            )],
        );
        let source = ShadowEmitter::new().emit(&descriptor);
        assert!(source.contains("pub fn new() -> Self {"));
        assert!(source.contains("pub header: Option<crate::flex::component::FlexBox>,"));
    }
}
