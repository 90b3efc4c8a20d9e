//! Factory function emitter.

use convert_case::{Case, Casing};

use crate::descriptor::TargetClassDescriptor;

/// Emits the free factory function for one target class.
#[derive(Debug, Default, Clone, Copy)]
pub struct FactoryEmitter;

impl FactoryEmitter {
    /// Create an emitter.
    pub fn new() -> Self {
        Self
    }

    /// Name of the factory function: snake_case of the class name.
    pub fn factory_name(descriptor: &TargetClassDescriptor) -> String {
        descriptor.id.name.to_case(Case::Snake)
    }

    /// Emit the factory function.
    ///
    /// Required arguments come first, then the single configuration closure.
    /// The closure runs exactly once against exclusive ownership of the
    /// shadow before `build` is called.
    pub fn emit(&self, descriptor: &TargetClassDescriptor) -> String {
        let class = &descriptor.id.name;
        let shadow = descriptor.shadow_name();
        let factory = Self::factory_name(descriptor);

        let mut params = descriptor
            .required_fields()
            .map(|field| format!("{}: {}", field.name, field.property_type()))
            .collect::<Vec<_>>();
        params.push(format!("init: impl FnOnce(&mut {shadow})"));
        let params = params.join(", ");

        let args = descriptor
            .required_fields()
            .map(|field| field.name.clone())
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        out.push_str(&format!(
            "/// Construct a [`{class}`] by mutating its shadow in place.\n"
        ));
        out.push_str(&format!("pub fn {factory}({params}) -> {class} {{\n"));
        out.push_str(&format!("    let mut shadow = {shadow}::new({args});\n"));
        out.push_str("    init(&mut shadow);\n");
        out.push_str("    shadow.build()\n");
        out.push_str("}\n");
        out
    }
}
