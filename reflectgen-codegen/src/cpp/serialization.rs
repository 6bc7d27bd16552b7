//! Save/Restore/Clone/CopyValueTo code generation.
//!
//! Emits one C++ translation unit per scope: the polymorphic method set for
//! classes under the root type, and free Save/Restore functions for flat
//! value types. Classes are visited in schema key order and members in
//! declaration order, so output is byte-identical across runs.

use crate::ancestry::AncestryResolver;
use reflectgen_schema::{ClassDescriptor, Schema};
use std::collections::BTreeSet;

const FILE_BANNER: &str = "/**************************************************\n\
                           * auto generated by the reflection system\n\
                           **************************************************/\n\n";

/// Generator for per-class serialization and clone operations.
pub struct SerializationGenerator<'a> {
    schema: &'a Schema,
    resolver: &'a AncestryResolver,
}

impl<'a> SerializationGenerator<'a> {
    /// Creates a new serialization generator.
    #[must_use]
    pub fn new(schema: &'a Schema, resolver: &'a AncestryResolver) -> Self {
        Self { schema, resolver }
    }

    /// Generates the translation unit for all classes under `scope_prefix`.
    ///
    /// Hand-authored classes are skipped silently; they are declared in the
    /// snapshot only so other classes can reference them.
    #[must_use]
    pub fn generate(&self, scope_prefix: &str) -> String {
        let classes: Vec<&ClassDescriptor> = self
            .schema
            .classes_in_scope(scope_prefix)
            .filter(|c| !c.flags.hand_authored)
            .collect();

        let mut output = String::new();
        output.push_str(FILE_BANNER);
        output.push_str("#include <reflect/Archive.hpp>\n");
        output.push_str("#include <reflect/CloneContext.hpp>\n");

        // One include per distinct header, sorted.
        let headers: BTreeSet<&str> = classes.iter().map(|c| c.header_file.as_str()).collect();
        for header in &headers {
            output.push_str(&format!("#include \"{}\"\n", header));
        }

        output.push_str(&format!("\nnamespace {}\n{{\n", scope_prefix));

        for class in &classes {
            if self.resolver.is_polymorphic(&class.name) {
                output.push_str(&self.generate_polymorphic(class));
            } else {
                output.push_str(&self.generate_plain_value(class));
            }
        }

        output.push_str(&format!("}} // namespace {}\n", scope_prefix));
        output
    }

    /// Generates overridable Save/Restore (and Clone/CopyValueTo for
    /// components) for a class under the root type.
    fn generate_polymorphic(&self, class: &ClassDescriptor) -> String {
        let mut output = String::new();
        let name = &class.name;

        output.push_str(&format!("// {}\n", name));

        // Save
        output.push_str(&format!(
            "void {}::Save ( reflect::OutputArchive & archive ) const\n{{\n",
            name
        ));
        if let Some(parent) = self.delegation_parent(class) {
            output.push_str(&format!("    {}::Save(archive);\n", parent));
        }
        for member in class.serializable_members() {
            output.push_str(&format!(
                "    archive << reflect::MakeNamed(\"{0}\", {0}); // {1}\n",
                member.name, member.type_name
            ));
        }
        output.push_str("}\n\n");

        // Restore
        output.push_str(&format!(
            "void {}::Restore ( reflect::InputArchive & archive )\n{{\n",
            name
        ));
        if let Some(parent) = self.delegation_parent(class) {
            output.push_str(&format!("    {}::Restore(archive);\n", parent));
        }
        for member in class.serializable_members() {
            output.push_str(&format!(
                "    archive >> reflect::MakeNamed(\"{0}\", {0}); // {1}\n",
                member.name, member.type_name
            ));
        }
        output.push_str("}\n\n");

        let is_component = self.resolver.is_component(name);
        if is_component && *name != self.resolver.config().component_root {
            output.push_str(&self.generate_clone(class));
            output.push_str(&self.generate_copy_value_to(class));
        }

        output
    }

    /// Generates the Clone operation for a component class.
    fn generate_clone(&self, class: &ClassDescriptor) -> String {
        let mut output = String::new();
        let name = &class.name;

        output.push_str(&format!(
            "reflect::ComponentPtr {}::Clone ( reflect::CloneContext & context ) const\n{{\n",
            name
        ));
        if class.flags.clone_disabled {
            // Abstract-only bases must never be instantiated generically.
            output.push_str("    abort();\n");
            output.push_str("    return nullptr;\n");
        } else {
            output.push_str(&format!(
                "    auto ret = reflect::MakeShared<{}>();\n",
                name
            ));
            output.push_str("    context.Register(this->GetInstanceId(), ret);\n");
            output.push_str("    this->CopyValueTo(ret, context);\n");
            output.push_str("    return ret;\n");
        }
        output.push_str("}\n\n");

        output
    }

    /// Generates the CopyValueTo operation for a component class.
    fn generate_copy_value_to(&self, class: &ClassDescriptor) -> String {
        let mut output = String::new();
        let name = &class.name;

        output.push_str(&format!(
            "void {0}::CopyValueTo ( std::shared_ptr<{0}> target, reflect::CloneContext & context ) const\n{{\n",
            name
        ));
        if let Some(parent) = &class.parent {
            output.push_str(&format!("    {}::CopyValueTo(target, context);\n", parent));
        }
        for member in class.serializable_members() {
            output.push_str(&format!(
                "    context.Clone(this->{0}, target->{0}); // {1}\n",
                member.name, member.type_name
            ));
        }
        output.push_str("}\n\n");

        output
    }

    /// Generates free Save/Restore functions for a flat value type.
    fn generate_plain_value(&self, class: &ClassDescriptor) -> String {
        let mut output = String::new();
        let name = &class.name;

        output.push_str(&format!("// {}\n", name));

        output.push_str(&format!(
            "void Save ( reflect::OutputArchive & archive, {} const & value )\n{{\n",
            name
        ));
        output.push_str("    archive.BeginStruct();\n");
        for member in class.serializable_members() {
            output.push_str(&format!(
                "    archive << reflect::MakeNamed(\"{0}\", value.{0}); // {1}\n",
                member.name, member.type_name
            ));
        }
        output.push_str("    archive.EndStruct();\n");
        output.push_str("}\n\n");

        output.push_str(&format!(
            "void Restore ( reflect::InputArchive & archive, {} & value )\n{{\n",
            name
        ));
        output.push_str("    archive.BeginStruct();\n");
        for member in class.serializable_members() {
            output.push_str(&format!(
                "    archive >> reflect::MakeNamed(\"{0}\", value.{0}); // {1}\n",
                member.name, member.type_name
            ));
        }
        output.push_str("    archive.EndStruct();\n");
        output.push_str("}\n\n");

        output
    }

    /// Parent to chain Save/Restore through, if any.
    ///
    /// Delegation is suppressed when the parent is the root type (it has no
    /// serializable state of its own) or the class opts out via flag.
    fn delegation_parent<'c>(&self, class: &'c ClassDescriptor) -> Option<&'c str> {
        if class.flags.skip_parent_delegation {
            return None;
        }
        class
            .parent
            .as_deref()
            .filter(|p| *p != self.resolver.config().root)
    }
}
