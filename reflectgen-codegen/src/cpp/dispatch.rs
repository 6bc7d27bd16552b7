//! Runtime-type dispatch table generation.
//!
//! Polymorphic deserialization needs a bridge from a runtime class id back
//! to a statically-typed serialization call. The generated table is a
//! switch over the id with exactly one case per concrete polymorphic class;
//! an id that misses the table means the running program and the schema
//! the table was generated from have diverged, which is fatal.

use crate::ancestry::AncestryResolver;
use reflectgen_schema::{ClassDescriptor, Schema};

/// Generator for the dynamic dispatch artifact.
pub struct DispatchGenerator<'a> {
    schema: &'a Schema,
    resolver: &'a AncestryResolver,
}

impl<'a> DispatchGenerator<'a> {
    /// Creates a new dispatch generator.
    #[must_use]
    pub fn new(schema: &'a Schema, resolver: &'a AncestryResolver) -> Self {
        Self { schema, resolver }
    }

    /// Generates the dispatch function wrapped in `namespace <scope>`.
    ///
    /// Enumerates the whole schema, not one scope partition: the table must
    /// be exhaustive over every class that can reach it at runtime. The
    /// root type itself carries no entry.
    #[must_use]
    pub fn generate(&self, scope: &str) -> String {
        let root = &self.resolver.config().root;
        let mut output = String::new();

        output.push_str(&format!("namespace {}\n{{\n", scope));
        output.push_str("template <class Archive>\n");
        output.push_str(&format!(
            "static void DynamicSaveObject ( Archive & archive, std::shared_ptr<{}> obj )\n{{\n",
            root
        ));
        output.push_str("    const int id = obj->ClassId();\n");
        output.push_str("    switch (id)\n    {\n");

        for class in self.dispatchable_classes() {
            output.push_str(&format!(
                "    case reflect::ClassId<{}>():\n",
                class.name
            ));
            output.push_str(&format!(
                "        archive << *std::dynamic_pointer_cast<{}>(obj);\n",
                class.name
            ));
            output.push_str("        break;\n");
        }

        output.push_str("    default:\n");
        output.push_str("        abort();\n");
        output.push_str("    }\n");
        output.push_str("}\n");
        output.push_str(&format!("}} // namespace {}\n", scope));

        output
    }

    /// Concrete polymorphic classes, in schema key order.
    fn dispatchable_classes(&self) -> impl Iterator<Item = &ClassDescriptor> {
        let root = &self.resolver.config().root;
        self.schema.iter().filter(move |c| {
            c.name != *root && !c.flags.hand_authored && self.resolver.is_polymorphic(&c.name)
        })
    }
}
