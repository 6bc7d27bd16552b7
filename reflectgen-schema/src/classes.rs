//! Class and member descriptors.
//!
//! These structures mirror one entry of the extracted class-info snapshot:
//! a fully-qualified class name, an optional single parent, an ordered
//! member list, and the capability flags driving code generation.

use serde::Deserialize;

/// A single data member of a class.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDescriptor {
    /// Member name.
    pub name: String,
    /// Declared type label. Opaque to the generator; carried through into
    /// generated comments only.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the member participates in Save/Restore/CopyValueTo.
    #[serde(default = "default_true")]
    pub serializable: bool,
}

impl MemberDescriptor {
    /// Creates a serializable member descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            serializable: true,
        }
    }

    /// Marks the member as excluded from generated operations.
    #[must_use]
    pub fn non_serializable(mut self) -> Self {
        self.serializable = false;
        self
    }
}

/// Capability flags attached to a class at schema-build time.
///
/// These replace by-name special casing in the emitter: the extractor (or
/// whoever assembles the snapshot) decides which classes opt out of which
/// generated behavior.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ClassFlags {
    /// Save/Restore do not chain to the parent operation even though a
    /// parent link exists.
    pub skip_parent_delegation: bool,
    /// Clone is emitted as an unconditional abort. Set on abstract-only
    /// component bases that must never be instantiated generically.
    pub clone_disabled: bool,
    /// Class is hand-authored elsewhere; nothing is generated for it.
    pub hand_authored: bool,
}

/// Descriptor for one class in the hierarchy.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDescriptor {
    /// Fully-qualified class name. Filled from the snapshot map key.
    #[serde(default)]
    pub name: String,
    /// Parent class name, if any. Single inheritance only.
    #[serde(default)]
    pub parent: Option<String>,
    /// Members in declaration order. Order is semantically meaningful and
    /// is the order generated operations visit them.
    #[serde(default)]
    pub members: Vec<MemberDescriptor>,
    /// Header file declaring the class.
    pub header_file: String,
    /// Grouping tag partitioning classes across generation targets.
    pub scope_prefix: String,
    /// Capability flags.
    #[serde(default)]
    pub flags: ClassFlags,
}

impl ClassDescriptor {
    /// Iterates the serializable members in declaration order.
    pub fn serializable_members(&self) -> impl Iterator<Item = &MemberDescriptor> {
        self.members.iter().filter(|m| m.serializable)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_serializable_by_default() {
        let json = r#"{"name": "m_position", "type": "Vector3"}"#;
        let member: MemberDescriptor = serde_json::from_str(json).expect("Failed to parse");
        assert!(member.serializable);
    }

    #[test]
    fn test_member_non_serializable() {
        let json = r#"{"name": "m_cache", "type": "int", "serializable": false}"#;
        let member: MemberDescriptor = serde_json::from_str(json).expect("Failed to parse");
        assert!(!member.serializable);
    }

    #[test]
    fn test_flags_default_to_false() {
        let json = r#"{"header_file": "Camera.hpp", "scope_prefix": "engine"}"#;
        let class: ClassDescriptor = serde_json::from_str(json).expect("Failed to parse");
        assert!(!class.flags.skip_parent_delegation);
        assert!(!class.flags.clone_disabled);
        assert!(!class.flags.hand_authored);
        assert!(class.parent.is_none());
        assert!(class.members.is_empty());
    }

    #[test]
    fn test_serializable_members_preserve_order() {
        let class = ClassDescriptor {
            name: "engine::Camera".to_string(),
            parent: None,
            members: vec![
                MemberDescriptor::new("m_fov", "float"),
                MemberDescriptor::new("m_dirty", "bool").non_serializable(),
                MemberDescriptor::new("m_near", "float"),
            ],
            header_file: "Camera.hpp".to_string(),
            scope_prefix: "engine".to_string(),
            flags: ClassFlags::default(),
        };

        let names: Vec<&str> = class.serializable_members().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["m_fov", "m_near"]);
    }
}
