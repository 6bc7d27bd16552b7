//! Schema snapshot parser.
//!
//! The snapshot is a JSON object keyed by fully-qualified class name, one
//! record per class, as produced by the external extraction step. Loading
//! goes through a `BTreeMap` so class order is the sorted key order
//! regardless of how the extractor serialized the object.

use crate::classes::ClassDescriptor;
use crate::error::ParseError;
use crate::store::Schema;
use std::collections::BTreeMap;

/// Parses a schema snapshot from a JSON string.
///
/// # Arguments
/// * `json` - Snapshot content, a map from class name to class record
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a record is missing a
/// required field.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let raw: BTreeMap<String, ClassDescriptor> = serde_json::from_str(json)?;

    let mut classes = BTreeMap::new();
    for (name, mut class) in raw {
        class.name = name.clone();
        classes.insert(name, class);
    }

    Ok(Schema::from_classes(classes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SCHEMA: &str = r#"{
        "engine::Object": {
            "header_file": "Object.hpp",
            "scope_prefix": "engine"
        },
        "engine::Camera": {
            "parent": "engine::Behaviour",
            "members": [
                {"name": "m_fieldOfView", "type": "float"},
                {"name": "m_dirty", "type": "bool", "serializable": false}
            ],
            "header_file": "Camera.hpp",
            "scope_prefix": "engine"
        },
        "engine::Behaviour": {
            "parent": "engine::Object",
            "header_file": "Behaviour.hpp",
            "scope_prefix": "engine",
            "flags": {"clone_disabled": true}
        }
    }"#;

    #[test]
    fn test_parse_simple_snapshot() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.len(), 3);
        assert!(schema.contains("engine::Object"));
        assert!(schema.contains("engine::Camera"));
        assert!(schema.contains("engine::Behaviour"));
    }

    #[test]
    fn test_names_filled_from_keys() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let camera = schema.get("engine::Camera").unwrap();
        assert_eq!(camera.name, "engine::Camera");
        assert_eq!(camera.parent.as_deref(), Some("engine::Behaviour"));
        assert_eq!(camera.members.len(), 2);
        assert_eq!(camera.members[0].name, "m_fieldOfView");
        assert_eq!(camera.members[0].type_name, "float");
        assert!(!camera.members[1].serializable);
    }

    #[test]
    fn test_flags_parsed() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let behaviour = schema.get("engine::Behaviour").unwrap();
        assert!(behaviour.flags.clone_disabled);
        assert!(!behaviour.flags.hand_authored);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_schema("{not json").is_err());
    }

    #[test]
    fn test_parse_rejects_missing_required_field() {
        // header_file is required on every record.
        let json = r#"{"engine::Camera": {"scope_prefix": "engine"}}"#;
        assert!(parse_schema(json).is_err());
    }

    #[test]
    fn test_parse_empty_snapshot() {
        let schema = parse_schema("{}").expect("Failed to parse schema");
        assert!(schema.is_empty());
    }
}
