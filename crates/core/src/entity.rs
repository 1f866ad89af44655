//! References to backend entities.
//!
//! Backend payloads refer to related records either by a bare id string or
//! by an embedded object whose id lives under `id` or `_id`.

use serde::{Deserialize, Serialize};

/// A reference to a backend entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    /// Bare id string
    Id(String),

    /// Embedded object carrying its id
    ///
    /// Id fields keep their raw JSON so a malformed `id` does not hide `_id`.
    Object {
        /// Canonical id field
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<serde_json::Value>,

        /// Document-store id field
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        mongo_id: Option<serde_json::Value>,
    },
}

impl EntityRef {
    /// The referenced id. `id` wins over `_id`; empty or non-string values
    /// count as absent.
    pub fn id(&self) -> Option<&str> {
        match self {
            EntityRef::Id(id) => non_empty(id),
            EntityRef::Object { id, mongo_id } => string_id(id).or_else(|| string_id(mongo_id)),
        }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        EntityRef::Id(id.to_string())
    }
}

/// Extract an entity id from an arbitrary JSON value.
pub fn extract_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(_) | serde_json::Value::Object(_) => {
            let entity: EntityRef = serde_json::from_value(value.clone()).ok()?;
            entity.id().map(str::to_string)
        }
        _ => None,
    }
}

fn string_id(value: &Option<serde_json::Value>) -> Option<&str> {
    value.as_ref().and_then(serde_json::Value::as_str).and_then(non_empty)
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_reference() {
        assert_eq!(extract_id(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(EntityRef::from("abc").id(), Some("abc"));
    }

    #[test]
    fn test_object_reference() {
        assert_eq!(extract_id(&json!({"_id": "x"})).as_deref(), Some("x"));
        assert_eq!(extract_id(&json!({"id": "y"})).as_deref(), Some("y"));
        assert_eq!(extract_id(&json!({"id": "y", "_id": "x"})).as_deref(), Some("y"));
        assert_eq!(extract_id(&json!({"id": "", "_id": "x"})).as_deref(), Some("x"));
    }

    #[test]
    fn test_non_string_id_falls_back_to_document_id() {
        assert_eq!(extract_id(&json!({"id": 5, "_id": "x"})).as_deref(), Some("x"));
        assert_eq!(extract_id(&json!({"id": null, "_id": "x"})).as_deref(), Some("x"));
        assert_eq!(extract_id(&json!({"id": "y", "_id": {"$oid": "x"}})).as_deref(), Some("y"));
    }

    #[test]
    fn test_object_with_extra_fields() {
        let value = json!({"_id": "u-7", "name": "Dana", "role": "manager"});
        assert_eq!(extract_id(&value).as_deref(), Some("u-7"));
    }

    #[test]
    fn test_missing_id() {
        assert_eq!(extract_id(&json!({})), None);
        assert_eq!(extract_id(&json!("")), None);
        assert_eq!(extract_id(&json!(42)), None);
        assert_eq!(extract_id(&json!(null)), None);
        assert_eq!(extract_id(&json!({"_id": 42})), None);
    }

    #[test]
    fn test_deserialize_in_payload() {
        #[derive(Deserialize)]
        struct Assignment {
            assignee: EntityRef,
            reviewer: EntityRef,
        }

        let payload: Assignment = serde_json::from_value(json!({
            "assignee": "u-1",
            "reviewer": {"_id": "u-2", "name": "Sam"},
        }))
        .unwrap();
        assert_eq!(payload.assignee.id(), Some("u-1"));
        assert_eq!(payload.reviewer.id(), Some("u-2"));
    }
}
