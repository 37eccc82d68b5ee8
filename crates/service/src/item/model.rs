use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A stored item. `id` and `created_at` are assigned by the store on create
/// and never change afterwards; updates replace only `name` and
/// `description`. Serializes with camelCase keys (`createdAt` on the wire).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Typed create/update request body. Deliberately has no `id` or `createdAt`
/// field: serde drops unknown keys, so client-supplied values for
/// server-assigned fields are ignored rather than honored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ItemInput {
    /// `name` must be non-empty after trimming; `description` is optional.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::validation("Name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_name_is_valid() {
        let input = ItemInput {
            name: "Widget".into(),
            description: String::new(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            let input = ItemInput {
                name: name.into(),
                description: "whatever".into(),
            };
            assert!(
                matches!(input.validate(), Err(ServiceError::Validation(_))),
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn input_description_defaults_to_empty() {
        let input: ItemInput = serde_json::from_str(r#"{"name": "Widget"}"#).expect("parse");
        assert_eq!(input.description, "");
    }

    #[test]
    fn input_ignores_server_assigned_fields() {
        let input: ItemInput = serde_json::from_str(
            r#"{"id": "999", "name": "Widget", "createdAt": "2000-01-01T00:00:00Z"}"#,
        )
        .expect("unknown keys are dropped");
        assert_eq!(input.name, "Widget");
    }

    #[test]
    fn item_serializes_created_at_as_camel_case() {
        let item = Item {
            id: "1".into(),
            name: "Widget".into(),
            description: String::new(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&item).expect("serialize");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
