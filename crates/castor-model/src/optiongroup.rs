//! Option groups (codelists) as returned by the Castor EDC API.

use serde::{Deserialize, Serialize};

/// One selectable option within an option group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// Stored key, e.g. `"1"`.
    pub value: String,
    /// Display name shown to data-entry users, e.g. `"Yes"`.
    pub name: String,
}

/// An option group resolved by id from the study structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub id: String,
    pub options: Vec<OptionItem>,
}

impl OptionGroup {
    pub fn new(id: impl Into<String>, options: Vec<OptionItem>) -> Self {
        Self {
            id: id.into(),
            options,
        }
    }

    /// Display name for a stored option value, if the key exists.
    pub fn name_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no() -> OptionGroup {
        OptionGroup::new(
            "og-1",
            vec![
                OptionItem {
                    value: "1".to_string(),
                    name: "Yes".to_string(),
                },
                OptionItem {
                    value: "2".to_string(),
                    name: "No".to_string(),
                },
            ],
        )
    }

    #[test]
    fn test_name_for() {
        let group = yes_no();
        assert_eq!(group.name_for("1"), Some("Yes"));
        assert_eq!(group.name_for("2"), Some("No"));
        assert_eq!(group.name_for("3"), None);
    }

    #[test]
    fn test_deserializes_vendor_payload() {
        let json = r#"{"id":"og-1","options":[{"value":"1","name":"Yes"},{"value":"2","name":"No"}]}"#;
        let group: OptionGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group, yes_no());
    }
}
