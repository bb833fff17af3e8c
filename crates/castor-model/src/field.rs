//! Field metadata needed to interpret a raw value.

use serde::{Deserialize, Serialize};

use crate::enums::FieldType;

/// The slice of a Castor field definition the interpreter needs: the type
/// tag, the option-group id, the grid summary template, and the display
/// name (used in error messages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub field_type: FieldType,
    /// Option-group id, present for checkbox/dropdown/radio fields.
    pub option_group: Option<String>,
    /// JSON template describing a grid's layout, present for grid fields.
    pub summary_template: Option<String>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            field_type,
            option_group: None,
            summary_template: None,
        }
    }

    pub fn with_option_group(mut self, group_id: impl Into<String>) -> Self {
        self.option_group = Some(group_id.into());
        self
    }

    pub fn with_summary_template(mut self, template: impl Into<String>) -> Self {
        self.summary_template = Some(template.into());
        self
    }
}
