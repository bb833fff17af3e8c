//! Resolver seams and an in-memory study lookup.

use std::collections::HashMap;

use crate::field::FieldDescriptor;
use crate::optiongroup::OptionGroup;

/// Resolves a field definition by id.
pub trait FieldResolver {
    fn field(&self, field_id: &str) -> Option<&FieldDescriptor>;
}

/// Resolves an option group by id.
pub trait OptionGroupResolver {
    fn option_group(&self, group_id: &str) -> Option<&OptionGroup>;
}

/// In-memory resolver over fields and option groups already fetched from
/// the study structure.
#[derive(Debug, Clone, Default)]
pub struct StudyLookup {
    fields: HashMap<String, FieldDescriptor>,
    option_groups: HashMap<String, OptionGroup>,
}

impl StudyLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_field(&mut self, field: FieldDescriptor) {
        self.fields.insert(field.id.clone(), field);
    }

    pub fn add_option_group(&mut self, group: OptionGroup) {
        self.option_groups.insert(group.id.clone(), group);
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.add_field(field);
        self
    }

    pub fn with_option_group(mut self, group: OptionGroup) -> Self {
        self.add_option_group(group);
        self
    }
}

impl FieldResolver for StudyLookup {
    fn field(&self, field_id: &str) -> Option<&FieldDescriptor> {
        self.fields.get(field_id)
    }
}

impl OptionGroupResolver for StudyLookup {
    fn option_group(&self, group_id: &str) -> Option<&OptionGroup> {
        self.option_groups.get(group_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::FieldType;

    #[test]
    fn test_lookup_resolves_by_id() {
        let lookup = StudyLookup::new()
            .with_field(FieldDescriptor::new("f-1", "Weight", FieldType::Numeric))
            .with_option_group(OptionGroup::new("og-1", vec![]));

        assert_eq!(lookup.field("f-1").map(|f| f.name.as_str()), Some("Weight"));
        assert!(lookup.field("f-2").is_none());
        assert!(lookup.option_group("og-1").is_some());
        assert!(lookup.option_group("og-2").is_none());
    }
}
