//! Option-group key resolution.

use castor_model::{CastorError, FieldDescriptor, OptionGroupResolver, Result, StudyConfig};

/// Resolve a raw option-group value to display names joined with `|`.
///
/// Checkbox values carry multiple `;`-separated keys; dropdown and radio
/// values a single one. A missing option group is a hard failure. An
/// unresolvable key is a hard failure too, unless the study's
/// `pass_key_errors` flag lets it pass through verbatim.
pub fn resolve_option_values(
    field: &FieldDescriptor,
    raw: &str,
    config: &StudyConfig,
    groups: &dyn OptionGroupResolver,
) -> Result<String> {
    let group_id = field.option_group.as_deref().unwrap_or("");
    let group = groups
        .option_group(group_id)
        .ok_or_else(|| CastorError::OptionGroupNotFound {
            group_id: group_id.to_string(),
        })?;

    let mut names = Vec::new();
    for key in raw.split(';') {
        match group.name_for(key) {
            Some(name) => names.push(name.to_string()),
            None if config.pass_key_errors => names.push(key.to_string()),
            None => {
                return Err(CastorError::OptionKeyNotFound {
                    group_id: group.id.clone(),
                    field_id: field.id.clone(),
                    field_name: field.name.clone(),
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(names.join("|"))
}
