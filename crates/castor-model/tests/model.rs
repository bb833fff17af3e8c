//! Tests for castor-model types.

use castor_model::{
    detect_user_missing, FieldDescriptor, FieldType, GridTemplate, MissingKind, MissingReason,
    OptionGroup, StudyConfig, StudyLookup,
};
use castor_model::lookup::{FieldResolver, OptionGroupResolver};

#[test]
fn field_descriptor_builders() {
    let field = FieldDescriptor::new("f-grid", "Vitals", FieldType::Grid)
        .with_summary_template(r#"{"fieldTypes":[],"optionLists":[],"rowNames":[],"columnNames":[]}"#);
    assert_eq!(field.field_type, FieldType::Grid);
    assert!(field.option_group.is_none());
    assert!(field.summary_template.is_some());

    let field = FieldDescriptor::new("f-sex", "Sex", FieldType::Radio).with_option_group("og-sex");
    assert_eq!(field.option_group.as_deref(), Some("og-sex"));
}

#[test]
fn option_group_roundtrips_through_json() {
    let json = r#"{
        "id": "og-sex",
        "options": [
            {"value": "0", "name": "Male"},
            {"value": "1", "name": "Female"}
        ]
    }"#;
    let group: OptionGroup = serde_json::from_str(json).expect("deserialize option group");
    assert_eq!(group.name_for("0"), Some("Male"));

    let back = serde_json::to_string(&group).expect("serialize option group");
    let round: OptionGroup = serde_json::from_str(&back).expect("deserialize again");
    assert_eq!(round, group);
}

#[test]
fn grid_template_parallel_arrays() {
    let json = r#"{
        "fieldTypes": ["numeric", "radio", "date"],
        "optionLists": [null, "og-1", null],
        "rowNames": ["Visit 1", "Visit 2"],
        "columnNames": ["Value", "Normal?", "When"]
    }"#;
    let template: GridTemplate = serde_json::from_str(json).expect("deserialize template");
    assert_eq!(template.field_types.len(), template.option_lists.len());
    assert_eq!(template.field_type_at(2), Some(FieldType::Date));
    assert_eq!(template.option_list_at(1), Some("og-1"));
    assert_eq!(template.option_list_at(0), None);
}

#[test]
fn study_config_defaults_match_vendor_formats() {
    let config = StudyConfig::default();
    assert_eq!(config.date_format, "%d-%m-%Y");
    assert_eq!(config.time_format, "%H:%M");
    assert_eq!(config.datetime_format, "%d-%m-%Y %H:%M");
    assert!(!config.pass_key_errors);

    let config = StudyConfig::new()
        .with_date_format("%Y-%m-%d")
        .with_pass_key_errors(true);
    assert_eq!(config.date_format, "%Y-%m-%d");
    assert!(config.pass_key_errors);
}

#[test]
fn missing_detection_is_order_stable() {
    // all five reasons in one value: first priority wins
    let raw = "Missing (not done, asked but unknown, not asked, not applicable, measurement failed)";
    assert_eq!(
        detect_user_missing(raw),
        Some(MissingKind::Reason(MissingReason::MeasurementFailed))
    );
}

#[test]
fn lookup_serves_both_resolver_seams() {
    let lookup = StudyLookup::new()
        .with_field(FieldDescriptor::new("f-1", "Weight", FieldType::Numeric))
        .with_option_group(OptionGroup::new("og-1", vec![]));

    let field_resolver: &dyn FieldResolver = &lookup;
    let group_resolver: &dyn OptionGroupResolver = &lookup;
    assert!(field_resolver.field("f-1").is_some());
    assert!(group_resolver.option_group("og-1").is_some());
}
