//! Data-point adapter: one field instance with a value for one record.

use chrono::NaiveDateTime;

use castor_model::{
    CastorError, FieldResolver, FieldType, Interpreted, OptionGroupResolver, Result, StudyConfig,
};

use crate::interpret::interpret;
use crate::wire;

/// Timestamp format of the export's "filled in" column.
const FILLED_IN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw export value bound to its field, with the interpretation
/// computed once at construction and cached.
#[derive(Debug, Clone)]
pub struct DataPoint {
    pub field_id: String,
    pub field_name: String,
    pub field_type: FieldType,
    pub raw_value: String,
    /// When the data point was entered; `None` when the export column
    /// was empty.
    pub filled_in: Option<NaiveDateTime>,
    pub value: Interpreted,
}

impl DataPoint {
    /// Resolve the field, parse the filled-in timestamp, and interpret
    /// the raw value.
    ///
    /// An unknown field id is a hard failure: the study structure must
    /// be loaded before data points are built.
    pub fn new<S>(
        field_id: &str,
        raw_value: &str,
        filled_in: &str,
        config: &StudyConfig,
        study: &S,
    ) -> Result<Self>
    where
        S: FieldResolver + OptionGroupResolver,
    {
        let field = study
            .field(field_id)
            .ok_or_else(|| CastorError::FieldNotFound(field_id.to_string()))?;
        let filled_in = parse_filled_in(filled_in)?;
        let value = interpret(field, raw_value, config, study)?;
        Ok(Self {
            field_id: field.id.clone(),
            field_name: field.name.clone(),
            field_type: field.field_type,
            raw_value: raw_value.to_string(),
            filled_in,
            value,
        })
    }

    /// Export-compatible JSON rendering of the cached interpretation.
    pub fn to_wire(&self) -> serde_json::Value {
        wire::to_json(&self.value, self.field_type)
    }
}

fn parse_filled_in(value: &str) -> Result<Option<NaiveDateTime>> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDateTime::parse_from_str(value, FILLED_IN_FORMAT)
        .map(Some)
        .map_err(|_| CastorError::InvalidFilledIn(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use castor_model::{FieldDescriptor, FieldValue, StudyLookup};
    use chrono::{NaiveDate, NaiveTime};

    fn study() -> StudyLookup {
        StudyLookup::new().with_field(FieldDescriptor::new("f-wt", "Weight", FieldType::Numeric))
    }

    #[test]
    fn test_builds_and_caches_interpretation() {
        let point = DataPoint::new(
            "f-wt",
            "70.5",
            "2020-02-01 13:37:00",
            &StudyConfig::default(),
            &study(),
        )
        .unwrap();
        assert_eq!(point.value, Interpreted::Value(FieldValue::Number(70.5)));
        assert_eq!(
            point.filled_in,
            Some(
                NaiveDate::from_ymd_opt(2020, 2, 1)
                    .unwrap()
                    .and_time(NaiveTime::from_hms_opt(13, 37, 0).unwrap())
            )
        );
        assert_eq!(point.to_wire(), serde_json::json!(70.5));
    }

    #[test]
    fn test_empty_filled_in_is_none() {
        let point =
            DataPoint::new("f-wt", "", "", &StudyConfig::default(), &study()).unwrap();
        assert!(point.filled_in.is_none());
        assert_eq!(point.to_wire(), serde_json::Value::Null);
    }

    #[test]
    fn test_unknown_field_is_a_hard_failure() {
        let result = DataPoint::new("f-x", "1", "", &StudyConfig::default(), &study());
        assert!(matches!(result, Err(CastorError::FieldNotFound(_))));
    }

    #[test]
    fn test_malformed_filled_in_is_a_hard_failure() {
        let result = DataPoint::new("f-wt", "1", "01-02-2020", &StudyConfig::default(), &study());
        assert!(matches!(result, Err(CastorError::InvalidFilledIn(_))));
    }
}
