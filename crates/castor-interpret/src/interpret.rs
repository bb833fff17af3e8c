//! The value-interpretation dispatch.
//!
//! One pure function turns `(field, raw value, study config, option-group
//! resolver)` into a tagged [`Interpreted`] outcome. Every rule shares the
//! same prefix: the empty string maps to the type's empty representation,
//! a value carrying the `"Missing"` marker maps to the matching sentinel,
//! and only then is the value parsed for real.

use castor_model::{
    detect_user_missing, CastorError, FieldDescriptor, FieldType, FieldValue, Interpreted,
    MissingKind, MissingReason, OptionGroupResolver, Result, StudyConfig,
};

use crate::datetime;
use crate::grid;
use crate::optiongroup;

/// Interpret one raw export value according to its field's type.
///
/// Hard failures (unresolvable option groups or keys, malformed
/// non-missing values) are returned as `Err`; recognized and unrecognized
/// user missings, and grid reconstruction failures, are in-band
/// [`Interpreted`] variants.
pub fn interpret(
    field: &FieldDescriptor,
    raw: &str,
    config: &StudyConfig,
    groups: &dyn OptionGroupResolver,
) -> Result<Interpreted> {
    match field.field_type {
        FieldType::Checkbox | FieldType::Dropdown | FieldType::Radio => {
            interpret_option_group(field, raw, config, groups)
        }
        FieldType::Numeric | FieldType::Slider | FieldType::Randomization => {
            interpret_numeric(raw)
        }
        FieldType::Year => interpret_year(raw),
        FieldType::String | FieldType::Textarea | FieldType::Upload | FieldType::Calculation => {
            // free text passes through unchanged, missing markers included
            Ok(Interpreted::Value(FieldValue::text(raw)))
        }
        FieldType::Datetime => interpret_datetime(raw, config),
        FieldType::Date => interpret_date(raw, config),
        FieldType::Time => interpret_time(raw, config),
        FieldType::Numberdate => interpret_numberdate(raw, config),
        FieldType::Grid => Ok(grid::interpret_grid(field, raw, config, groups)),
        _ => Ok(Interpreted::Failed),
    }
}

fn interpret_option_group(
    field: &FieldDescriptor,
    raw: &str,
    config: &StudyConfig,
    groups: &dyn OptionGroupResolver,
) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::text("")));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => Ok(missing(reason, FieldValue::text(reason.label()))),
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let value = optiongroup::resolve_option_values(field, raw, config, groups)?;
            Ok(Interpreted::Value(FieldValue::Text(value)))
        }
    }
}

fn interpret_numeric(raw: &str) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::nan()));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => {
            Ok(missing(reason, FieldValue::Int(reason.sentinel_code())))
        }
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let number = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| CastorError::InvalidNumber(raw.to_string()))?;
            Ok(Interpreted::Value(FieldValue::Number(number)))
        }
    }
}

fn interpret_year(raw: &str) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::nan()));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => {
            Ok(missing(reason, FieldValue::Int(reason.sentinel_code())))
        }
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let year = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| CastorError::InvalidYear(raw.to_string()))?;
            Ok(Interpreted::Value(FieldValue::Int(year)))
        }
    }
}

fn interpret_time(raw: &str, config: &StudyConfig) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::text("")));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => Ok(missing(
            reason,
            FieldValue::Text(reason.sentinel_code().to_string()),
        )),
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let value = datetime::interpret_time_value(raw, &config.time_format)?;
            Ok(Interpreted::Value(FieldValue::Text(value)))
        }
    }
}

fn interpret_date(raw: &str, config: &StudyConfig) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::nan()));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => {
            let sentinel = datetime::format_pseudo_date(reason, &config.date_format)?;
            Ok(missing(reason, FieldValue::Text(sentinel)))
        }
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let value = datetime::interpret_date_value(raw, &config.date_format)?;
            Ok(Interpreted::Value(FieldValue::Text(value)))
        }
    }
}

fn interpret_datetime(raw: &str, config: &StudyConfig) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::nan()));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => {
            let sentinel = datetime::format_pseudo_date(reason, &config.datetime_format)?;
            Ok(missing(reason, FieldValue::Text(sentinel)))
        }
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let value = datetime::interpret_datetime_value(raw, &config.datetime_format)?;
            Ok(Interpreted::Value(FieldValue::Text(value)))
        }
    }
}

fn interpret_numberdate(raw: &str, config: &StudyConfig) -> Result<Interpreted> {
    if raw.is_empty() {
        return Ok(Interpreted::Value(FieldValue::NumberDate {
            number: f64::NAN,
            date: None,
        }));
    }
    match detect_user_missing(raw) {
        Some(MissingKind::Reason(reason)) => {
            let date = datetime::format_pseudo_date(reason, &config.date_format)?;
            Ok(missing(
                reason,
                FieldValue::NumberDate {
                    number: reason.sentinel_code() as f64,
                    date: Some(date),
                },
            ))
        }
        Some(MissingKind::Unrecognized) => Ok(Interpreted::Unrecognized),
        None => {
            let parts: Vec<&str> = raw.split(';').collect();
            let &[number, date] = &parts[..] else {
                return Err(CastorError::InvalidNumberDate(raw.to_string()));
            };
            let number = if number.is_empty() {
                f64::NAN
            } else {
                number
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| CastorError::InvalidNumber(number.to_string()))?
            };
            let date = if date.is_empty() {
                None
            } else {
                Some(datetime::interpret_numberdate_date(
                    date,
                    &config.date_format,
                )?)
            };
            Ok(Interpreted::Value(FieldValue::NumberDate { number, date }))
        }
    }
}

fn missing(reason: MissingReason, sentinel: FieldValue) -> Interpreted {
    Interpreted::Missing { reason, sentinel }
}
