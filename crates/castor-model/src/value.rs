//! Interpreted-value types.
//!
//! The interpreter never mixes real values and error markers in one
//! string slot: every outcome is tagged. The literal export-compatible
//! representations (`"Error"`, `"Missing value not recognized"`, sentinel
//! codes) are produced only at the serialization boundary.

use crate::grid::GridTable;
use crate::missing::MissingReason;

/// A typed, analysis-ready value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Floating-point value; NaN encodes an empty data point.
    Number(f64),
    /// Integer value (years, missing-sentinel codes).
    Int(i64),
    /// Text value; the empty string encodes an empty data point for
    /// option-group and time fields.
    Text(String),
    /// Paired number and formatted date from a numberdate field.
    /// `number` is NaN and `date` is `None` when the respective part is
    /// empty.
    NumberDate { number: f64, date: Option<String> },
    /// Reconstructed grid sub-table.
    Table(GridTable),
}

impl FieldValue {
    /// NaN number, the empty representation of numeric-like and
    /// date-like fields.
    pub fn nan() -> FieldValue {
        FieldValue::Number(f64::NAN)
    }

    pub fn text(value: impl Into<String>) -> FieldValue {
        FieldValue::Text(value.into())
    }

    /// True when this value represents an empty data point.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Number(n) => n.is_nan(),
            FieldValue::Int(_) => false,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::NumberDate { number, date } => number.is_nan() && date.is_none(),
            FieldValue::Table(_) => false,
        }
    }
}

/// Outcome of interpreting one raw export value.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpreted {
    /// A real (or empty) value parsed from the export.
    Value(FieldValue),
    /// A recognized user-missing answer, with the sentinel encoded for
    /// the field's type (code, label or pseudo-date).
    Missing {
        reason: MissingReason,
        sentinel: FieldValue,
    },
    /// The raw value carried the missing marker but no recognized reason.
    Unrecognized,
    /// Interpretation degraded in-band (grid reconstruction failure or an
    /// unknown field type).
    Failed,
}

impl Interpreted {
    /// The contained value for `Value`, `None` otherwise.
    pub fn as_value(&self) -> Option<&FieldValue> {
        match self {
            Interpreted::Value(value) => Some(value),
            _ => None,
        }
    }

    /// True for any missing outcome, recognized or not.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            Interpreted::Missing { .. } | Interpreted::Unrecognized
        )
    }
}
