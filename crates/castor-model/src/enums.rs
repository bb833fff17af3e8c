//! Type-safe enumeration of Castor EDC field types.
//!
//! The export API reports field types as lowercase strings. This enum
//! covers every type the interpreter distinguishes; tags it does not know
//! map to [`FieldType::Unknown`] so that interpretation can degrade to the
//! in-band error marker instead of refusing the whole export.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field type tag as reported by the Castor EDC API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum FieldType {
    /// Multi-select option group; raw values carry `;`-separated keys.
    Checkbox,
    /// Single-select option group rendered as a dropdown.
    Dropdown,
    /// Single-select option group rendered as radio buttons.
    Radio,
    /// Free numeric entry.
    Numeric,
    /// Numeric entry via a slider widget.
    Slider,
    /// Randomization allocation, numeric on the wire.
    Randomization,
    /// Four-digit year.
    Year,
    /// Single-line free text.
    String,
    /// Multi-line free text.
    Textarea,
    /// File upload; the raw value is the stored path.
    Upload,
    /// Server-side calculated value, exported as text.
    Calculation,
    /// Combined date and time, exported as `dd-mm-YYYY;HH:MM`.
    Datetime,
    /// Date, exported as `dd-mm-YYYY`.
    Date,
    /// Time of day, exported as `HH:MM`.
    Time,
    /// Paired number and date, exported as `<number>;<dd-mm-YYYY>`.
    Numberdate,
    /// 2-D sub-table; the raw value is a JSON payload.
    Grid,
    /// Any tag this crate does not recognize.
    Unknown,
}

impl FieldType {
    /// Parse an export tag. Total: unrecognized tags become `Unknown`.
    pub fn parse(tag: &str) -> FieldType {
        match tag.trim().to_ascii_lowercase().as_str() {
            "checkbox" => FieldType::Checkbox,
            "dropdown" => FieldType::Dropdown,
            "radio" => FieldType::Radio,
            "numeric" => FieldType::Numeric,
            "slider" => FieldType::Slider,
            "randomization" => FieldType::Randomization,
            "year" => FieldType::Year,
            "string" => FieldType::String,
            "textarea" => FieldType::Textarea,
            "upload" => FieldType::Upload,
            "calculation" => FieldType::Calculation,
            "datetime" => FieldType::Datetime,
            "date" => FieldType::Date,
            "time" => FieldType::Time,
            "numberdate" => FieldType::Numberdate,
            "grid" => FieldType::Grid,
            _ => FieldType::Unknown,
        }
    }

    /// Returns the tag as it appears in the export.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Checkbox => "checkbox",
            FieldType::Dropdown => "dropdown",
            FieldType::Radio => "radio",
            FieldType::Numeric => "numeric",
            FieldType::Slider => "slider",
            FieldType::Randomization => "randomization",
            FieldType::Year => "year",
            FieldType::String => "string",
            FieldType::Textarea => "textarea",
            FieldType::Upload => "upload",
            FieldType::Calculation => "calculation",
            FieldType::Datetime => "datetime",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::Numberdate => "numberdate",
            FieldType::Grid => "grid",
            FieldType::Unknown => "unknown",
        }
    }

    /// Returns true for option-group types (checkbox, dropdown, radio).
    pub fn is_option_group(&self) -> bool {
        matches!(
            self,
            FieldType::Checkbox | FieldType::Dropdown | FieldType::Radio
        )
    }

    /// Returns true for types interpreted as floating-point numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldType::Numeric | FieldType::Slider | FieldType::Randomization
        )
    }

    /// Returns true for types whose raw value passes through unchanged.
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FieldType::String | FieldType::Textarea | FieldType::Upload | FieldType::Calculation
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
