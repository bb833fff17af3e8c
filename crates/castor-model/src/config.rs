//! Study-level interpretation configuration.

use serde::{Deserialize, Serialize};

/// Study-level formatting configuration plus the option-key leniency
/// flag. Format strings use strftime directives (`%d`, `%m`, `%Y`, `%H`,
/// `%M`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Output format for date and numberdate fields.
    pub date_format: String,
    /// Output format for time fields.
    pub time_format: String,
    /// Output format for datetime fields.
    pub datetime_format: String,
    /// When true, option keys missing from their option group pass
    /// through verbatim instead of failing the conversion.
    pub pass_key_errors: bool,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            date_format: "%d-%m-%Y".to_string(),
            time_format: "%H:%M".to_string(),
            datetime_format: "%d-%m-%Y %H:%M".to_string(),
            pass_key_errors: false,
        }
    }
}

impl StudyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = format.into();
        self
    }

    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    pub fn with_pass_key_errors(mut self, pass: bool) -> Self {
        self.pass_key_errors = pass;
        self
    }
}
