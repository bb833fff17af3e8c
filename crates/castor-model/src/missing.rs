//! User-missing sentinel taxonomy.
//!
//! Castor records "user missing" answers by embedding a marker such as
//! `"Missing (not done)"` in the raw export value. Each reason maps to a
//! fixed sentinel: a negative code for numeric-like fields, a canonical
//! label for option groups, and a pseudo-date in the years 2995-2999 for
//! date-like fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker token whose presence flags a raw value as user missing.
pub const MISSING_MARKER: &str = "Missing";

/// Why a data point was recorded as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    MeasurementFailed,
    NotApplicable,
    NotAsked,
    AskedButUnknown,
    NotDone,
}

/// Reason markers in detection priority order. The first marker found in
/// the raw value wins, regardless of any later markers also present.
pub const MARKERS: [(&str, MissingReason); 5] = [
    ("measurement failed", MissingReason::MeasurementFailed),
    ("not applicable", MissingReason::NotApplicable),
    ("not asked", MissingReason::NotAsked),
    ("asked but unknown", MissingReason::AskedButUnknown),
    ("not done", MissingReason::NotDone),
];

/// Outcome of scanning a raw value for the user-missing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKind {
    /// The marker and one of the five known reasons were present.
    Reason(MissingReason),
    /// The marker was present but no known reason matched.
    Unrecognized,
}

/// Scans a raw export value for the user-missing marker.
///
/// Returns `None` when the value carries no marker and should be parsed
/// as a real value.
pub fn detect_user_missing(raw: &str) -> Option<MissingKind> {
    if !raw.contains(MISSING_MARKER) {
        return None;
    }
    for (marker, reason) in MARKERS {
        if raw.contains(marker) {
            return Some(MissingKind::Reason(reason));
        }
    }
    Some(MissingKind::Unrecognized)
}

impl MissingReason {
    /// Sentinel code used for numeric and year fields.
    pub fn sentinel_code(&self) -> i64 {
        match self {
            MissingReason::MeasurementFailed => -95,
            MissingReason::NotApplicable => -96,
            MissingReason::NotAsked => -97,
            MissingReason::AskedButUnknown => -98,
            MissingReason::NotDone => -99,
        }
    }

    /// Canonical label used for option-group fields.
    pub fn label(&self) -> &'static str {
        match self {
            MissingReason::MeasurementFailed => "measurement failed",
            MissingReason::NotApplicable => "not applicable",
            MissingReason::NotAsked => "not asked",
            MissingReason::AskedButUnknown => "asked but unknown",
            MissingReason::NotDone => "not done",
        }
    }

    /// Year of the pseudo-date sentinel (January 1st of this year) used
    /// for date, datetime and numberdate fields.
    pub fn pseudo_year(&self) -> i32 {
        match self {
            MissingReason::MeasurementFailed => 2995,
            MissingReason::NotApplicable => 2996,
            MissingReason::NotAsked => 2997,
            MissingReason::AskedButUnknown => 2998,
            MissingReason::NotDone => 2999,
        }
    }
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_marker_means_real_value() {
        assert_eq!(detect_user_missing("3.14"), None);
        assert_eq!(detect_user_missing(""), None);
        // reason text alone does not count without the marker token
        assert_eq!(detect_user_missing("not done"), None);
    }

    #[test]
    fn test_each_reason_detected() {
        for (marker, reason) in MARKERS {
            let raw = format!("Missing ({marker})");
            assert_eq!(detect_user_missing(&raw), Some(MissingKind::Reason(reason)));
        }
    }

    #[test]
    fn test_priority_order_when_multiple_markers_present() {
        // "not asked" appears first in the string but "not applicable"
        // wins because it comes earlier in the priority list.
        let raw = "Missing: not asked, not applicable";
        assert_eq!(
            detect_user_missing(raw),
            Some(MissingKind::Reason(MissingReason::NotApplicable))
        );
    }

    #[test]
    fn test_marker_without_reason_is_unrecognized() {
        assert_eq!(
            detect_user_missing("Missing (no reason given)"),
            Some(MissingKind::Unrecognized)
        );
    }

    #[test]
    fn test_sentinel_mappings() {
        assert_eq!(MissingReason::MeasurementFailed.sentinel_code(), -95);
        assert_eq!(MissingReason::NotDone.sentinel_code(), -99);
        assert_eq!(MissingReason::MeasurementFailed.pseudo_year(), 2995);
        assert_eq!(MissingReason::NotDone.pseudo_year(), 2999);
        assert_eq!(MissingReason::AskedButUnknown.label(), "asked but unknown");
    }
}
