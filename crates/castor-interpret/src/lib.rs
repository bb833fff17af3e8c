//! Interpretation of raw Castor EDC export values.
//!
//! This crate turns raw field values into analysis-ready typed data:
//!
//! - **interpret**: the pure dispatch from field type + raw string to a
//!   tagged [`castor_model::Interpreted`] outcome
//! - **datetime**: vendor-format parsing and strftime output formatting
//! - **optiongroup**: option-key to display-name resolution
//! - **grid**: 2-D sub-table reconstruction with recursive cell
//!   interpretation
//! - **wire**: export-compatible JSON rendering of outcomes
//! - **data_point**: thin per-record adapter caching one interpretation

pub mod data_point;
pub mod datetime;
mod grid;
pub mod interpret;
pub mod optiongroup;
pub mod wire;

pub use data_point::DataPoint;
pub use interpret::interpret;
pub use wire::{ERROR_MARKER, NOT_RECOGNIZED};
