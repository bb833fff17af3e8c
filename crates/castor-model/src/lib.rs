//! Data model for Castor EDC exports.
//!
//! This crate defines the types the value interpreter operates on: field
//! type tags, the user-missing taxonomy, option groups, field
//! descriptors, grid templates, study-level configuration, and the
//! tagged interpreted-value result.

pub mod config;
pub mod enums;
pub mod error;
pub mod field;
pub mod grid;
pub mod lookup;
pub mod missing;
pub mod optiongroup;
pub mod value;

pub use config::StudyConfig;
pub use enums::FieldType;
pub use error::{CastorError, Result};
pub use field::FieldDescriptor;
pub use grid::{GridTable, GridTemplate};
pub use lookup::{FieldResolver, OptionGroupResolver, StudyLookup};
pub use missing::{detect_user_missing, MissingKind, MissingReason, MISSING_MARKER};
pub use optiongroup::{OptionGroup, OptionItem};
pub use value::{FieldValue, Interpreted};
