use thiserror::Error;

/// Hard failures raised while interpreting export data.
///
/// Soft failures (unrecognized missing markers, grid reconstruction
/// problems) are returned in-band as [`crate::Interpreted`] variants and
/// never surface here.
#[derive(Debug, Error)]
pub enum CastorError {
    #[error("field `{0}` does not exist in the study")]
    FieldNotFound(String),

    #[error("option group `{group_id}` not found; is the id correct and are option groups loaded?")]
    OptionGroupNotFound { group_id: String },

    #[error(
        "option value mapping failed for option group `{group_id}`: \
         key `{key}` is not an option value of field {field_id} ({field_name})"
    )]
    OptionKeyNotFound {
        group_id: String,
        field_id: String,
        field_name: String,
        key: String,
    },

    #[error("invalid numeric value `{0}`")]
    InvalidNumber(String),

    #[error("invalid year value `{0}`")]
    InvalidYear(String),

    #[error("invalid time value `{0}`: expected HH:MM")]
    InvalidTime(String),

    #[error("invalid date value `{0}`: expected dd-mm-YYYY or dd-mm-YYYY;HH:MM")]
    InvalidDate(String),

    #[error("invalid numberdate value `{0}`: expected `<number>;<dd-mm-YYYY>`")]
    InvalidNumberDate(String),

    #[error("date format string `{0}` is not a valid strftime format")]
    InvalidFormat(String),

    #[error("invalid filled-in timestamp `{0}`: expected YYYY-mm-dd HH:MM:SS")]
    InvalidFilledIn(String),
}

pub type Result<T> = std::result::Result<T, CastorError>;
