use thiserror::Error;

/// A single field failed to parse or broke one of its rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("{field} cannot be blank")]
    Blank { field: String },

    #[error("{field} was not {kind}: '{value}'")]
    NotANumber {
        field: String,
        kind: &'static str,
        value: String,
    },

    #[error("{field} must have exactly {expected} digits, got {actual}")]
    WrongDigitCount {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("{field} must be exactly {expected} characters, got {actual}")]
    WrongLength {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("'{value}' is not a two letter abbreviation for a US state, commonwealth, or territory")]
    NotAState { value: String },

    #[error("street must be longer than 3 characters")]
    StreetTooShort,

    #[error("city must be longer than 1 character")]
    CityTooShort,

    #[error("zip code must be a 5 digit number, got {0}")]
    InvalidZip(u32),

    #[error("zip+4 must be a 4 digit number, got {0}")]
    InvalidZipPlus4(u32),

    #[error("phone number must be non-zero with at most 10 digits, got {0}")]
    InvalidPhone(u64),

    #[error("existing person has no person ID")]
    UnassignedId,

    #[error("record must have 6 comma separated fields, got {0}")]
    WrongFieldCount(usize),
}

impl FieldError {
    pub fn blank(field: &str) -> Self {
        FieldError::Blank {
            field: field.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error(transparent)]
    Invalid(#[from] FieldError),

    #[error("cancelled by the user")]
    Cancelled,

    #[error("the user declined to confirm")]
    Declined,

    #[error("person not found: {id}")]
    NotFound { id: String },

    #[error("no person IDs left to assign")]
    IdsExhausted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhonebookResult<T> = Result<T, PhonebookError>;

/// Errors raised while loading runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
