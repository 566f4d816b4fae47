use serde::Serialize;
use thiserror::Error;

pub const INVALID_YEAR_MESSAGE: &str =
    "The year must be a 4-digit number and may not be greater than the current year.";
pub const INVALID_MONTH_OR_DAY_MESSAGE: &str = "The month and day must be whole numbers.";
pub const INVALID_DATE_MESSAGE: &str = "The month and day do not form a valid calendar date.";
pub const MALFORMED_COMBINED_MESSAGE: &str =
    "Dates must be in the format: YYYY-MM-DD, YYYY-MM-DD, YYYY-MM-DD";

#[derive(Error, Debug)]
pub enum TimelessError {
    #[error("{}", INVALID_YEAR_MESSAGE)]
    InvalidYear { value: String },

    #[error("{}", INVALID_MONTH_OR_DAY_MESSAGE)]
    InvalidMonthOrDay { value: String },

    #[error("{}", INVALID_DATE_MESSAGE)]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("{}", MALFORMED_COMBINED_MESSAGE)]
    MalformedCombinedList { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

/// Stable reason code for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidYear,
    InvalidMonthOrDay,
    InvalidDate,
    MalformedCombinedList,
    Io,
    CatalogParse,
}

impl TimelessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TimelessError::InvalidYear { .. } => ErrorKind::InvalidYear,
            TimelessError::InvalidMonthOrDay { .. } => ErrorKind::InvalidMonthOrDay,
            TimelessError::InvalidDate { .. } => ErrorKind::InvalidDate,
            TimelessError::MalformedCombinedList { .. } => ErrorKind::MalformedCombinedList,
            TimelessError::Io(_) => ErrorKind::Io,
            TimelessError::CatalogParse(_) => ErrorKind::CatalogParse,
        }
    }

    /// The English source string used as the translation key, if this is a
    /// validation failure a reader is meant to see.
    pub fn source_message(&self) -> Option<&'static str> {
        match self {
            TimelessError::InvalidYear { .. } => Some(INVALID_YEAR_MESSAGE),
            TimelessError::InvalidMonthOrDay { .. } => Some(INVALID_MONTH_OR_DAY_MESSAGE),
            TimelessError::InvalidDate { .. } => Some(INVALID_DATE_MESSAGE),
            TimelessError::MalformedCombinedList { .. } => Some(MALFORMED_COMBINED_MESSAGE),
            TimelessError::Io(_) | TimelessError::CatalogParse(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        self.source_message().is_some()
    }
}

pub type Result<T> = std::result::Result<T, TimelessError>;
