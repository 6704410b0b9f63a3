use thiserror::Error;

/// Represents errors that can occur during TSID operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TsidError {
    /// Raw integer cannot back a TSID (negative, or above `i64::MAX`)
    #[error("TSID value {value} is invalid. Value must be between 0 and {max}", max = i64::MAX)]
    InvalidValue { value: i128 },

    /// Text is not exactly 13 characters after trimming
    #[error("TSID text must be 13 characters long, got {length}")]
    InvalidLength { length: usize },

    /// Text contains a character outside the Crockford alphabet
    #[error("Invalid symbol {symbol:?} at position {index}")]
    InvalidSymbol { symbol: char, index: usize },

    /// Configuration value outside its allowed range
    #[error("{field} value {value} is out of range. Must be between 0 and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    /// Clock reading does not fit the 41-bit timestamp field
    #[error("Clock value {timestamp} cannot be represented in the TSID timestamp space")]
    ClockOverflow { timestamp: i64 },

    /// Required configuration argument was not supplied
    #[error("Configuration is missing required {field}")]
    NullConfiguration { field: &'static str },

    /// Environment variable is present but not an integer
    #[error("Environment variable {key} has invalid value {value:?}")]
    InvalidEnvironment { key: &'static str, value: String },
}

/// Result alias used across the crate
pub type Result<T, E = TsidError> = std::result::Result<T, E>;
