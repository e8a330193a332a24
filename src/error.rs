//! Error types for Thai time conversion

/// Custom error type for Thai time conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThaiTimeError {
    #[error("Time input cannot be empty")]
    EmptyInput,
    #[error("Time string '{0}' does not match H:M or H:M:S format")]
    MalformedTimeString(String),
    #[error("{hour}:{minute}:{second} is not a valid wall-clock time")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("Unsupported clock convention '{0}' (expected 24h, 6h, or m6h)")]
    UnsupportedConvention(String),
    #[error("Unsupported precision '{0}' (expected auto, m, or s)")]
    UnsupportedPrecision(String),
    #[error("No time marker found in phrase '{0}'")]
    UnrecognizedPhrase(String),
    #[error("Hour clause '{0}' matches no known spoken-time pattern")]
    UnrecognizedHourPattern(String),
    #[error("'{0}' is not a known Thai time word")]
    UnknownToken(String),
}
