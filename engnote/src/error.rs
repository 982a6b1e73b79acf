//! Error types for table construction and the parse/format pipelines.

/// Failure of a single parse, format or unit-mapping call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecError {
    #[error("Can't parse an empty string")]
    EmptyInput,
    #[error("More than one SI suffix in '{0}'")]
    AmbiguousSuffix(String),
    #[error("Suffix used as decimal separator, but a dot is also present: '{0}'")]
    ConflictingSeparator(String),
    #[error("Suffix in '{0}' must not be the first character")]
    LeadingSuffix(String),
    #[error("Remainder of string is not purely numeric: '{0}'")]
    InvalidNumericRemainder(String),
    #[error("Value out of range: {0}")]
    OutOfRange(f64),
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Malformed suffix/unit tables. Raised while building a [`crate::Codec`],
/// never by parse or format.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Expected {expected} suffix buckets, found {found}")]
    BucketCount { expected: usize, found: usize },
    #[error("Suffix exponent {found} at position {index} breaks the sequence (expected {expected})")]
    ExponentSequence {
        index: usize,
        expected: i32,
        found: i32,
    },
    #[error("Alias group for exponent {0} is empty")]
    EmptyGroup(i32),
    #[error("Invalid suffix alias '{alias}' for exponent {exponent}")]
    InvalidAlias { alias: String, exponent: i32 },
    #[error("Alias '{0}' is defined more than once")]
    DuplicateAlias(String),
    #[error("Invalid unit symbol '{0}' (must be 1 to 3 characters)")]
    InvalidUnitSymbol(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
}
