//! Coercion error type.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Broad category of a [`CoerceError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A string did not hold a valid number for the target type.
    Parse,
    /// The scalar kind can never be coerced into the target type.
    Type,
    /// The raw input was not a recognizable JSON scalar.
    Classify,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("invalid integer literal {input:?}: {source}")]
    ParseInt {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid float literal {input:?}: {source}")]
    ParseFloat {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("non-finite float literal {input:?}")]
    NonFinite { input: String },
    #[error("value is a bool")]
    IsBool,
    #[error("not a JSON scalar: {raw:?}")]
    Unclassified { raw: String },
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

impl CoerceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoerceError::ParseInt { .. }
            | CoerceError::ParseFloat { .. }
            | CoerceError::NonFinite { .. } => ErrorKind::Parse,
            CoerceError::IsBool => ErrorKind::Type,
            CoerceError::Unclassified { .. } | CoerceError::InvalidUtf8 => ErrorKind::Classify,
        }
    }
}
