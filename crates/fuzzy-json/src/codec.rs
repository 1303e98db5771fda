//! Raw-text decode/encode for holders.
//!
//! For callers that have already isolated one JSON value's text (a tokenizer,
//! a column in a JSON-lines file) and want the holder without going through a
//! serde data model.

use crate::coerce::Coerce;
use crate::error::CoerceError;
use crate::fuzzy::Fuzzy;
use crate::nullable::Nullable;
use crate::scalar::Scalar;

/// A holder that can be decoded from, and encoded to, the text of one JSON
/// scalar.
pub trait JsonScalar: Sized {
    fn from_scalar(scalar: Scalar) -> Result<Self, CoerceError>;

    fn to_scalar(&self) -> Scalar;

    /// Decode the raw text of one JSON value.
    fn decode(raw: &str) -> Result<Self, CoerceError> {
        Self::from_scalar(Scalar::classify(raw)?)
    }

    fn decode_bytes(raw: &[u8]) -> Result<Self, CoerceError> {
        let raw = std::str::from_utf8(raw).map_err(|_| CoerceError::InvalidUtf8)?;
        Self::decode(raw)
    }

    fn encode(&self) -> String {
        self.to_scalar().to_json()
    }
}

impl<T: Coerce> JsonScalar for Fuzzy<T> {
    fn from_scalar(scalar: Scalar) -> Result<Self, CoerceError> {
        T::coerce(scalar).map(Fuzzy)
    }

    fn to_scalar(&self) -> Scalar {
        self.0.to_scalar()
    }
}

impl<T: Coerce> JsonScalar for Nullable<T> {
    fn from_scalar(scalar: Scalar) -> Result<Self, CoerceError> {
        match scalar {
            Scalar::Null => Ok(Nullable::null()),
            other => T::coerce(other).map(Nullable::from_value),
        }
    }

    fn to_scalar(&self) -> Scalar {
        match self.as_option() {
            Some(value) => value.to_scalar(),
            None => Scalar::Null,
        }
    }
}

/// Decode the raw text of one JSON value into any holder.
pub fn decode<T: JsonScalar>(raw: &str) -> Result<T, CoerceError> {
    T::decode(raw)
}

/// Encode any holder as JSON text.
pub fn encode<T: JsonScalar>(holder: &T) -> String {
    holder.encode()
}
