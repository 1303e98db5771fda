//! Nullable — holders that keep `null` distinct from the zero value.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::codec::JsonScalar;
use crate::coerce::Coerce;
use crate::scalar::Scalar;

/// A field of type `T` that accepts any JSON scalar and remembers `null`.
///
/// Decoding `null`, or a field that is absent, yields a null holder. Every
/// other scalar is coerced as for [`Fuzzy`](crate::Fuzzy) and yields a valid
/// holder; coercion errors propagate rather than falling back to null.
///
/// A null holder always stores `T::default()`, so all null holders of one
/// type compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    value: T,
    valid: bool,
}

pub type NullString = Nullable<String>;
pub type NullInt = Nullable<i64>;
pub type NullFloat = Nullable<f64>;
pub type NullBool = Nullable<bool>;

impl<T: Default> Nullable<T> {
    pub fn null() -> Self {
        Self {
            value: T::default(),
            valid: false,
        }
    }
}

impl<T> Nullable<T> {
    pub fn from_value(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Usable as `#[serde(skip_serializing_if = "Nullable::is_null")]`.
    pub fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        if self.valid {
            Some(self.value)
        } else {
            None
        }
    }

    /// The held value, or the zero value when null.
    pub fn value_or_zero(&self) -> &T {
        &self.value
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::null(),
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.value.fmt(f)
        } else {
            f.write_str("null")
        }
    }
}

impl<T: Coerce> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_scalar().serialize(serializer)
    }
}

impl<'de, T: Coerce> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let scalar = Scalar::deserialize(deserializer)?;
        Self::from_scalar(scalar).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_null() {
        let n = NullInt::default();
        assert!(n.is_null());
        assert_eq!(n, NullInt::null());
        assert_eq!(n.as_option(), None);
        assert_eq!(*n.value_or_zero(), 0);
    }

    #[test]
    fn option_conversions() {
        assert_eq!(NullBool::from(Some(false)), NullBool::from_value(false));
        assert_eq!(NullBool::from(None), NullBool::null());
        assert_eq!(Option::<f64>::from(NullFloat::from(1.5)), Some(1.5));
        assert_eq!(NullString::null().into_option(), None);
    }

    #[test]
    fn zero_and_null_stay_distinct() {
        let zero: NullInt = serde_json::from_value(json!(0)).unwrap();
        let null: NullInt = serde_json::from_value(json!(null)).unwrap();
        assert!(zero.is_valid());
        assert!(null.is_null());
        assert_ne!(zero, null);
        assert_eq!(zero.value_or_zero(), null.value_or_zero());
    }

    #[test]
    fn parse_failure_is_not_null() {
        let err = serde_json::from_value::<NullFloat>(json!("abc")).unwrap_err();
        assert!(err.to_string().starts_with("invalid float literal \"abc\""));
    }

    #[test]
    fn display() {
        assert_eq!(NullInt::from(-3).to_string(), "-3");
        assert_eq!(NullInt::null().to_string(), "null");
    }
}
