//! Fuzzy — plain holders that collapse `null` to the zero value.

use std::fmt;
use std::ops::Deref;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::codec::JsonScalar;
use crate::coerce::Coerce;
use crate::scalar::Scalar;

/// A field of type `T` that accepts any JSON scalar.
///
/// `null` and absent fields decode to `T::default()`. Strings, numbers and
/// booleans are coerced per [`Coerce`]; the only failures are unparseable
/// numeric strings and booleans fed to numeric types.
///
/// ```
/// use fuzzy_json::FuzzyInt;
///
/// let n: FuzzyInt = serde_json::from_str("\"42\"").unwrap();
/// assert_eq!(*n, 42);
/// assert_eq!(serde_json::to_string(&n).unwrap(), "42");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fuzzy<T>(pub T);

pub type FuzzyString = Fuzzy<String>;
pub type FuzzyInt = Fuzzy<i64>;
pub type FuzzyFloat = Fuzzy<f64>;
pub type FuzzyBool = Fuzzy<bool>;

impl<T> Fuzzy<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Coerce> Fuzzy<T> {
    /// Whether the held value is the zero value.
    ///
    /// Usable as `#[serde(skip_serializing_if = "Fuzzy::is_zero")]`.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T> Deref for Fuzzy<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Fuzzy<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl From<&str> for Fuzzy<String> {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl<T: fmt::Display> fmt::Display for Fuzzy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Coerce> Serialize for Fuzzy<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_scalar().serialize(serializer)
    }
}

impl<'de, T: Coerce> Deserialize<'de> for Fuzzy<T> {
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
    fn decodes_from_any_scalar() {
        let s: FuzzyString = serde_json::from_value(json!(123)).unwrap();
        assert_eq!(s.get(), "123");
        let i: FuzzyInt = serde_json::from_value(json!("-5")).unwrap();
        assert_eq!(i.into_inner(), -5);
        let f: FuzzyFloat = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(*f, 2.0);
        let b: FuzzyBool = serde_json::from_value(json!("yes")).unwrap();
        assert!(*b);
    }

    #[test]
    fn bare_null_is_zero() {
        let i: FuzzyInt = serde_json::from_str("null").unwrap();
        assert_eq!(i, Fuzzy(0));
        assert!(i.is_zero());
    }

    #[test]
    fn bool_into_int_is_rejected() {
        let err = serde_json::from_str::<FuzzyInt>("true").unwrap_err();
        assert!(err.to_string().starts_with("value is a bool"));
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(FuzzyString::from("foo"), Fuzzy("foo".to_owned()));
        assert_eq!(FuzzyInt::from(7), Fuzzy::new(7));
        assert_eq!(Fuzzy(1.5).to_string(), "1.5");
        assert_eq!(Fuzzy(true).to_string(), "true");
    }
}
