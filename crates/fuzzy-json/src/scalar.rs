//! Scalar — one classified JSON scalar.
//!
//! Every holder in this crate decodes through [`Scalar`]: raw JSON text is
//! classified by [`Scalar::classify`], and serde input is classified by the
//! [`Deserialize`] impl below. Both paths produce the same five kinds, so a
//! holder behaves identically whichever way it is fed.

use std::fmt;

use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value as JsonValue;

use crate::error::CoerceError;
use crate::log;

/// A JSON value that is not an array or object.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Str(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// The kind of a [`Scalar`], without its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    Null,
    String,
    Integer,
    Float,
    Bool,
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Null => ScalarKind::Null,
            Scalar::Str(_) => ScalarKind::String,
            Scalar::Integer(_) => ScalarKind::Integer,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Bool(_) => ScalarKind::Bool,
        }
    }

    /// Classify the raw text of one JSON value.
    ///
    /// Attempts, in order: the `null` literal, a JSON string, an `i64`, an
    /// `f64`, a boolean. The first that parses wins, so `"123"` is a string
    /// and `123` is an integer. Integers outside the `i64` range, and any
    /// number written with a fraction or exponent, are floats.
    pub fn classify(raw: &str) -> Result<Self, CoerceError> {
        let scalar = classify_text(raw)?;
        log::trace!(kind = ?scalar.kind(), "classified raw JSON scalar");
        Ok(scalar)
    }

    /// Render this scalar as JSON text.
    ///
    /// Floats use the shortest decimal form that round-trips, never an
    /// exponent. Non-finite floats have no JSON form and render as `null`.
    pub fn to_json(&self) -> String {
        match self {
            Scalar::Null => "null".to_owned(),
            Scalar::Str(s) => JsonValue::from(s.as_str()).to_string(),
            Scalar::Integer(i) => i.to_string(),
            Scalar::Float(f) if f.is_finite() => f.to_string(),
            Scalar::Float(_) => "null".to_owned(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn classify_text(raw: &str) -> Result<Scalar, CoerceError> {
    if raw.trim_matches(is_json_whitespace) == "null" {
        return Ok(Scalar::Null);
    }
    if let Ok(s) = serde_json::from_str::<String>(raw) {
        return Ok(Scalar::Str(s));
    }
    if let Ok(i) = serde_json::from_str::<i64>(raw) {
        return Ok(Scalar::Integer(i));
    }
    if let Ok(f) = serde_json::from_str::<f64>(raw) {
        return Ok(Scalar::Float(f));
    }
    if let Ok(b) = serde_json::from_str::<bool>(raw) {
        return Ok(Scalar::Bool(b));
    }
    Err(CoerceError::Unclassified {
        raw: raw.to_owned(),
    })
}

fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Going through the optional path lets serde's missing-field handling
        // hand us `visit_none`, so absent fields need no `#[serde(default)]`.
        deserializer.deserialize_option(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON scalar")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(Scalar::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Scalar::Integer(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        match i64::try_from(value) {
            Ok(i) => Ok(Scalar::Integer(i)),
            Err(_) => Ok(Scalar::Float(value as f64)),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Scalar::Float(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Scalar::Str(value.to_owned()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(Scalar::Str(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Scalar::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Scalar::Null => serializer.serialize_none(),
            Scalar::Str(s) => serializer.serialize_str(s),
            Scalar::Integer(i) => serializer.serialize_i64(*i),
            // Hand over the exact text of `to_json` so both encoders agree;
            // float writers pick exponent form and drop the sign of `-0`.
            Scalar::Float(_) => {
                let raw = RawValue::from_string(self.to_json()).map_err(ser::Error::custom)?;
                raw.serialize(serializer)
            }
            Scalar::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_priority_matrix() {
        let cases = vec![
            ("null", Scalar::Null),
            (" null\n", Scalar::Null),
            ("\"123\"", Scalar::Str("123".to_owned())),
            ("\"null\"", Scalar::Str("null".to_owned())),
            ("\"true\"", Scalar::Str("true".to_owned())),
            ("\"a\\\"b\"", Scalar::Str("a\"b".to_owned())),
            ("123", Scalar::Integer(123)),
            ("-123", Scalar::Integer(-123)),
            ("0", Scalar::Integer(0)),
            ("123.0", Scalar::Float(123.0)),
            ("-123.456", Scalar::Float(-123.456)),
            ("1e3", Scalar::Float(1000.0)),
            ("18446744073709551615", Scalar::Float(18_446_744_073_709_551_615.0)),
            ("true", Scalar::Bool(true)),
            ("false", Scalar::Bool(false)),
        ];
        for (raw, expected) in cases {
            assert_eq!(Scalar::classify(raw).unwrap(), expected, "raw: {raw}");
        }
    }

    #[test]
    fn classify_rejects_non_scalars() {
        for raw in ["", "[1]", "{\"a\":1}", "abc", "'x'", "NaN", "tru"] {
            let err = Scalar::classify(raw).unwrap_err();
            assert_eq!(
                err,
                CoerceError::Unclassified {
                    raw: raw.to_owned()
                }
            );
        }
    }

    #[test]
    fn serde_bridge_matches_classifier() {
        let cases = vec![
            (json!(null), "null"),
            (json!("123"), "\"123\""),
            (json!(123), "123"),
            (json!(-123), "-123"),
            (json!(123.456), "123.456"),
            (json!(u64::MAX), "18446744073709551615"),
            (json!(true), "true"),
        ];
        for (value, raw) in cases {
            let from_value: Scalar = serde_json::from_value(value).unwrap();
            let from_str: Scalar = serde_json::from_str(raw).unwrap();
            let classified = Scalar::classify(raw).unwrap();
            assert_eq!(from_value, classified, "raw: {raw}");
            assert_eq!(from_str, classified, "raw: {raw}");
        }
    }

    #[test]
    fn serde_bridge_rejects_containers() {
        let err = serde_json::from_str::<Scalar>("[1, 2]").unwrap_err();
        assert!(err.to_string().contains("a JSON scalar"));
        let err = serde_json::from_value::<Scalar>(json!({"a": 1})).unwrap_err();
        assert!(err.to_string().contains("a JSON scalar"));
    }

    #[test]
    fn to_json_rendering() {
        assert_eq!(Scalar::Null.to_json(), "null");
        assert_eq!(Scalar::Str("a\"b\n".to_owned()).to_json(), "\"a\\\"b\\n\"");
        assert_eq!(Scalar::Integer(-42).to_json(), "-42");
        assert_eq!(Scalar::Float(0.0).to_json(), "0");
        assert_eq!(Scalar::Float(1.618).to_json(), "1.618");
        assert_eq!(Scalar::Float(1e21).to_json(), "1000000000000000000000");
        assert_eq!(Scalar::Float(f64::NAN).to_json(), "null");
        assert_eq!(Scalar::Float(f64::INFINITY).to_json(), "null");
        assert_eq!(Scalar::Bool(false).to_json(), "false");
    }

    #[test]
    fn serialize_floats_without_exponent() {
        assert_eq!(serde_json::to_string(&Scalar::Float(0.0)).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Scalar::Float(-7.0)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&Scalar::Float(1.618)).unwrap(), "1.618");
        assert_eq!(serde_json::to_string(&Scalar::Float(1e-7)).unwrap(), "0.0000001");
        assert_eq!(
            serde_json::to_string(&Scalar::Float(1e16)).unwrap(),
            "10000000000000000"
        );
        assert_eq!(serde_json::to_string(&Scalar::Float(f64::NAN)).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Scalar::Null).unwrap(), "null");
    }

    #[test]
    fn serialize_matches_to_json_for_floats() {
        for f in [0.0, -0.0, 1e-7, 1e16, 1e20, -123.456, f64::INFINITY] {
            let scalar = Scalar::Float(f);
            assert_eq!(serde_json::to_string(&scalar).unwrap(), scalar.to_json(), "f: {f}");
        }
        let value = serde_json::to_value(Scalar::Float(1e20)).unwrap();
        assert_eq!(value, serde_json::json!(1e20));
    }
}
