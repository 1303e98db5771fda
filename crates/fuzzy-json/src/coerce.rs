//! Coerce — the per-type branch table shared by every holder.
//!
//! A target type supplies one conversion per non-null [`Scalar`] kind plus
//! its encoded form; [`Coerce::coerce`] does the dispatch. `null` always maps
//! to the type's zero value (`Default`); nullable holders intercept it first.

use crate::error::CoerceError;
use crate::scalar::Scalar;

pub trait Coerce: Sized + Default {
    /// Short name of the target type, used in log events.
    const NAME: &'static str;

    fn from_text(s: String) -> Result<Self, CoerceError>;

    fn from_integer(i: i64) -> Result<Self, CoerceError>;

    fn from_float(f: f64) -> Result<Self, CoerceError>;

    fn from_boolean(b: bool) -> Result<Self, CoerceError>;

    /// The scalar this value encodes to.
    fn to_scalar(&self) -> Scalar;

    /// Whether this is the type's zero value.
    fn is_zero(&self) -> bool;

    fn coerce(scalar: Scalar) -> Result<Self, CoerceError> {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let kind = scalar.kind();
        let result = match scalar {
            Scalar::Null => Ok(Self::default()),
            Scalar::Str(s) => Self::from_text(s),
            Scalar::Integer(i) => Self::from_integer(i),
            Scalar::Float(f) => Self::from_float(f),
            Scalar::Bool(b) => Self::from_boolean(b),
        };
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            crate::log::debug!(
                target_type = Self::NAME,
                input = ?kind,
                error = %err,
                "coercion failed"
            );
        }
        result
    }
}

impl Coerce for String {
    const NAME: &'static str = "string";

    fn from_text(s: String) -> Result<Self, CoerceError> {
        Ok(s)
    }

    fn from_integer(i: i64) -> Result<Self, CoerceError> {
        Ok(i.to_string())
    }

    fn from_float(f: f64) -> Result<Self, CoerceError> {
        Ok(f.to_string())
    }

    fn from_boolean(b: bool) -> Result<Self, CoerceError> {
        Ok(b.to_string())
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Str(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Coerce for i64 {
    const NAME: &'static str = "int";

    fn from_text(s: String) -> Result<Self, CoerceError> {
        match s.parse::<i64>() {
            Ok(i) => Ok(i),
            Err(source) => Err(CoerceError::ParseInt { input: s, source }),
        }
    }

    fn from_integer(i: i64) -> Result<Self, CoerceError> {
        Ok(i)
    }

    /// Truncates toward zero; out-of-range values saturate.
    fn from_float(f: f64) -> Result<Self, CoerceError> {
        Ok(f.trunc() as i64)
    }

    fn from_boolean(_: bool) -> Result<Self, CoerceError> {
        Err(CoerceError::IsBool)
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Integer(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl Coerce for f64 {
    const NAME: &'static str = "float";

    fn from_text(s: String) -> Result<Self, CoerceError> {
        // `inf`, `nan` and overflowing literals parse, but have no JSON form.
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            Ok(_) => Err(CoerceError::NonFinite { input: s }),
            Err(source) => Err(CoerceError::ParseFloat { input: s, source }),
        }
    }

    fn from_integer(i: i64) -> Result<Self, CoerceError> {
        Ok(i as f64)
    }

    fn from_float(f: f64) -> Result<Self, CoerceError> {
        Ok(f)
    }

    fn from_boolean(_: bool) -> Result<Self, CoerceError> {
        Err(CoerceError::IsBool)
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Float(*self)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Coerce for bool {
    const NAME: &'static str = "bool";

    /// Only `""`, `"0"` and `"false"` (trimmed, any case) are false.
    fn from_text(s: String) -> Result<Self, CoerceError> {
        let folded = s.trim().to_lowercase();
        Ok(!matches!(folded.as_str(), "" | "0" | "false"))
    }

    fn from_integer(i: i64) -> Result<Self, CoerceError> {
        Ok(i != 0)
    }

    fn from_float(f: f64) -> Result<Self, CoerceError> {
        Ok(f != 0.0)
    }

    fn from_boolean(b: bool) -> Result<Self, CoerceError> {
        Ok(b)
    }

    fn to_scalar(&self) -> Scalar {
        Scalar::Bool(*self)
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}
