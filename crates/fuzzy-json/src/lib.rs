//! fuzzy-json - lenient scalar fields for JSON (de)serialization.
//!
//! Producers are often inconsistent about scalar encoding: numbers arrive as
//! strings, booleans as `"1"` or `0`. The holders in this crate accept any JSON
//! scalar for a logically typed field and normalize it:
//!
//! | type | plain | nullable |
//! |------|-------|----------|
//! | text | [`FuzzyString`] | [`NullString`] |
//! | 64-bit integer | [`FuzzyInt`] | [`NullInt`] |
//! | 64-bit float | [`FuzzyFloat`] | [`NullFloat`] |
//! | boolean | [`FuzzyBool`] | [`NullBool`] |
//!
//! Plain holders collapse `null` and absent fields to the zero value; nullable
//! holders keep them distinct. Holders implement serde's `Serialize` and
//! `Deserialize` for use as struct fields, and [`JsonScalar`] for decoding
//! the raw text of a single value.
//!
//! ```
//! use fuzzy_json::{FuzzyBool, NullInt};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     active: FuzzyBool,
//!     count: NullInt,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"active": "1"}"#).unwrap();
//! assert!(*row.active);
//! assert!(row.count.is_null());
//! ```

mod log;

pub mod codec;
pub mod coerce;
pub mod error;
pub mod fuzzy;
pub mod nullable;
pub mod scalar;

pub use codec::{decode, encode, JsonScalar};
pub use coerce::Coerce;
pub use error::{CoerceError, ErrorKind};
pub use fuzzy::{Fuzzy, FuzzyBool, FuzzyFloat, FuzzyInt, FuzzyString};
pub use nullable::{NullBool, NullFloat, NullInt, NullString, Nullable};
pub use scalar::{Scalar, ScalarKind};
