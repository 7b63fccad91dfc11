//! Validator factories.
//!
//! Every public item in this module tree is either an atomic validator
//! (a zero-argument factory for a primitive kind check) or a combinator
//! (a factory that builds a new validator from configuration and child
//! validators). Composition happens entirely at construction time; the
//! result is an ordinary [`Validator`](crate::Validator) value.
//!
//! # Example
//!
//! ```rust
//! use attest::{array, number, object, optional, string, Value};
//!
//! let user = object(
//!     [
//!         ("name", string()),
//!         ("age", number()),
//!         ("tags", optional(array(string()))),
//!     ],
//!     false,
//! );
//!
//! let value = Value::from(serde_json::json!({"name": "Alice", "age": 30}));
//! assert!(user.check(&value));
//! ```

mod literal;
mod logical;
mod numeric;
mod primitive;
mod string;
mod structural;

pub use literal::literal;
pub use logical::{intersection, nullable, optional, union};
pub use numeric::number_range;
pub use primitive::{any, bigint, boolean, null, number, string, symbol, undefined};
pub use string::{email, numeric_string, pattern, regex, url, uuid};
pub use structural::{array, array_length, enum_of, object, record, tuple};
