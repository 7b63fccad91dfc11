//! # Attest
//!
//! Composable runtime structural-validation predicates for untrusted
//! values.
//!
//! ## Overview
//!
//! A [`Validator`] is a pure, total predicate over a dynamic [`Value`]: it
//! answers whether the value conforms to an expected shape, and never
//! anything else — no error messages, no coercion, no defaults. Compound
//! validators are built from atomic ones with ordinary factory functions;
//! composition happens entirely at construction time, and the result is an
//! immutable value that can be shared across threads and invoked without
//! synchronization.
//!
//! ## Core Types
//!
//! - [`Value`]: the universe of untrusted values (primitives, symbols,
//!   bigints, arrays, ordered-key objects)
//! - [`Validator`]: a predicate over `Value`, built by the factory
//!   functions re-exported at the crate root
//!
//! ## Example
//!
//! ```rust
//! use attest::{array, number_range, object, optional, string, Value};
//!
//! let user = object(
//!     [
//!         ("name", string()),
//!         ("age", number_range(Some(0.0), Some(150.0))),
//!         ("tags", optional(array(string()))),
//!     ],
//!     false,
//! );
//!
//! let payload = Value::from(serde_json::json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["admin"]
//! }));
//! assert!(user.check(&payload));
//!
//! let bad = Value::from(serde_json::json!({"name": "Bob", "age": -1}));
//! assert!(!user.check(&bad));
//! ```

pub mod interop;
pub mod validator;
pub mod validators;
pub mod value;

pub use validator::Validator;
pub use validators::{
    any, array, array_length, bigint, boolean, email, enum_of, intersection, literal, null,
    nullable, number, number_range, numeric_string, object, optional, pattern, record, regex,
    string, symbol, tuple, undefined, union, url, uuid,
};
pub use value::{Kind, Symbol, Value};
