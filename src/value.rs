//! Dynamic value model for untrusted runtime data.
//!
//! This module provides [`Value`], the universe of values a [`Validator`]
//! can be asked about, along with [`Kind`] (the structural kind of a value)
//! and [`Symbol`] (an identity-compared handle).
//!
//! [`Validator`]: crate::Validator

use std::fmt::{self, Display};
use std::sync::Arc;

use indexmap::IndexMap;

/// The structural kind of a [`Value`].
///
/// Kinds are mutually exclusive: every value has exactly one kind. `Null`
/// and `Undefined` are distinct kinds, and composite values (`Array`,
/// `Object`) are not accepted by any primitive kind validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent value, distinct from `Null`.
    Undefined,
    /// The null value, distinct from `Undefined`.
    Null,
    /// A boolean.
    Boolean,
    /// A double-precision floating point number.
    Number,
    /// An integer outside the double-precision range discipline.
    BigInt,
    /// A UTF-8 string.
    String,
    /// An identity-compared symbol.
    Symbol,
    /// An ordered sequence of values.
    Array,
    /// An ordered map from string keys to values.
    Object,
}

impl Kind {
    /// Returns the lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A symbol compared by identity, never by description.
///
/// Two symbols are equal only if one is a clone of the other. Constructing
/// two symbols with the same description yields two distinct symbols.
///
/// # Example
///
/// ```rust
/// use attest::Symbol;
///
/// let a = Symbol::new("id");
/// let b = Symbol::new("id");
///
/// assert_ne!(a, b);          // same description, different identity
/// assert_eq!(a, a.clone());  // a clone shares identity
/// ```
#[derive(Debug, Clone)]
pub struct Symbol(Arc<SymbolInner>);

#[derive(Debug)]
struct SymbolInner {
    description: Option<String>,
}

impl Symbol {
    /// Creates a new symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Arc::new(SymbolInner {
            description: Some(description.into()),
        }))
    }

    /// Creates a new symbol without a description.
    pub fn anonymous() -> Self {
        Symbol(Arc::new(SymbolInner { description: None }))
    }

    /// Returns the description this symbol was created with, if any.
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

/// An arbitrary, untrusted runtime value.
///
/// `Value` is the sole input type of every validator. It covers the full
/// structural-kind vocabulary: the primitive kinds, plus `Array` and
/// `Object` composites. Object keys preserve insertion order.
///
/// Values arriving as JSON can be converted losslessly via
/// `From<serde_json::Value>`; see the [`interop`](crate::interop) module.
///
/// # Example
///
/// ```rust
/// use attest::{Kind, Value};
///
/// let value = Value::from(serde_json::json!({"name": "Alice"}));
/// assert_eq!(value.kind(), Kind::Object);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision floating point number.
    Number(f64),
    /// A large integer.
    BigInt(i128),
    /// A UTF-8 string.
    String(String),
    /// An identity-compared symbol.
    Symbol(Symbol),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered map from string keys to values.
    Object(IndexMap<String, Value>),
}

impl Value {
    /// Returns the structural kind of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the lowercase name of this value's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the string slice if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this value is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns true if this value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is `Undefined`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if this value is loosely nullish (`Null` or `Undefined`).
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}
