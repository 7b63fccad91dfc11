//! The core validator type.
//!
//! A [`Validator`] is a pure, total, synchronous predicate over a
//! [`Value`]: it always returns a boolean, never fails, and never observes
//! or mutates anything outside its input. Everything else in this crate is
//! a factory that builds a `Validator` from configuration and child
//! validators.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// A pure, total predicate over a [`Value`].
///
/// A validator answers yes or no, never why. It is immutable after
/// construction, cheap to clone, and may be invoked from any number of
/// threads concurrently without synchronization.
///
/// # Example
///
/// ```rust
/// use attest::{string, Validator, Value};
///
/// let v: Validator = string();
/// assert!(v.check(&Value::from("hello")));
/// assert!(!v.check(&Value::Number(1.0)));
///
/// // Custom predicates compose with the built-in factories.
/// let even = Validator::from_fn(|value| {
///     value.as_number().is_some_and(|n| n % 2.0 == 0.0)
/// });
/// assert!(even.check(&Value::Number(4.0)));
/// assert!(!even.check(&Value::Number(3.0)));
/// ```
#[derive(Clone)]
pub struct Validator {
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl Validator {
    /// Creates a validator from a predicate function.
    ///
    /// The function must be pure and total: same input, same answer, for
    /// every possible input. All combinators in this crate rely on that
    /// contract when they short-circuit.
    pub fn from_fn(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }

    /// Checks a value against this validator.
    pub fn check(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

// Validators are shared process-wide and invoked concurrently, so the core
// type must stay Send + Sync even if its internals change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator>();
    assert_sync::<Validator>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn() {
        let always = Validator::from_fn(|_| true);
        assert!(always.check(&Value::Null));
        assert!(always.check(&Value::Undefined));

        let never = Validator::from_fn(|_| false);
        assert!(!never.check(&Value::Null));
    }

    #[test]
    fn test_clone_shares_predicate() {
        let v = Validator::from_fn(|value| value.is_null());
        let cloned = v.clone();
        assert!(v.check(&Value::Null));
        assert!(cloned.check(&Value::Null));
        assert!(!cloned.check(&Value::Undefined));
    }

    #[test]
    fn test_determinism() {
        let v = Validator::from_fn(|value| value.as_number().is_some());
        let value = Value::Number(1.5);
        for _ in 0..100 {
            assert!(v.check(&value));
        }
    }
}
