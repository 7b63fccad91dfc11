//! String validators derived from patterns and parsers.
//!
//! The generic [`regex`] factory requires the value be a string the pattern
//! matches *anywhere*; it is not anchored to the whole string. Callers that
//! need full-string matching must anchor their own pattern. [`email`],
//! [`uuid`], and [`numeric_string`] are built on string checks; [`url`]
//! delegates to the `url` crate's parser inside a failure boundary.

use regex::Regex;
use url::Url;

use crate::validator::Validator;
use crate::value::Value;

/// Pragmatic email shape: non-empty local part, non-empty domain with a
/// dot. Not RFC-complete. Anchored, unlike the UUID pattern.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Canonical 8-4-4-4-12 hexadecimal grouping. Deliberately unanchored: a
/// superstring containing a valid UUID also passes.
const UUID_PATTERN: &str =
    r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

/// Accepts strings the given regular expression matches anywhere.
///
/// # Example
///
/// ```rust
/// use attest::{regex, Value};
///
/// let has_digits = regex(regex::Regex::new(r"\d+").unwrap());
/// assert!(has_digits.check(&Value::from("abc123")));
/// assert!(!has_digits.check(&Value::from("abc")));
/// assert!(!has_digits.check(&Value::Number(123.0))); // not a string
/// ```
pub fn regex(re: Regex) -> Validator {
    Validator::from_fn(move |value| value.as_str().is_some_and(|s| re.is_match(s)))
}

/// Compiles a pattern and returns the corresponding [`regex`] validator.
///
/// Returns an error if the pattern is invalid; pattern validity is the
/// caller's responsibility, not a validation outcome.
///
/// # Example
///
/// ```rust
/// use attest::{pattern, Value};
///
/// let digits = pattern(r"^\d+$").unwrap();
/// assert!(digits.check(&Value::from("12345")));
/// assert!(!digits.check(&Value::from("12a45")));
///
/// assert!(pattern(r"[invalid").is_err());
/// ```
pub fn pattern(pattern: &str) -> Result<Validator, regex::Error> {
    Ok(regex(Regex::new(pattern)?))
}

fn known_pattern(pattern: &str) -> Validator {
    // Only called with the compile-checked constants above.
    match Regex::new(pattern) {
        Ok(re) => regex(re),
        Err(_) => Validator::from_fn(|_| false),
    }
}

/// Accepts strings shaped like `local@domain.tld`.
///
/// Rejects empty local or domain parts and domains without a dot. The
/// pattern is pragmatic, not RFC-complete.
///
/// # Example
///
/// ```rust
/// use attest::{email, Value};
///
/// assert!(email().check(&Value::from("alice@example.com")));
/// assert!(!email().check(&Value::from("@example.com")));
/// assert!(!email().check(&Value::from("alice@example")));
/// ```
pub fn email() -> Validator {
    known_pattern(EMAIL_PATTERN)
}

/// Accepts strings containing a canonical 8-4-4-4-12 UUID.
///
/// The match is a substring match: a string that merely contains a valid
/// UUID also passes. Callers needing an exact match should anchor their own
/// [`pattern`].
pub fn uuid() -> Validator {
    known_pattern(UUID_PATTERN)
}

/// Accepts strings the URL parser accepts.
///
/// Parsing is delegated to the `url` crate; any parse failure is swallowed
/// and mapped to `false`. Non-string input is always `false`.
///
/// # Example
///
/// ```rust
/// use attest::{url, Value};
///
/// assert!(url().check(&Value::from("https://example.com/path?q=1")));
/// assert!(url().check(&Value::from("ftp://host")));
/// assert!(!url().check(&Value::from("not a url")));
/// ```
pub fn url() -> Validator {
    Validator::from_fn(|value| value.as_str().is_some_and(|s| Url::parse(s).is_ok()))
}

/// Accepts strings with a parseable leading base-10 integer.
///
/// The check is a *prefix* parse: an optional sign followed by at least one
/// ASCII digit. Trailing non-digit characters after the prefix are
/// tolerated (`"42abc"` passes), while strings that begin with anything
/// else — whitespace, `"NaN"`, `"Infinity"` — are rejected. This loose
/// prefix semantics is deliberate; do not substitute a full-string parse.
///
/// # Example
///
/// ```rust
/// use attest::{numeric_string, Value};
///
/// assert!(numeric_string().check(&Value::from("42")));
/// assert!(numeric_string().check(&Value::from("-42abc")));
/// assert!(!numeric_string().check(&Value::from("abc42")));
/// assert!(!numeric_string().check(&Value::from("NaN")));
/// ```
pub fn numeric_string() -> Validator {
    Validator::from_fn(|value| {
        let Some(s) = value.as_str() else {
            return false;
        };
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        digits.bytes().next().is_some_and(|b| b.is_ascii_digit())
    })
}
