//! Tagged sort keys.
//!
//! Callers that sort mixed data (strings, numbers, dates) normalize each
//! element into a [`Key`] once at the call boundary, instead of funneling
//! everything through implicit string coercion. Same-kind numbers and
//! timestamps then compare by value; only text goes through the run-based
//! comparator.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::collation::Collation;
use crate::compare::natural_cmp_with;
use crate::error::{NatOrderError, Result};

/// A normalized sort key, borrowed from the source data.
///
/// # Example
///
/// ```
/// use natorder::{compare_keys, Key, Number};
/// use std::cmp::Ordering;
///
/// let a = Key::Text("report-2.pdf");
/// let b = Key::Text("report-10.pdf");
/// assert_eq!(compare_keys(&a, &b), Ordering::Less);
///
/// let x = Key::Number(Number::I64(900));
/// let y = Key::Number(Number::I64(1000));
/// assert_eq!(compare_keys(&x, &y), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key<'a> {
    /// Text, compared run by run in natural order.
    Text(&'a str),
    /// A number, compared by numeric value against other numbers.
    Number(Number),
    /// A point in time, compared chronologically against other timestamps.
    Timestamp(Timestamp),
}

impl<'a> Key<'a> {
    /// Returns the name of this key's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Text(_) => "text",
            Key::Number(_) => "number",
            Key::Timestamp(_) => "timestamp",
        }
    }

    /// Returns the decimal string form used when this key meets a key of a
    /// different kind.
    fn coerced(&self) -> Cow<'a, str> {
        match self {
            Key::Text(s) => Cow::Borrowed(s),
            Key::Number(n) => Cow::Owned(n.to_decimal_string()),
            Key::Timestamp(t) => Cow::Owned(t.as_millis().to_string()),
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(s: &'a str) -> Self {
        Key::Text(s)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(s: &'a String) -> Self {
        Key::Text(s)
    }
}

impl From<Number> for Key<'_> {
    fn from(n: Number) -> Self {
        Key::Number(n)
    }
}

impl From<Timestamp> for Key<'_> {
    fn from(t: Timestamp) -> Self {
        Key::Timestamp(t)
    }
}

/// Compares two keys, treating incomparable pairs as equal.
///
/// Same-kind numbers compare by numeric value and same-kind timestamps by
/// chronological value. Text compares in natural order. When the kinds
/// differ, the non-text side is coerced to its decimal string form and the
/// pair compares as text. A NaN on either side of a number comparison yields
/// `Equal`; use [`try_compare_keys`] to surface it as an error instead.
pub fn compare_keys(a: &Key<'_>, b: &Key<'_>) -> Ordering {
    compare_keys_with(&Collation::default(), a, b)
}

/// Compares two keys under the given [`Collation`], treating incomparable
/// pairs as equal.
pub fn compare_keys_with(collation: &Collation, a: &Key<'_>, b: &Key<'_>) -> Ordering {
    compare_opt(collation, a, b).unwrap_or(Ordering::Equal)
}

/// Compares two keys, failing on incomparable pairs.
///
/// # Errors
///
/// Returns [`NatOrderError::Incomparable`] when either side of a
/// number-to-number comparison is NaN.
pub fn try_compare_keys(a: &Key<'_>, b: &Key<'_>) -> Result<Ordering> {
    try_compare_keys_with(&Collation::default(), a, b)
}

/// Strict variant of [`compare_keys_with`].
pub fn try_compare_keys_with(collation: &Collation, a: &Key<'_>, b: &Key<'_>) -> Result<Ordering> {
    compare_opt(collation, a, b).ok_or(NatOrderError::Incomparable {
        left: a.kind(),
        right: b.kind(),
    })
}

fn compare_opt(collation: &Collation, a: &Key<'_>, b: &Key<'_>) -> Option<Ordering> {
    match (a, b) {
        (Key::Text(ta), Key::Text(tb)) => Some(natural_cmp_with(collation, ta, tb)),
        (Key::Number(na), Key::Number(nb)) => na.compare(*nb),
        (Key::Timestamp(ta), Key::Timestamp(tb)) => Some(ta.cmp(tb)),
        _ => Some(natural_cmp_with(collation, &a.coerced(), &b.coerced())),
    }
}

/// Numeric key value.
///
/// Stored in one of three variants to preserve precision; comparisons
/// between different variants go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for mixed-variant comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers, handling mixed variants.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Renders the number in plain decimal, the form used when a number key
    /// is compared against text.
    ///
    /// Integers render exactly; floats use Rust's shortest round-trip form.
    pub fn to_decimal_string(self) -> String {
        match self {
            Number::I64(n) => n.to_string(),
            Number::U64(n) => n.to_string(),
            Number::F64(n) => n.to_string(),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// Timestamp key, milliseconds since Unix epoch.
///
/// Timestamps compare by chronological value, never through their string
/// form. Users convert from their preferred datetime type (e.g.
/// `std::time::SystemTime`, `chrono::DateTime`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs * 1000)
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
