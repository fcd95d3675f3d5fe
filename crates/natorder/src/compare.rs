//! The natural-order comparator.
//!
//! Natural order compares embedded digit runs by numeric magnitude instead
//! of digit-by-digit, so `"item2"` sorts before `"item10"`. Both functions
//! here are pure: they never mutate their inputs and always return the same
//! ordering for the same pair, which makes them safe to hand directly to
//! [`slice::sort_by`] and to call from any thread.

use std::cmp::Ordering;

use crate::collation::Collation;
use crate::token::{runs, Run};

/// Compares two strings in natural order with the default collation.
///
/// Digit runs compare by magnitude (leading zeros do not affect the result),
/// other runs by code-point order. The first unequal run decides; if one run
/// sequence is a prefix of the other, the shorter sorts first. The empty
/// string therefore sorts before any non-empty string.
///
/// Strings that differ only in leading zeros of some digit run (`"z007"` vs
/// `"z7"`) compare `Equal`.
///
/// # Example
///
/// ```
/// use natorder::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("z2.doc", "z10.doc"), Ordering::Less);
/// assert_eq!(natural_cmp("z007", "z7"), Ordering::Equal);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    cmp_runs(a, b)
}

/// Compares two strings in natural order under the given [`Collation`].
///
/// Both inputs are normalized once, then compared run by run as in
/// [`natural_cmp`].
pub fn natural_cmp_with(collation: &Collation, a: &str, b: &str) -> Ordering {
    cmp_runs(&collation.normalize(a), &collation.normalize(b))
}

fn cmp_runs(a: &str, b: &str) -> Ordering {
    let mut runs_a = runs(a);
    let mut runs_b = runs(b);

    loop {
        match (runs_a.next(), runs_b.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ra), Some(rb)) => {
                let ord = match (ra, rb) {
                    (Run::Digits(da), Run::Digits(db)) => cmp_magnitude(da, db),
                    _ => ra.as_str().cmp(rb.as_str()),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Compares two all-digit runs by numeric magnitude.
///
/// Works on the digit text directly, so runs of any length compare without
/// overflow: after stripping leading zeros, a longer run is larger, and
/// equal-length runs compare lexically (which is numeric order for
/// equal-length digit strings).
fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
