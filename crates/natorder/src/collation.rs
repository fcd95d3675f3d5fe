//! Comparison configuration.
//!
//! [`Collation`] carries the text normalization rules applied before
//! comparison. It is always passed explicitly; the crate never consults
//! ambient locale state, so the same inputs and collation give the same
//! ordering on every platform.

use std::borrow::Cow;

use deunicode::deunicode;

/// Text normalization rules for natural-order comparison.
///
/// The default collation is byte-faithful: case-sensitive, no folding,
/// text runs compare by code point. Setters follow the builder pattern.
///
/// # Example
///
/// ```
/// use natorder::{natural_cmp_with, Collation};
/// use std::cmp::Ordering;
///
/// let collation = Collation::new().case_insensitive();
/// assert_eq!(natural_cmp_with(&collation, "Item2", "item10"), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collation {
    case_insensitive: bool,
    ascii_fold: bool,
}

impl Collation {
    /// Creates the default byte-faithful collation.
    pub fn new() -> Self {
        Collation::default()
    }

    /// Lowercases text before comparison, so `"B"` sorts between `"a"`
    /// and `"c"`.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Transliterates text to ASCII before comparison, so `"résumé"`
    /// compares as `"resume"`.
    pub fn ascii_fold(mut self) -> Self {
        self.ascii_fold = true;
        self
    }

    /// Returns `true` if this collation lowercases text.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns `true` if this collation folds text to ASCII.
    pub fn is_ascii_fold(&self) -> bool {
        self.ascii_fold
    }

    /// Applies this collation's normalization to an input.
    ///
    /// The default collation borrows the input unchanged; folding and
    /// lowercasing allocate. Folding runs before lowercasing so that
    /// transliterations of uppercase characters are also lowered.
    pub fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let mut out: Cow<'a, str> = Cow::Borrowed(input);
        if self.ascii_fold {
            out = Cow::Owned(deunicode(&out));
        }
        if self.case_insensitive {
            out = Cow::Owned(out.to_lowercase());
        }
        out
    }
}
