//! Run tokenization for natural-order comparison.
//!
//! A string is split into a maximal alternating sequence of [`Run`]s, each
//! either all-digit or all-non-digit. Runs are the comparison unit: digit
//! runs compare by numeric magnitude, everything else by code-point order.

/// A maximal contiguous run of characters, borrowed from the input.
///
/// Digit detection is ASCII `0-9` only. Non-ASCII numerals (e.g. `٤`) are
/// treated as text and compare by code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Run<'a> {
    /// A run of one or more ASCII digits.
    Digits(&'a str),
    /// A run of one or more non-digit characters.
    Text(&'a str),
}

impl<'a> Run<'a> {
    /// Returns the underlying string slice of this run.
    pub fn as_str(&self) -> &'a str {
        match self {
            Run::Digits(s) => s,
            Run::Text(s) => s,
        }
    }

    /// Returns `true` if this is a digit run.
    pub fn is_digits(&self) -> bool {
        matches!(self, Run::Digits(_))
    }
}

/// Iterator over the runs of a string.
///
/// Yields nothing for the empty string. Adjacent runs always differ in kind,
/// and concatenating the yielded slices reproduces the input. Iteration
/// borrows from the input and never allocates.
///
/// # Example
///
/// ```
/// use natorder::{runs, Run};
///
/// let seq: Vec<Run> = runs("z10.doc").collect();
/// assert_eq!(seq, vec![Run::Text("z"), Run::Digits("10"), Run::Text(".doc")]);
/// ```
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    rest: &'a str,
}

/// Splits a string into its alternating digit / non-digit runs.
pub fn runs(input: &str) -> Runs<'_> {
    Runs { rest: input }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        let first = self.rest.chars().next()?;
        let in_digits = first.is_ascii_digit();

        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != in_digits)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if in_digits {
            Run::Digits(run)
        } else {
            Run::Text(run)
        })
    }
}
