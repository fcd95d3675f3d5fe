//! Natorder - Natural-order comparison and sorting for mixed alphanumeric data.
//!
//! Natural order treats embedded digit runs as numbers rather than character
//! sequences, so `"item2"` sorts before `"item10"`. The crate provides:
//!
//! - [`natural_cmp`] / [`natural_cmp_with`]: pure comparators usable directly
//!   as the callback to `sort_by`
//! - [`Collation`]: explicit, locale-free normalization (case folding, ASCII
//!   transliteration) passed as a parameter, never read from ambient state
//! - [`Key`]: a tagged variant for sorting mixed strings, numbers, and
//!   timestamps without implicit string coercion
//! - [`NaturalSortExt`]: slice extension methods over the standard library's
//!   stable sort
//!
//! # Quick Start
//!
//! ```rust
//! use natorder::{natural_cmp, NaturalSortExt};
//! use std::cmp::Ordering;
//!
//! // As a plain comparator
//! assert_eq!(natural_cmp("z2.doc", "z10.doc"), Ordering::Less);
//!
//! // As a slice sort
//! let mut files = vec!["z10.doc", "z2.doc", "z17.doc", "z1.doc"];
//! files.sort_natural();
//! assert_eq!(files, vec!["z1.doc", "z2.doc", "z10.doc", "z17.doc"]);
//! ```
//!
//! # Ordering Semantics
//!
//! Strings split into maximal all-digit / all-non-digit runs, compared
//! pairwise:
//!
//! | Left run | Right run | Comparison |
//! |----------|-----------|------------|
//! | digits | digits | numeric magnitude (leading zeros ignored) |
//! | any other pair | | code-point order on the run text |
//!
//! The first unequal pair decides; a run sequence that is a prefix of the
//! other sorts first, so the empty string sorts before everything. Digit
//! runs of any length compare without overflow.
//!
//! The comparator is stateless and side-effect-free: safe to call from any
//! thread, and two calls with the same pair always agree.

mod collation;
mod compare;
mod error;
mod key;
mod sort;
mod token;

// Re-export public API
pub use collation::Collation;
pub use compare::{natural_cmp, natural_cmp_with};
pub use error::{NatOrderError, Result};
pub use key::{compare_keys, compare_keys_with, try_compare_keys, try_compare_keys_with};
pub use key::{Key, Number, Timestamp};
pub use sort::{Dir, NaturalSortExt};
pub use token::{runs, Run, Runs};
