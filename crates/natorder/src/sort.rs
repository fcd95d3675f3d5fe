//! Slice sorting helpers.
//!
//! [`NaturalSortExt`] plugs the comparator into the standard library's
//! stable sort, so records with equal keys keep their input order.

use std::cmp::Ordering;

use crate::collation::Collation;
use crate::compare::natural_cmp_with;
use crate::key::{compare_keys_with, Key};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged. For `Desc`, reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Natural-order sorting for slices (and anything that derefs to one).
///
/// All methods use the standard library's stable sort.
///
/// # Example
///
/// ```
/// use natorder::NaturalSortExt;
///
/// let mut files = vec!["z10.doc", "z2.doc", "z1.doc"];
/// files.sort_natural();
/// assert_eq!(files, vec!["z1.doc", "z2.doc", "z10.doc"]);
/// ```
pub trait NaturalSortExt<T> {
    /// Sorts string-like elements in ascending natural order.
    fn sort_natural(&mut self)
    where
        T: AsRef<str>;

    /// Sorts string-like elements in ascending natural order under the
    /// given [`Collation`].
    fn sort_natural_with(&mut self, collation: &Collation)
    where
        T: AsRef<str>;

    /// Sorts string-like elements in natural order in the given direction.
    fn sort_natural_dir(&mut self, dir: Dir)
    where
        T: AsRef<str>;

    /// Sorts arbitrary elements by a [`Key`] extracted from each.
    ///
    /// The accessor runs per comparison, mirroring a plain `sort_by_key`;
    /// keep it cheap.
    fn sort_natural_by_key<F>(&mut self, key: F)
    where
        F: for<'k> Fn(&'k T) -> Key<'k>;

    /// Returns `true` if the elements are already in ascending natural
    /// order.
    fn is_sorted_natural(&self) -> bool
    where
        T: AsRef<str>;
}

impl<T> NaturalSortExt<T> for [T] {
    fn sort_natural(&mut self)
    where
        T: AsRef<str>,
    {
        self.sort_natural_with(&Collation::default());
    }

    fn sort_natural_with(&mut self, collation: &Collation)
    where
        T: AsRef<str>,
    {
        self.sort_by(|a, b| natural_cmp_with(collation, a.as_ref(), b.as_ref()));
    }

    fn sort_natural_dir(&mut self, dir: Dir)
    where
        T: AsRef<str>,
    {
        let collation = Collation::default();
        self.sort_by(|a, b| dir.apply(natural_cmp_with(&collation, a.as_ref(), b.as_ref())));
    }

    fn sort_natural_by_key<F>(&mut self, key: F)
    where
        F: for<'k> Fn(&'k T) -> Key<'k>,
    {
        let collation = Collation::default();
        self.sort_by(|a, b| compare_keys_with(&collation, &key(a), &key(b)));
    }

    fn is_sorted_natural(&self) -> bool
    where
        T: AsRef<str>,
    {
        let collation = Collation::default();
        self.windows(2).all(|pair| {
            natural_cmp_with(&collation, pair[0].as_ref(), pair[1].as_ref()) != Ordering::Greater
        })
    }
}
