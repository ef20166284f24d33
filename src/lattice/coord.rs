//! Coordinates

use smallvec::SmallVec;

/// A point in the lattice, identified by one index per axis.
///
/// Coordinates compare lexicographically, which gives frontier extraction a
/// deterministic total order when costs tie.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(SmallVec<[usize; 4]>);

impl Coord {
    /// The all-zero coordinate with one index per axis.
    #[must_use]
    pub fn origin(rank: usize) -> Self {
        Self(SmallVec::from_elem(0, rank))
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    /// The index on a single axis, or `None` if the axis does not exist.
    pub fn axis(&self, axis: usize) -> Option<usize> {
        self.0.get(axis).copied()
    }

    /// Iterates over the per-axis indices.
    pub fn axes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// A copy of this coordinate with one axis incremented by one.
    ///
    /// Returns `None` if the axis does not exist or the index would overflow.
    /// Bounds against the lattice are checked by the caller.
    pub(crate) fn bumped(&self, axis: usize) -> Option<Self> {
        let mut bumped = self.clone();
        let index = bumped.0.get_mut(axis)?;
        *index = index.checked_add(1)?;

        Some(bumped)
    }
}

impl FromIterator<usize> for Coord {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
