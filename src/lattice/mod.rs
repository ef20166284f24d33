//! Lattice
//!
//! Models the N-dimensional coordinate space implied by N input sequences:
//! bounds, the mapping from coordinates to value-tuples, and the neighbor
//! relation (increment exactly one axis by one, if in bounds). Each dimension
//! is ranked ascending by its cost key when the lattice is built, so stepping
//! to a neighbor never decreases that axis's contribution to the cost.

use std::iter::Sum;

use smallvec::SmallVec;

pub mod error;

mod coord;

pub use coord::Coord;
pub use error::LatticeError;

use self::error::KeySourceError;

/// One axis of the lattice: elements paired with their cost keys, sorted
/// ascending by key. The sort is stable, so equal keys keep input order.
#[derive(Clone, Debug)]
struct Dimension<T, K> {
    entries: Vec<Entry<T, K>>,
}

#[derive(Clone, Debug)]
struct Entry<T, K> {
    value: T,
    key: K,
}

impl<T, K> Dimension<T, K> {
    /// Largest valid index on this axis. Dimensions are never empty.
    fn max_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}

/// An immutable N-dimensional product lattice.
///
/// Owns the ranked dimensions for the lifetime of one traversal. Queries are
/// pure; nothing here mutates after construction.
#[derive(Clone, Debug)]
pub struct Lattice<T, K> {
    dims: Vec<Dimension<T, K>>,
}

impl<T> Lattice<T, usize> {
    /// Builds a lattice using each element's input position as its cost key.
    ///
    /// Elements need no intrinsic ordering; the cost of a coordinate is the
    /// sum of its per-axis indices.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::EmptyDimension`] if any dimension has no
    /// elements.
    pub fn positional(
        dimensions: impl IntoIterator<Item = Vec<T>>,
    ) -> Result<Self, LatticeError> {
        Self::build(dimensions, |_, index, _| Ok(index))
    }
}

impl<T, K: Ord> Lattice<T, K> {
    /// Builds a lattice whose dimensions are ranked by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::EmptyDimension`] if any dimension has no
    /// elements.
    pub fn ranked_by<F>(
        dimensions: impl IntoIterator<Item = Vec<T>>,
        key: F,
    ) -> Result<Self, LatticeError>
    where
        F: Fn(&T) -> K,
    {
        Self::build(dimensions, |_, _, value| Ok(key(value)))
    }

    /// Builds a lattice whose dimensions are ranked by a fallible `key`.
    ///
    /// Every element's key is evaluated here, so a failing key surfaces
    /// before any traversal begins.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::EmptyDimension`] if any dimension has no
    /// elements, or [`LatticeError::CostKey`] for the first element whose key
    /// fails.
    pub fn try_ranked_by<F, E>(
        dimensions: impl IntoIterator<Item = Vec<T>>,
        key: F,
    ) -> Result<Self, LatticeError>
    where
        F: Fn(&T) -> Result<K, E>,
        E: Into<KeySourceError>,
    {
        Self::build(dimensions, |axis, index, value| {
            key(value).map_err(|source| LatticeError::CostKey {
                axis,
                index,
                source: source.into(),
            })
        })
    }

    fn build<F>(
        dimensions: impl IntoIterator<Item = Vec<T>>,
        mut key: F,
    ) -> Result<Self, LatticeError>
    where
        F: FnMut(usize, usize, &T) -> Result<K, LatticeError>,
    {
        let mut dims = Vec::new();

        for (axis, values) in dimensions.into_iter().enumerate() {
            if values.is_empty() {
                return Err(LatticeError::EmptyDimension { axis });
            }

            let mut entries = Vec::with_capacity(values.len());

            for (index, value) in values.into_iter().enumerate() {
                let ranked = key(axis, index, &value)?;
                entries.push(Entry { value, key: ranked });
            }

            entries.sort_by(|a, b| a.key.cmp(&b.key));
            dims.push(Dimension { entries });
        }

        Ok(Self { dims })
    }
}

impl<T, K> Lattice<T, K> {
    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Largest valid index per axis.
    pub fn bounds(&self) -> impl Iterator<Item = usize> + '_ {
        self.dims.iter().map(Dimension::max_index)
    }

    /// The all-zero coordinate, always the first one visited.
    pub fn start(&self) -> Coord {
        Coord::origin(self.rank())
    }

    /// Total number of coordinates, or `None` if it overflows `usize`.
    pub fn cardinality(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, dim| acc.checked_mul(dim.entries.len()))
    }

    /// Maps a coordinate to its value-tuple by per-axis lookup.
    ///
    /// Returns `None` if the coordinate's rank or any index is out of
    /// bounds; traversal only produces in-bounds coordinates.
    pub fn value_of(&self, coord: &Coord) -> Option<SmallVec<[T; 4]>>
    where
        T: Clone,
    {
        if coord.rank() != self.rank() {
            return None;
        }

        self.dims
            .iter()
            .zip(coord.axes())
            .map(|(dim, index)| dim.entries.get(index).map(|entry| entry.value.clone()))
            .collect()
    }

    /// The cost of a coordinate: the sum of its per-axis element keys.
    ///
    /// Returns `None` for out-of-bounds coordinates, like
    /// [`value_of()`](Self::value_of).
    pub fn cost_of(&self, coord: &Coord) -> Option<K>
    where
        K: Clone + Sum,
    {
        if coord.rank() != self.rank() {
            return None;
        }

        self.dims
            .iter()
            .zip(coord.axes())
            .map(|(dim, index)| dim.entries.get(index).map(|entry| entry.key.clone()))
            .sum()
    }

    /// The in-bounds coordinates reachable by incrementing one axis by one.
    ///
    /// At most [`rank()`](Self::rank) coordinates. Axis enumeration order
    /// only affects discovery order, never emission order.
    pub fn neighbors<'a>(&'a self, coord: &'a Coord) -> impl Iterator<Item = Coord> + 'a {
        self.dims
            .iter()
            .enumerate()
            .filter_map(move |(axis, dim)| {
                let bumped = coord.bumped(axis)?;

                (bumped.axis(axis)? <= dim.max_index()).then_some(bumped)
            })
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;
    use testresult::TestResult;

    use super::*;

    fn square_lattice() -> Result<Lattice<i64, usize>, LatticeError> {
        Lattice::positional(vec![vec![10, 20, 30], vec![40, 50, 60]])
    }

    #[test]
    fn bounds_and_start_follow_dimension_lengths() -> TestResult {
        let lattice = square_lattice()?;

        assert_eq!(lattice.rank(), 2, "two dimensions expected");
        assert_eq!(
            lattice.bounds().collect::<Vec<_>>(),
            vec![2, 2],
            "bounds should be length minus one"
        );
        assert_eq!(lattice.start(), Coord::origin(2), "start is the origin");
        assert_eq!(lattice.cardinality(), Some(9), "three by three grid");

        Ok(())
    }

    #[test]
    fn value_of_looks_up_each_axis_independently() -> TestResult {
        let lattice = square_lattice()?;
        let coord: Coord = [2, 0].into_iter().collect();

        assert_eq!(
            lattice.value_of(&coord),
            Some(smallvec![30, 40]),
            "values should come from the matching axis"
        );

        Ok(())
    }

    #[test]
    fn value_of_is_none_out_of_bounds() -> TestResult {
        let lattice = square_lattice()?;

        let too_far: Coord = [3, 0].into_iter().collect();
        let wrong_rank: Coord = [0].into_iter().collect();

        assert_eq!(lattice.value_of(&too_far), None, "index out of bounds");
        assert_eq!(lattice.value_of(&wrong_rank), None, "rank mismatch");

        Ok(())
    }

    #[test]
    fn ranked_by_sorts_each_dimension_by_key() -> TestResult {
        let lattice = Lattice::ranked_by(vec![vec![3i64, 1, 2]], |&v| v)?;
        let values = lattice.value_of(&lattice.start());

        assert_eq!(
            values,
            Some(smallvec![1]),
            "start should map to the cheapest element"
        );
        assert_eq!(lattice.cost_of(&lattice.start()), Some(1), "cheapest key");

        Ok(())
    }

    #[test]
    fn neighbors_increment_one_axis_within_bounds() -> TestResult {
        let lattice = square_lattice()?;

        let interior: Coord = [1, 1].into_iter().collect();
        let expected: Vec<Coord> = vec![
            [2, 1].into_iter().collect(),
            [1, 2].into_iter().collect(),
        ];

        assert_eq!(
            lattice.neighbors(&interior).collect::<Vec<_>>(),
            expected,
            "interior coordinate has one neighbor per axis"
        );

        let corner: Coord = [2, 2].into_iter().collect();

        assert_eq!(
            lattice.neighbors(&corner).count(),
            0,
            "far corner has no neighbors"
        );

        Ok(())
    }

    #[test]
    fn empty_dimension_fails_with_its_axis() {
        let result = Lattice::positional(vec![vec![1], vec![]]);

        assert!(
            matches!(result, Err(LatticeError::EmptyDimension { axis: 1 })),
            "second dimension should be reported"
        );
    }

    #[test]
    fn zero_rank_lattice_is_a_single_point() -> TestResult {
        let lattice: Lattice<i64, usize> = Lattice::positional(Vec::new())?;

        assert_eq!(lattice.rank(), 0, "no axes");
        assert_eq!(lattice.cardinality(), Some(1), "empty product is unity");
        assert_eq!(
            lattice.value_of(&lattice.start()),
            Some(SmallVec::new()),
            "the single point maps to the empty tuple"
        );
        assert_eq!(
            lattice.neighbors(&lattice.start()).count(),
            0,
            "no neighbors without axes"
        );

        Ok(())
    }
}
