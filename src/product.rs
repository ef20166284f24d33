//! Ordered product traversal
//!
//! Streams the full Cartesian product of N ranked dimensions as a lazy,
//! duplicate-free sequence of value-tuples, cheapest-first. The traversal is
//! a monotone lattice search: because every dimension is ranked ascending by
//! its cost key, stepping to a neighbor never lowers the cost, so coordinates
//! can be emitted in frontier extraction order without backtracking.

use std::iter::{FusedIterator, Sum};

use smallvec::SmallVec;

use crate::{
    frontier::Frontier,
    lattice::{Lattice, LatticeError, error::KeySourceError},
};

/// One emitted value-tuple, one element per dimension.
pub type Tuple<T> = SmallVec<[T; 4]>;

/// Lazy cheapest-first traversal over a product lattice.
///
/// Yields every coordinate's value-tuple exactly once, in non-decreasing
/// cost order with lexicographic tie-breaking. Exhausts after exactly
/// `cardinality` emissions; dropping it early abandons the traversal with no
/// further work. Memory is bounded by the frontier, not the full product.
#[derive(Debug)]
pub struct RankedProduct<T, K> {
    lattice: Lattice<T, K>,
    frontier: Frontier<K>,
    remaining: Option<usize>,
}

impl<T, K> RankedProduct<T, K>
where
    T: Clone,
    K: Ord + Clone + Sum,
{
    /// Begins a traversal, seeding the frontier with the start coordinate.
    pub fn new(lattice: Lattice<T, K>) -> Self {
        let mut frontier = Frontier::new();
        let remaining = lattice.cardinality();
        let start = lattice.start();

        if let Some(cost) = lattice.cost_of(&start) {
            frontier.push(cost, start);
        }

        Self {
            lattice,
            frontier,
            remaining,
        }
    }
}

impl<T, K> Iterator for RankedProduct<T, K>
where
    T: Clone,
    K: Ord + Clone + Sum,
{
    type Item = Tuple<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (_, coord) = self.frontier.pop()?;
        let tuple = self.lattice.value_of(&coord)?;

        for neighbor in self.lattice.neighbors(&coord) {
            if let Some(cost) = self.lattice.cost_of(&neighbor) {
                self.frontier.push(cost, neighbor);
            }
        }

        self.remaining = self.remaining.map(|left| left.saturating_sub(1));

        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(left) => (left, Some(left)),
            None => (0, None),
        }
    }
}

impl<T, K> FusedIterator for RankedProduct<T, K>
where
    T: Clone,
    K: Ord + Clone + Sum,
{
}

/// Cartesian product ordered by the sum of per-axis input positions.
///
/// The default cost key: each element's position in its input sequence is
/// its key, so elements need no intrinsic ordering and no re-sorting occurs.
///
/// ```
/// use cheapskate::product::product;
///
/// let pairs: Vec<Vec<i64>> = product(vec![vec![0, 1], vec![0, 1]])?
///     .map(|tuple| tuple.to_vec())
///     .collect();
///
/// assert_eq!(pairs, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// # Ok::<(), cheapskate::lattice::LatticeError>(())
/// ```
///
/// # Errors
///
/// Returns [`LatticeError::EmptyDimension`] if any dimension has no elements.
pub fn product<T>(
    dimensions: impl IntoIterator<Item = Vec<T>>,
) -> Result<RankedProduct<T, usize>, LatticeError>
where
    T: Clone,
{
    Ok(RankedProduct::new(Lattice::positional(dimensions)?))
}

/// Cartesian product ordered by the sum of per-element cost keys.
///
/// Each dimension is ranked ascending by `key` before traversal; the cost of
/// a tuple is the sum of its elements' keys.
///
/// # Errors
///
/// Returns [`LatticeError::EmptyDimension`] if any dimension has no elements.
pub fn product_by<T, K, F>(
    dimensions: impl IntoIterator<Item = Vec<T>>,
    key: F,
) -> Result<RankedProduct<T, K>, LatticeError>
where
    T: Clone,
    K: Ord + Clone + Sum,
    F: Fn(&T) -> K,
{
    Ok(RankedProduct::new(Lattice::ranked_by(dimensions, key)?))
}

/// Cartesian product ordered by a fallible cost key.
///
/// Keys for every element are evaluated up front while ranking the
/// dimensions, so a failing key aborts here, before the first emission.
///
/// # Errors
///
/// Returns [`LatticeError::EmptyDimension`] if any dimension has no
/// elements, or [`LatticeError::CostKey`] for the first element whose key
/// fails.
pub fn try_product_by<T, K, F, E>(
    dimensions: impl IntoIterator<Item = Vec<T>>,
    key: F,
) -> Result<RankedProduct<T, K>, LatticeError>
where
    T: Clone,
    K: Ord + Clone + Sum,
    F: Fn(&T) -> Result<K, E>,
    E: Into<KeySourceError>,
{
    Ok(RankedProduct::new(Lattice::try_ranked_by(dimensions, key)?))
}
