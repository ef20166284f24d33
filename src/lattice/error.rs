//! Lattice errors

use thiserror::Error;

/// Boxed source error for a failed cost key.
pub type KeySourceError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when building a lattice.
///
/// Both variants surface before the first emission: dimensions are validated
/// and every element's cost key is evaluated while the lattice is built.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// A dimension has no elements, which would make the product empty.
    #[error("dimension {axis} has no elements")]
    EmptyDimension {
        /// Zero-based position of the offending dimension.
        axis: usize,
    },

    /// The cost key failed for an element while ranking a dimension.
    #[error("cost key failed for element {index} of dimension {axis}: {source}")]
    CostKey {
        /// Zero-based position of the dimension being ranked.
        axis: usize,

        /// Position of the element within the dimension, in input order.
        index: usize,

        /// The underlying key error.
        source: KeySourceError,
    },
}
