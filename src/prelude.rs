//! Cheapskate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    frontier::Frontier,
    lattice::{Coord, Lattice, LatticeError},
    product::{RankedProduct, Tuple, product, product_by, try_product_by},
};
