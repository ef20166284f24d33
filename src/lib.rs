//! Cheapskate
//!
//! Cheapskate streams the Cartesian product of N ranked option lists as a
//! lazy, duplicate-free sequence of tuples ordered by a cost function,
//! cheapest-first, without materialising the full product.

pub mod frontier;
pub mod lattice;
pub mod prelude;
pub mod product;
pub mod utils;
