//! Utils

use std::num::ParseIntError;

use clap::Parser;

/// Arguments for the ranked product demos
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Dimensions as comma-separated integers, one argument per axis
    #[clap(required = true)]
    pub dimensions: Vec<String>,

    /// Rank elements by numeric value instead of input position
    #[clap(short, long)]
    pub by_value: bool,

    /// Stop after emitting this many tuples
    #[clap(short, long)]
    pub take: Option<usize>,
}

/// Parses one comma-separated dimension argument into its elements.
///
/// # Errors
///
/// Returns a [`ParseIntError`] if any element is not a valid integer.
pub fn parse_dimension(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    raw.split(',').map(|part| part.trim().parse()).collect()
}
