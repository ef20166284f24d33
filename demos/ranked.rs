//! Ranked Product Demo
//!
//! Streams the Cartesian product of the supplied dimensions cheapest-first.
//!
//! Each positional argument is one dimension as comma-separated integers.
//! Use `--by-value` to rank elements by their numeric value instead of their
//! input position.
//! Use `--take` to stop after a number of tuples.
//!
//! ```text
//! cargo run --example ranked -- 0,1,2 0,1,2
//! cargo run --example ranked -- --by-value --take 5 9,3,7 10,20
//! ```

use anyhow::Result;
use clap::Parser;

use cheapskate::{
    product::{Tuple, product, product_by},
    utils::{DemoArgs, parse_dimension},
};

/// Ranked Product Demo
#[expect(clippy::print_stdout, reason = "Example code")]
fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let dimensions = args
        .dimensions
        .iter()
        .map(|raw| parse_dimension(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let stream: Box<dyn Iterator<Item = Tuple<i64>>> = if args.by_value {
        Box::new(product_by(dimensions, |&value| value)?)
    } else {
        Box::new(product(dimensions)?)
    };

    let limit = args.take.unwrap_or(usize::MAX);

    for tuple in stream.take(limit) {
        let rendered = tuple
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        println!("({rendered})");
    }

    Ok(())
}
