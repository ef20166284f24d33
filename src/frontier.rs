//! Frontier
//!
//! A deduplicating priority frontier over lattice coordinates: a binary heap
//! ordered by cost, composed with a hash-based admission index so any
//! coordinate is admitted at most once across the whole traversal. Cost ties
//! are broken by the coordinate itself, lexicographic ascending, which makes
//! extraction order a deterministic total order.

use std::{cmp::Reverse, collections::BinaryHeap};

use rustc_hash::FxHashSet;

use crate::lattice::Coord;

/// Priority set of discovered coordinates awaiting emission.
#[derive(Debug)]
pub struct Frontier<K> {
    heap: BinaryHeap<Reverse<(K, Coord)>>,
    seen: FxHashSet<Coord>,
}

impl<K: Ord> Frontier<K> {
    /// An empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Offers a coordinate to the frontier.
    ///
    /// Returns `false` without touching the heap if the coordinate was ever
    /// admitted before, including coordinates already extracted. This is what
    /// guarantees each coordinate is emitted at most once.
    pub fn push(&mut self, cost: K, coord: Coord) -> bool {
        if !self.seen.insert(coord.clone()) {
            return false;
        }

        self.heap.push(Reverse((cost, coord)));
        true
    }

    /// Extracts the cheapest pending coordinate, or `None` once drained.
    pub fn pop(&mut self) -> Option<(K, Coord)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Number of coordinates discovered but not yet extracted.
    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing remains to extract.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}
