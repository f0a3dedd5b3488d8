// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The partition iterator.
//!
//! # Encoding
//!
//! A partition of `n` elements is held as a *restricted growth string*:
//! `codes[i]` is the block index of element `i`, with `codes[0] == 0` and
//! `codes[i] <= 1 + max(codes[..i])`. Every partition has exactly one such
//! string, so stepping through them in lexicographic order visits each
//! partition once.
//!
//! ```text
//! codes   blocks
//! 0 0 0   {a b c}
//! 0 0 1   {a b} {c}
//! 0 1 0   {a c} {b}
//! 0 1 1   {a} {b c}
//! 0 1 2   {a} {b} {c}
//! ```
//!
//! This is the iterative form of the recursive construction (every
//! partition of `S ∪ {x}` comes from a partition of `S` by putting `x` into
//! an existing block or a new one) and needs only O(n) state.

use crate::bell_number;
use std::iter::FusedIterator;

/// One partition: blocks ordered by their first element, elements within
/// a block in input order.
pub type Partition<'a, T> = Vec<Vec<&'a T>>;

/// Returns a lazy iterator over every partition of `items`.
///
/// The first partition is the single block holding everything; the last
/// is all singletons. An empty slice yields exactly one partition with no
/// blocks. Calling `partitions` again (or cloning the iterator) restarts
/// the enumeration.
///
/// # Example
/// ```
/// use set_partitions::partitions;
///
/// let items = ['a', 'b', 'c'];
/// let all: Vec<_> = partitions(&items).collect();
/// assert_eq!(all.len(), 5);
/// assert_eq!(all[0], vec![vec![&'a', &'b', &'c']]);
/// ```
pub fn partitions<T>(items: &[T]) -> Partitions<'_, T> {
    Partitions::new(items)
}

/// Iterator over the partitions of a slice. See [`partitions`].
#[derive(Debug, Clone)]
pub struct Partitions<'a, T> {
    items: &'a [T],
    codes: Vec<usize>,
    /// Partitions still to be produced, when Bell(n) fits in a `u128`.
    remaining: Option<u128>,
    done: bool,
}

impl<'a, T> Partitions<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self {
            items,
            codes: vec![0; items.len()],
            remaining: bell_number(items.len()),
            done: false,
        }
    }

    /// Number of elements being partitioned.
    pub fn num_elements(&self) -> usize {
        self.items.len()
    }

    /// Materialises the partition described by the current codes.
    fn current(&self) -> Partition<'a, T> {
        let num_blocks = self.codes.iter().max().map_or(0, |&m| m + 1);
        let mut blocks: Vec<Vec<&'a T>> = vec![Vec::new(); num_blocks];
        for (item, &code) in self.items.iter().zip(&self.codes) {
            blocks[code].push(item);
        }
        blocks
    }

    /// Steps to the next restricted growth string. Returns `false` once
    /// the all-singletons partition has been passed.
    fn advance(&mut self) -> bool {
        // prefix_max[i] = max(codes[..=i])
        let mut prefix_max = Vec::with_capacity(self.codes.len());
        let mut running = 0;
        for &code in &self.codes {
            running = running.max(code);
            prefix_max.push(running);
        }

        for i in (1..self.codes.len()).rev() {
            if self.codes[i] <= prefix_max[i - 1] {
                self.codes[i] += 1;
                for code in &mut self.codes[i + 1..] {
                    *code = 0;
                }
                return true;
            }
        }
        false
    }
}

impl<'a, T> Iterator for Partitions<'a, T> {
    type Item = Partition<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let partition = self.current();
        self.done = !self.advance();
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(partition)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Partitions<'_, T> {}
