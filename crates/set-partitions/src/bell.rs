// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Bell numbers.

/// Returns Bell(n), the number of partitions of an `n`-element set, or
/// `None` if it does not fit in a `u128`.
///
/// Computed with the Bell triangle: each row starts with the last entry of
/// the previous row, and every further entry is the sum of its left
/// neighbour and the entry above that neighbour.
///
/// ```
/// use set_partitions::bell_number;
///
/// assert_eq!(bell_number(0), Some(1));
/// assert_eq!(bell_number(5), Some(52));
/// ```
pub fn bell_number(n: usize) -> Option<u128> {
    let mut row: Vec<u128> = vec![1];
    for _ in 0..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(*row.last()?);
        for &above in &row {
            let left = *next.last()?;
            next.push(left.checked_add(above)?);
        }
        row = next;
    }
    row.first().copied()
}
