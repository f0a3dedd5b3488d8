// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! A single weighted item.
//!
//! An [`Item`] is the unit the allocators place into groups: a unique
//! identifier plus a positive integer weight. Items are immutable once
//! loaded; strategies only ever hold references to them.

use std::fmt;

/// A labelled, weighted item (a cow in the original problem set).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// Unique identifier within its collection.
    pub id: String,
    /// Weight in whatever unit the capacity is expressed in.
    pub weight: u64,
}

impl Item {
    /// Creates an item. Validation happens when the item joins an
    /// [`crate::ItemSet`].
    pub fn new(id: impl Into<String>, weight: u64) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }

    /// Returns a one-line description, e.g. `"Betsy (9)"`.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.id, self.weight)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.weight)
    }
}

/// Sums the weights of a group of items, saturating at `u64::MAX`.
pub fn total_weight<'a, I>(items: I) -> u64
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .fold(0, |total, item| total.saturating_add(item.weight))
}

/// Sums the weights of a group of items. Returns `None` on overflow.
pub fn checked_total_weight<'a, I>(items: I) -> Option<u64>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .try_fold(0u64, |total, item| total.checked_add(item.weight))
}
