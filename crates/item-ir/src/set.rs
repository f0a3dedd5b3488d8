// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Item collections.
//!
//! # Type-State Pattern
//!
//! ```text
//! ItemSet<Loaded>     — items parsed, not yet checked.
//!       │  .validate()
//!       ▼
//! ItemSet<Validated>  — identifiers unique, weights positive.
//! ```
//!
//! Allocation strategies only accept `ItemSet<Validated>`, so they never
//! see duplicate identifiers or zero weights. The marker types are
//! zero-sized; the transition consumes the loaded set.

use crate::{Item, ItemError};
use std::collections::HashSet;
use std::fmt;

// ── Type-state markers ─────────────────────────────────────────────

/// Marker: items have been loaded but not validated.
#[derive(Debug, Clone)]
pub struct Loaded;

/// Marker: items have been validated and are ready for allocation.
#[derive(Debug, Clone)]
pub struct Validated;

/// Sealed trait for set states.
pub trait SetState: fmt::Debug + Clone {}
impl SetState for Loaded {}
impl SetState for Validated {}

// ── ItemSet ────────────────────────────────────────────────────────

/// An ordered collection of items keyed by identifier.
///
/// Order is the load order and is what strategies use to break ties, so
/// results are reproducible for a given input file.
#[derive(Debug, Clone)]
pub struct ItemSet<S: SetState = Loaded> {
    /// Human-readable name of the collection (usually the file stem).
    pub name: String,
    items: Vec<Item>,
    _state: std::marker::PhantomData<S>,
}

// ── Loaded state ───────────────────────────────────────────────────

impl ItemSet<Loaded> {
    /// Creates a new set in the `Loaded` state.
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            _state: std::marker::PhantomData,
        }
    }

    /// Builds a set from `(identifier, weight)` pairs.
    pub fn from_pairs<I, K>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let items = pairs
            .into_iter()
            .map(|(id, weight)| Item::new(id, weight))
            .collect();
        Self::new(name, items)
    }

    /// Validates the set and transitions to the `Validated` state.
    ///
    /// # Checks
    /// - Identifiers are non-empty and contain no surrounding whitespace.
    /// - Weights are strictly positive.
    /// - Identifiers are unique. Duplicates are rejected rather than
    ///   silently overwritten.
    pub fn validate(self) -> Result<ItemSet<Validated>, ItemError> {
        self.check_items()?;

        tracing::debug!("validated {} items in '{}'", self.items.len(), self.name);

        Ok(ItemSet {
            name: self.name,
            items: self.items,
            _state: std::marker::PhantomData,
        })
    }

    fn check_items(&self) -> Result<(), ItemError> {
        let mut seen = HashSet::with_capacity(self.items.len());

        for item in &self.items {
            if item.id.is_empty() || item.id.trim() != item.id {
                return Err(ItemError::InvalidItem {
                    id: item.id.clone(),
                    detail: "identifier must be non-empty and trimmed".into(),
                });
            }
            if item.weight == 0 {
                return Err(ItemError::InvalidItem {
                    id: item.id.clone(),
                    detail: "weight must be a positive integer".into(),
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(ItemError::DuplicateItem {
                    id: item.id.clone(),
                });
            }
        }

        Ok(())
    }
}

// ── Validated state ────────────────────────────────────────────────

impl ItemSet<Validated> {
    /// Returns the items in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the total weight of every item, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        crate::total_weight(&self.items)
    }

    /// Returns the heaviest item. Ties go to the first loaded.
    pub fn heaviest(&self) -> Option<&Item> {
        self.items
            .iter()
            .reduce(|best, item| if item.weight > best.weight { item } else { best })
    }

    /// Returns the weight of the item with the given identifier.
    pub fn weight_of(&self, id: &str) -> Option<u64> {
        self.get(id).map(|item| item.weight)
    }

    /// Looks up an item by identifier.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns a summary string describing the set.
    pub fn summary(&self) -> String {
        let heaviest = self
            .heaviest()
            .map(Item::summary)
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Items '{}': {} items, total weight {}, heaviest {}",
            self.name,
            self.len(),
            self.total_weight(),
            heaviest,
        )
    }
}

// ── Shared implementations ─────────────────────────────────────────

impl<S: SetState> ItemSet<S> {
    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the items in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl<S: SetState> fmt::Display for ItemSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ItemSet '{}' ({} items):", self.name, self.items.len())?;
        for item in &self.items {
            writeln!(f, "  {}", item.summary())?;
        }
        Ok(())
    }
}
