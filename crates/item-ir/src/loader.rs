// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Loading item collections from delimited text.
//!
//! # Format
//! One `identifier,weight` pair per line:
//!
//! ```text
//! Maggie,3
//! Herman,7
//! Betsy,9
//! ```
//!
//! Surrounding whitespace is ignored and blank lines are skipped. Every
//! other line must contain exactly one comma, a non-empty identifier and a
//! positive integer weight; anything else is a [`ItemError::MalformedLine`].

use crate::set::Validated;
use crate::{Item, ItemError, ItemSet};
use std::path::Path;

/// Loads item files into a validated [`ItemSet`].
///
/// # Example
/// ```
/// use item_ir::ItemLoader;
///
/// let set = ItemLoader::parse("herd", "Maggie,3\nHerman,7\n").unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_weight(), 10);
/// ```
pub struct ItemLoader;

impl ItemLoader {
    /// Reads and validates the item file at `path`.
    ///
    /// The set is named after the file stem.
    pub fn load(path: &Path) -> Result<ItemSet<Validated>, ItemError> {
        let content = std::fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "items".to_string());

        let set = Self::parse(&name, &content)?;
        tracing::info!("loaded {} items from '{}'", set.len(), path.display());
        Ok(set)
    }

    /// Parses and validates item text.
    pub fn parse(name: &str, content: &str) -> Result<ItemSet<Validated>, ItemError> {
        let mut items = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if let Some(item) = parse_line(i + 1, line)? {
                items.push(item);
            }
        }
        ItemSet::new(name, items).validate()
    }
}

/// Parses a single line. Returns `Ok(None)` for blank lines.
fn parse_line(line_no: usize, line: &str) -> Result<Option<Item>, ItemError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let malformed = |detail: &str| ItemError::MalformedLine {
        line: line_no,
        content: trimmed.to_string(),
        detail: detail.to_string(),
    };

    let (id, weight) = trimmed
        .split_once(',')
        .ok_or_else(|| malformed("expected 'identifier,weight'"))?;
    if weight.contains(',') {
        return Err(malformed("too many fields"));
    }

    let id = id.trim();
    if id.is_empty() {
        return Err(malformed("identifier is empty"));
    }

    let weight: u64 = weight
        .trim()
        .parse()
        .map_err(|_| malformed("weight is not a positive integer"))?;
    if weight == 0 {
        return Err(malformed("weight must be positive"));
    }

    Ok(Some(Item::new(id, weight)))
}
