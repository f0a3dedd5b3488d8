// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for item loading and validation.

/// Errors that can occur when loading or validating an item collection.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    /// The item file could not be read.
    #[error("failed to read item file: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not parse into an `identifier,weight` pair.
    #[error("malformed line {line} ('{content}'): {detail}")]
    MalformedLine {
        line: usize,
        content: String,
        detail: String,
    },

    /// The same identifier appears more than once.
    #[error("duplicate item identifier '{id}'")]
    DuplicateItem { id: String },

    /// An item violates the data model (empty identifier, zero weight).
    #[error("invalid item '{id}': {detail}")]
    InvalidItem { id: String, detail: String },
}
