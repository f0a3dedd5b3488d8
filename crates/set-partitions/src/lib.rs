// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # set-partitions
//!
//! Enumerates every way to split a collection into non-empty, disjoint
//! blocks whose union is the whole collection.
//!
//! - [`partitions`] — a lazy, restartable iterator producing exactly
//!   Bell(n) partitions of an `n`-element slice.
//! - [`bell_number`] — the expected count, for sizing searches up front.
//!
//! # Complexity
//!
//! A full pass costs O(Bell(n) · n) time. Memory stays at O(n) beyond the
//! partition currently yielded, so callers can stop early without ever
//! holding the whole sequence.
//!
//! # Example
//! ```
//! use set_partitions::{bell_number, partitions};
//!
//! let herd = ["Maggie", "Herman", "Betsy"];
//! for partition in partitions(&herd) {
//!     println!("{partition:?}");
//! }
//! assert_eq!(partitions(&herd).count() as u128, bell_number(3).unwrap());
//! ```

mod bell;
mod partitions;

pub use bell::bell_number;
pub use partitions::{partitions, Partition, Partitions};
