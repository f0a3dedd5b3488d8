// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # item-ir
//!
//! The data model for capacity-constrained allocation:
//!
//! - [`Item`] — a unique identifier plus a positive integer weight.
//! - [`ItemSet`] — an ordered collection of items with a **type-state
//!   pattern** (`Loaded` → `Validated`).
//! - [`ItemLoader`] — reads `identifier,weight` text files.
//!
//! # Example
//! ```
//! use item_ir::ItemSet;
//!
//! let set = ItemSet::from_pairs("herd", [("Maggie", 3), ("Herman", 7)])
//!     .validate()
//!     .unwrap();
//! println!("{}", set.summary());
//! ```

mod error;
mod item;
mod loader;
pub mod set;

pub use error::ItemError;
pub use item::{checked_total_weight, total_weight, Item};
pub use loader::ItemLoader;
pub use set::ItemSet;
