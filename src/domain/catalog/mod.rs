// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! Items are immutable once loaded into a deck. Per-session reactions are
//! tracked separately as [`ItemStatus`] values keyed by [`ItemId`].

mod types;

pub use types::{Item, ItemId, ItemStatus, Price};
