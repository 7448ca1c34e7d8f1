// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`catalog`]: Product types ([`Item`](catalog::Item), [`ItemId`](catalog::ItemId),
//!   [`Price`](catalog::Price), [`ItemStatus`](catalog::ItemStatus))
//! - [`swipe`]: Swipe decisions and tuning values ([`Decision`](swipe::Decision),
//!   [`SwipeThresholds`](swipe::SwipeThresholds), [`ExitDuration`](swipe::ExitDuration))

pub mod catalog;
pub mod swipe;
