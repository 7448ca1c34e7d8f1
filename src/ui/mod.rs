// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `State`, handles its own `Message` and reports what the app
//! must do through an `Effect`.
//!
//! - [`swipe_deck`] - Card stack driven by the swipe engine
//! - [`notifications`] - Toasts for swipe feedback and warnings
//! - [`design_tokens`] - Colors, spacing, sizing

pub mod design_tokens;
pub mod notifications;
pub mod swipe_deck;
