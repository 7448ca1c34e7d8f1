// SPDX-License-Identifier: MPL-2.0
//! `swipe_shop` is a swipe-to-decide product discovery deck built with the
//! Iced GUI framework.
//!
//! Drag the top card right to save a product or left to skip it. The
//! gesture engine in [`swipe`] is independent of the UI and can be driven by
//! any pointer source; [`ui::swipe_deck`] renders it on a canvas.

#![doc(html_root_url = "https://docs.rs/swipe_shop/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod swipe;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
