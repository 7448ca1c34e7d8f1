// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::ExhaustionMode;
use crate::ui::notifications;
use crate::ui::swipe_deck;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwipeDeck(swipe_deck::Message),
    Notification(notifications::NotificationMessage),
    /// Animation frame or notification expiry check.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SWIPE_SHOP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Deck behavior after the last card, overriding the config file.
    pub exhaustion: Option<ExhaustionMode>,
}
