// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Redraws on every frame while the deck is moving on its own (exit
/// animation, snap back, badge fades).
pub fn create_animation_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
