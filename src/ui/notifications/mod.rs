// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Swipe feedback ("Great choice!", "Skip it!") and config warnings are shown
//! as toasts that dismiss themselves.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its `Tone`
//! - [`manager`] - `Manager` for queuing and expiry
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::feedback(Decision::Accept, "feedback-accept-wishlist"));
//!
//! // In the view
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! At most 3 toasts are visible; feedback toasts last 2 s, warnings 5 s.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Tone};
pub use toast::Toast;
