// SPDX-License-Identifier: MPL-2.0
//! Notification data: what a toast says and how long it lives.

use crate::config::FEEDBACK_TOAST_MS;
use crate::domain::swipe::Decision;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// A product was saved or liked.
    #[default]
    Saved,
    /// A product was skipped.
    Skipped,
    /// Something went wrong but the app keeps running (bad config).
    Warning,
}

impl Tone {
    #[must_use]
    pub fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::Accept => Tone::Saved,
            Decision::Reject => Tone::Skipped,
        }
    }

    /// Accent color of the toast border.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Tone::Saved => palette::SAVE_500,
            Tone::Skipped => palette::SKIP_500,
            Tone::Warning => palette::WARNING_500,
        }
    }

    /// Time on screen before the toast goes away on its own.
    #[must_use]
    pub fn lifetime(self) -> Duration {
        match self {
            Tone::Saved | Tone::Skipped => Duration::from_millis(FEEDBACK_TOAST_MS),
            Tone::Warning => Duration::from_secs(5),
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    tone: Tone,
    /// The i18n key, resolved at render time.
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    lifetime: Duration,
}

impl Notification {
    pub fn new(tone: Tone, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            tone,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            lifetime: tone.lifetime(),
        }
    }

    /// Feedback toast for a committed swipe.
    pub fn feedback(decision: Decision, message_key: impl Into<String>) -> Self {
        Self::new(Tone::from_decision(decision), message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Tone::Warning, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns whether the toast has outlived its lifetime at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::warning("test");
        let n2 = Notification::warning("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn feedback_tone_follows_decision() {
        assert_eq!(Notification::feedback(Decision::Accept, "k").tone(), Tone::Saved);
        assert_eq!(Notification::feedback(Decision::Reject, "k").tone(), Tone::Skipped);
    }

    #[test]
    fn feedback_toasts_last_two_seconds() {
        assert_eq!(Tone::Saved.lifetime(), Duration::from_secs(2));
        assert_eq!(Tone::Skipped.lifetime(), Duration::from_secs(2));
        assert!(Tone::Warning.lifetime() > Tone::Saved.lifetime());
    }

    #[test]
    fn expiry_uses_lifetime() {
        let notification = Notification::feedback(Decision::Accept, "k");
        let start = Instant::now();
        assert!(!notification.is_expired_at(start));
        assert!(notification.is_expired_at(start + Duration::from_secs(3)));
    }

    #[test]
    fn warnings_outlive_feedback() {
        let warning = Notification::warning("k");
        let start = Instant::now();
        assert!(!warning.is_expired_at(start + Duration::from_secs(3)));
        assert!(warning.is_expired_at(start + Duration::from_secs(6)));
    }

    #[test]
    fn args_are_kept_in_order() {
        let notification = Notification::warning("k")
            .with_arg("peek", "120")
            .with_arg("commit", "80");
        assert_eq!(notification.message_args()[0].0, "peek");
        assert_eq!(notification.message_args()[1].1, "80");
    }

    #[test]
    fn tone_colors_are_distinct() {
        assert_ne!(Tone::Saved.color(), Tone::Skipped.color());
        assert_ne!(Tone::Saved.color(), Tone::Warning.color());
    }
}
