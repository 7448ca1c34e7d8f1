// SPDX-License-Identifier: MPL-2.0
//! Feedback message selection for committed swipes.
//!
//! Strategies return Fluent message keys; the host resolves them through
//! i18n and shows the result in a toast.

use crate::domain::swipe::Decision;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Message keys shown after an accept.
pub const ACCEPT_MESSAGES: [&str; 3] = [
    "feedback-accept-wishlist",
    "feedback-accept-great-choice",
    "feedback-accept-matched-taste",
];

/// Message keys shown after a reject.
pub const REJECT_MESSAGES: [&str; 3] = [
    "feedback-reject-not-your-style",
    "feedback-reject-maybe-next-time",
    "feedback-reject-skip-it",
];

/// Returns the message pool for a decision.
#[must_use]
pub fn messages_for(decision: Decision) -> &'static [&'static str] {
    match decision {
        Decision::Accept => &ACCEPT_MESSAGES,
        Decision::Reject => &REJECT_MESSAGES,
    }
}

/// Picks the feedback message key for a decision.
pub trait FeedbackStrategy {
    fn message_key(&mut self, decision: Decision) -> &'static str;
}

/// Picks uniformly at random from the pool of the decision.
#[derive(Debug, Clone)]
pub struct RandomFeedback {
    rng: StdRng,
}

impl RandomFeedback {
    /// Seeds from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence, for tests and demos.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackStrategy for RandomFeedback {
    fn message_key(&mut self, decision: Decision) -> &'static str {
        let pool = messages_for(decision);
        pool[self.rng.gen_range(0..pool.len())]
    }
}

/// Always returns the first message of the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFeedback;

impl FeedbackStrategy for FixedFeedback {
    fn message_key(&mut self, decision: Decision) -> &'static str {
        messages_for(decision)[0]
    }
}

/// Adapts a closure into a strategy.
pub struct FeedbackFn<F>(pub F);

impl<F> FeedbackStrategy for FeedbackFn<F>
where
    F: FnMut(Decision) -> &'static str,
{
    fn message_key(&mut self, decision: Decision) -> &'static str {
        (self.0)(decision)
    }
}
