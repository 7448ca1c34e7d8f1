// SPDX-License-Identifier: MPL-2.0
//! Swipe domain types.
//!
//! A horizontal drag on the top card resolves into a [`Decision`]. The
//! thresholds and exit animation parameters are validated newtypes so the
//! engine never has to re-check ranges.

pub mod newtypes;

pub use newtypes::{
    CommitThreshold, ExitDuration, ExitRotation, InvalidThresholds, PeekThreshold,
    SwipeThresholds,
};

/// Outcome of a committed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Swiped right: keep the item.
    Accept,
    /// Swiped left: skip the item.
    Reject,
}

impl Decision {
    /// Direction the card leaves the screen in.
    #[must_use]
    pub fn direction(self) -> SwipeDirection {
        match self {
            Decision::Accept => SwipeDirection::Right,
            Decision::Reject => SwipeDirection::Left,
        }
    }
}

/// Horizontal side of the card, used for indicators and exit animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Direction matching the sign of a horizontal offset.
    ///
    /// Returns `None` for a zero (or NaN) offset.
    #[must_use]
    pub fn from_dx(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(SwipeDirection::Right)
        } else if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }

    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
        }
    }

    /// Decision produced by a committed swipe in this direction.
    #[must_use]
    pub fn decision(self) -> Decision {
        match self {
            SwipeDirection::Left => Decision::Reject,
            SwipeDirection::Right => Decision::Accept,
        }
    }
}
