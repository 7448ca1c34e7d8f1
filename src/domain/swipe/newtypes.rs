// SPDX-License-Identifier: MPL-2.0
//! Swipe tuning newtypes.
//!
//! This module provides type-safe wrappers for gesture thresholds and
//! exit animation parameters, ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Threshold Bounds
// =============================================================================

/// Threshold bounds in logical units.
pub mod threshold_bounds {
    /// Smallest accepted threshold.
    pub const MIN: f32 = 1.0;
    /// Largest accepted threshold.
    pub const MAX: f32 = 2000.0;
    /// Default distance at which a direction indicator appears.
    pub const DEFAULT_PEEK: f32 = 80.0;
    /// Default distance at which releasing the card commits the swipe.
    pub const DEFAULT_COMMIT: f32 = 120.0;
}

// =============================================================================
// PeekThreshold
// =============================================================================

/// Horizontal distance from which a direction indicator is shown.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PeekThreshold(f32);

impl PeekThreshold {
    /// Creates a new peek threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(units: f32) -> Self {
        Self(clamp_threshold(units, threshold_bounds::DEFAULT_PEEK))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for PeekThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_PEEK)
    }
}

// =============================================================================
// CommitThreshold
// =============================================================================

/// Horizontal distance from which releasing the card commits a decision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CommitThreshold(f32);

impl CommitThreshold {
    /// Creates a new commit threshold, clamping the value to the valid range.
    #[must_use]
    pub fn new(units: f32) -> Self {
        Self(clamp_threshold(units, threshold_bounds::DEFAULT_COMMIT))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for CommitThreshold {
    fn default() -> Self {
        Self(threshold_bounds::DEFAULT_COMMIT)
    }
}

fn clamp_threshold(units: f32, fallback: f32) -> f32 {
    if units.is_finite() {
        units.clamp(threshold_bounds::MIN, threshold_bounds::MAX)
    } else {
        fallback
    }
}

// =============================================================================
// SwipeThresholds
// =============================================================================

/// Peek and commit thresholds, with `commit > peek` guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    peek: PeekThreshold,
    commit: CommitThreshold,
}

/// Rejected threshold pair (commit not strictly above peek).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidThresholds {
    pub peek: f32,
    pub commit: f32,
}

impl fmt::Display for InvalidThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commit threshold ({}) must be greater than peek threshold ({})",
            self.commit, self.peek
        )
    }
}

impl std::error::Error for InvalidThresholds {}

impl SwipeThresholds {
    /// Builds a threshold pair.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThresholds`] when the commit threshold is not strictly
    /// greater than the peek threshold (after clamping).
    pub fn new(peek: PeekThreshold, commit: CommitThreshold) -> Result<Self, InvalidThresholds> {
        if commit.value() > peek.value() {
            Ok(Self { peek, commit })
        } else {
            Err(InvalidThresholds {
                peek: peek.value(),
                commit: commit.value(),
            })
        }
    }

    #[must_use]
    pub fn peek(self) -> PeekThreshold {
        self.peek
    }

    #[must_use]
    pub fn commit(self) -> CommitThreshold {
        self.commit
    }

    /// Returns whether `|dx|` is far enough to show an indicator.
    #[must_use]
    pub fn is_peeking(self, dx: f32) -> bool {
        dx.abs() >= self.peek.value()
    }

    /// Returns whether `|dx|` is far enough to commit on release.
    #[must_use]
    pub fn is_committing(self, dx: f32) -> bool {
        dx.abs() >= self.commit.value()
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            peek: PeekThreshold::default(),
            commit: CommitThreshold::default(),
        }
    }
}

// =============================================================================
// ExitDuration
// =============================================================================

/// Exit animation duration bounds in milliseconds.
pub mod exit_duration_bounds {
    pub const MIN_MS: u64 = 50;
    pub const MAX_MS: u64 = 5000;
    pub const DEFAULT_MS: u64 = 300;
}

/// How long a committed card takes to fly off screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExitDuration(Duration);

impl ExitDuration {
    /// Creates a new duration, clamping to 50 ms–5 s.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.clamp(
            exit_duration_bounds::MIN_MS,
            exit_duration_bounds::MAX_MS,
        )))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // bounded by MAX_MS
    pub fn as_millis(self) -> u64 {
        self.0.as_millis() as u64
    }
}

impl Default for ExitDuration {
    fn default() -> Self {
        Self(Duration::from_millis(exit_duration_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// ExitRotation
// =============================================================================

/// Exit rotation bounds in degrees.
pub mod exit_rotation_bounds {
    pub const MIN_DEG: f32 = 0.0;
    pub const MAX_DEG: f32 = 90.0;
    pub const DEFAULT_DEG: f32 = 15.0;
}

/// Magnitude of the card rotation at the end of the exit animation.
///
/// The sign comes from the swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExitRotation(f32);

impl ExitRotation {
    /// Creates a new rotation magnitude, clamping to 0°–90°.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self::default();
        }
        Self(
            degrees
                .abs()
                .clamp(exit_rotation_bounds::MIN_DEG, exit_rotation_bounds::MAX_DEG),
        )
    }

    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }
}

impl Default for ExitRotation {
    fn default() -> Self {
        Self(exit_rotation_bounds::DEFAULT_DEG)
    }
}
