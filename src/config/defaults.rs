// SPDX-License-Identifier: MPL-2.0
//! Default values for the persisted swipe settings.
//!
//! Bounds live next to the domain newtypes; this module re-states the
//! defaults in the units used by `settings.toml`.

use crate::domain::swipe::newtypes::{exit_duration_bounds, exit_rotation_bounds, threshold_bounds};

// ==========================================================================
// Threshold Defaults
// ==========================================================================

/// Default horizontal distance at which the direction badge appears.
pub const DEFAULT_PEEK_THRESHOLD: f32 = threshold_bounds::DEFAULT_PEEK;

/// Default horizontal distance past which a release commits the swipe.
pub const DEFAULT_COMMIT_THRESHOLD: f32 = threshold_bounds::DEFAULT_COMMIT;

// ==========================================================================
// Exit Animation Defaults
// ==========================================================================

/// Default exit animation duration (in milliseconds).
pub const DEFAULT_EXIT_DURATION_MS: u64 = exit_duration_bounds::DEFAULT_MS;

/// Default exit rotation (in degrees).
pub const DEFAULT_EXIT_ROTATION_DEG: f32 = exit_rotation_bounds::DEFAULT_DEG;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a feedback toast stays on screen (in milliseconds).
pub const FEEDBACK_TOAST_MS: u64 = 2000;
