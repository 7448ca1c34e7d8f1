// SPDX-License-Identifier: MPL-2.0
//! Visual transform of the top card.
//!
//! While dragging the card follows the pointer horizontally, lags
//! vertically and tilts with the horizontal offset. After a commit it
//! slides one viewport width off screen while rotating to the exit angle.

use crate::domain::swipe::{ExitRotation, SwipeDirection};
use iced::Vector;

/// Vertical translation applied per unit of vertical drag.
pub const VERTICAL_DAMPING: f32 = 0.1;

/// Degrees of tilt per unit of horizontal drag.
pub const TILT_DEGREES_PER_UNIT: f32 = 0.1;

/// Translation and rotation applied around the card center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translation: Vector,
    /// Clockwise rotation in degrees.
    pub rotation_degrees: f32,
}

impl CardTransform {
    pub const IDENTITY: Self = Self {
        translation: Vector::new(0.0, 0.0),
        rotation_degrees: 0.0,
    };

    /// Transform that follows a live drag offset.
    #[must_use]
    pub fn dragging(offset: Vector) -> Self {
        Self {
            translation: Vector::new(offset.x, offset.y * VERTICAL_DAMPING),
            rotation_degrees: offset.x * TILT_DEGREES_PER_UNIT,
        }
    }

    /// Pose of a committed card, `progress` in `[0, 1]` through the exit.
    ///
    /// `travel` is the horizontal distance that takes the card fully off
    /// screen (the viewport width).
    #[must_use]
    pub fn exiting(
        direction: SwipeDirection,
        travel: f32,
        rotation: ExitRotation,
        progress: f32,
    ) -> Self {
        let t = ease_out(progress.clamp(0.0, 1.0));
        let sign = direction.sign();
        Self {
            translation: Vector::new(sign * travel * t, 0.0),
            rotation_degrees: sign * rotation.degrees() * t,
        }
    }

    /// Pose of a released card returning to rest from `offset`.
    #[must_use]
    pub fn settling(offset: Vector, progress: f32) -> Self {
        let remaining = 1.0 - ease_out(progress.clamp(0.0, 1.0));
        Self::dragging(offset * remaining)
    }

    #[must_use]
    pub fn rotation_radians(self) -> f32 {
        self.rotation_degrees.to_radians()
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Cubic ease-out, close to `cubic-bezier(0.4, 0, 0.2, 1)`.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
