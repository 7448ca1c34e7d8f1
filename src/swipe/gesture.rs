// SPDX-License-Identifier: MPL-2.0
//! Transient drag state for the top card.

use iced::{Point, Rectangle, Vector};
use serde::{Deserialize, Serialize};

/// Point the drag offset is measured from.
///
/// With `CardCenter` a press away from the center already counts as a
/// drag of that distance: pressing 140 units right of center and nudging
/// the pointer is enough to commit. `PressPoint` measures only the motion
/// since the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureAnchor {
    /// Offset is the pointer position relative to the card center.
    #[default]
    CardCenter,
    /// Offset is the pointer position relative to where the press started.
    PressPoint,
}

/// Live pointer tracking, alive between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureState {
    origin: Point,
    reference: Point,
    offset: Vector,
    anchor: GestureAnchor,
}

impl GestureState {
    /// Starts tracking at `origin`; the offset starts at zero.
    #[must_use]
    pub fn begin(origin: Point, card_bounds: Rectangle, anchor: GestureAnchor) -> Self {
        let reference = match anchor {
            GestureAnchor::CardCenter => card_bounds.center(),
            GestureAnchor::PressPoint => origin,
        };
        Self {
            origin,
            reference,
            offset: Vector::new(0.0, 0.0),
            anchor,
        }
    }

    /// Recomputes the offset for a new pointer position.
    ///
    /// With [`GestureAnchor::CardCenter`] the reference follows the card
    /// bounds reported by the host on every move.
    pub fn track(&mut self, position: Point, card_bounds: Rectangle) -> Vector {
        if self.anchor == GestureAnchor::CardCenter {
            self.reference = card_bounds.center();
        }
        self.offset = position - self.reference;
        self.offset
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }
}
