// SPDX-License-Identifier: MPL-2.0
//! Output side of the swipe engine.
//!
//! The engine never touches the view tree; it reports what changed through
//! a [`SwipeObserver`] passed into each call.

use crate::domain::catalog::{Item, ItemId};
use crate::domain::swipe::{Decision, SwipeDirection};
use iced::Vector;

/// Receives engine notifications. Every method defaults to a no-op.
pub trait SwipeObserver {
    /// Live drag offset changed (also fired with zero on release).
    fn on_offset_changed(&mut self, _offset: Vector) {}

    /// An indicator was shown or hidden.
    fn on_indicator_visibility(&mut self, _direction: SwipeDirection, _visible: bool) {}

    /// A decision was committed on `item`.
    fn on_decision(&mut self, _decision: Decision, _item: &Item) {}

    /// The deck moved on after a commit.
    fn on_card_advanced(&mut self, _current: Option<&Item>, _next: Option<&Item>) {}
}

/// Discards every notification.
impl SwipeObserver for () {}

/// Owned copy of an engine notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeEvent {
    OffsetChanged(Vector),
    IndicatorVisibility {
        direction: SwipeDirection,
        visible: bool,
    },
    Decided {
        decision: Decision,
        item: ItemId,
    },
    CardAdvanced {
        current: Option<ItemId>,
        next: Option<ItemId>,
    },
}

/// Buffers notifications so the caller can process them after the engine
/// call returns.
impl SwipeObserver for Vec<SwipeEvent> {
    fn on_offset_changed(&mut self, offset: Vector) {
        self.push(SwipeEvent::OffsetChanged(offset));
    }

    fn on_indicator_visibility(&mut self, direction: SwipeDirection, visible: bool) {
        self.push(SwipeEvent::IndicatorVisibility { direction, visible });
    }

    fn on_decision(&mut self, decision: Decision, item: &Item) {
        self.push(SwipeEvent::Decided {
            decision,
            item: item.id().clone(),
        });
    }

    fn on_card_advanced(&mut self, current: Option<&Item>, next: Option<&Item>) {
        self.push(SwipeEvent::CardAdvanced {
            current: current.map(|i| i.id().clone()),
            next: next.map(|i| i.id().clone()),
        });
    }
}
