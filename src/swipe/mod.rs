// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture engine.
//!
//! Converts a continuous pointer drag on the top card into a discrete
//! accept/reject [`Decision`](crate::domain::swipe::Decision) and advances
//! the [`Deck`](crate::deck::Deck).
//!
//! ## Architecture
//!
//! ```text
//! engine     - Phase machine (Idle / Dragging / Committing), owns the deck
//! gesture    - Pointer tracking and offset computation
//! observer   - Callback trait the engine reports through
//! feedback   - Decision -> message key strategies
//! transform  - Engine state -> card translation/rotation
//! ```
//!
//! The engine has no timers. A commit returns a [`CommitTicket`]; the host
//! waits `ticket.duration` and then calls
//! [`SwipeEngine::complete_commit`].

pub mod engine;
pub mod feedback;
pub mod gesture;
pub mod observer;
pub mod transform;

pub use engine::{
    CommitTicket, GestureOutcome, Phase, PointerEvent, PointerKind, SwipeEngine, SwipeSettings,
};
pub use feedback::{FeedbackStrategy, FixedFeedback, RandomFeedback};
pub use gesture::{GestureAnchor, GestureState};
pub use observer::{SwipeEvent, SwipeObserver};
pub use transform::CardTransform;
