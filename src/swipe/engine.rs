// SPDX-License-Identifier: MPL-2.0
//! Swipe engine: turns a drag on the top card into a decision and advances
//! the deck.
//!
//! ```text
//!            begin_gesture           end_gesture (|dx| >= commit)
//!   Idle ───────────────► Dragging ─────────────────────────► Committing
//!    ▲ ▲                   │  ▲ update_gesture                    │
//!    │ └───────────────────┘  └──┘                                │
//!    │   end_gesture (snap back) / cancel_gesture                 │
//!    │                                                            │
//!    └──────────────────────── complete_commit ◄──────────────────┘
//!
//!   Idle ── commit(decision) ──► Committing   (button-driven swipe)
//! ```
//!
//! Calls that do not match the current phase are no-ops.

use super::gesture::{GestureAnchor, GestureState};
use super::observer::SwipeObserver;
use crate::deck::{Advance, Deck};
use crate::domain::catalog::{Item, ItemId, ItemStatus};
use crate::domain::swipe::{
    Decision, ExitDuration, ExitRotation, SwipeDirection, SwipeThresholds,
};
use iced::{Point, Rectangle, Vector};
use std::time::Duration;
use tracing::{debug, info};

/// Engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for a gesture.
    #[default]
    Idle,
    /// A pointer is down on the top card.
    Dragging,
    /// The top card is flying off screen; input is ignored.
    Committing,
}

/// Tuning values for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwipeSettings {
    pub thresholds: SwipeThresholds,
    pub exit_duration: ExitDuration,
    pub exit_rotation: ExitRotation,
    pub anchor: GestureAnchor,
}

/// A committed swipe whose exit animation is running.
///
/// The host must call [`SwipeEngine::complete_commit`] once `duration` has
/// elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitTicket {
    pub decision: Decision,
    pub item: ItemId,
    pub duration: Duration,
    pub rotation: ExitRotation,
}

impl CommitTicket {
    #[must_use]
    pub fn direction(&self) -> SwipeDirection {
        self.decision.direction()
    }
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// No gesture was active.
    Ignored,
    /// Released below the commit threshold; the card returns to rest.
    SnapBack,
    /// Released past the commit threshold.
    Committed(CommitTicket),
}

/// Kind of pointer/touch input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    /// Pointer left the card or the platform cancelled the touch.
    Cancel,
}

/// Pointer input tagged with the bounds of the top card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub card_bounds: Rectangle,
}

/// Owns the deck and the gesture state machine.
#[derive(Debug)]
pub struct SwipeEngine {
    deck: Deck,
    settings: SwipeSettings,
    phase: Phase,
    gesture: Option<GestureState>,
    indicator: Option<SwipeDirection>,
    pending: Option<CommitTicket>,
}

impl SwipeEngine {
    #[must_use]
    pub fn new(deck: Deck, settings: SwipeSettings) -> Self {
        Self {
            deck,
            settings,
            phase: Phase::Idle,
            gesture: None,
            indicator: None,
            pending: None,
        }
    }

    // =========================================================================
    // Gesture
    // =========================================================================

    /// Starts a drag on the top card.
    ///
    /// Returns `false` (and does nothing) when a gesture or commit is in
    /// progress, or when the deck is exhausted.
    pub fn begin_gesture(&mut self, position: Point, card_bounds: Rectangle) -> bool {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, "begin_gesture ignored");
            return false;
        }
        if self.deck.current().is_none() {
            debug!("begin_gesture ignored: deck exhausted");
            return false;
        }

        self.gesture = Some(GestureState::begin(
            position,
            card_bounds,
            self.settings.anchor,
        ));
        self.phase = Phase::Dragging;
        true
    }

    /// Tracks the pointer while dragging and updates the indicators.
    ///
    /// Returns the new offset, or `None` when no gesture is active. Never
    /// makes a decision.
    pub fn update_gesture<O>(
        &mut self,
        position: Point,
        card_bounds: Rectangle,
        observer: &mut O,
    ) -> Option<Vector>
    where
        O: SwipeObserver + ?Sized,
    {
        let gesture = self.gesture.as_mut()?;
        let offset = gesture.track(position, card_bounds);
        observer.on_offset_changed(offset);

        let target = if self.settings.thresholds.is_peeking(offset.x) {
            SwipeDirection::from_dx(offset.x)
        } else {
            None
        };
        self.show_indicator(target, observer);

        Some(offset)
    }

    /// Releases the pointer.
    ///
    /// Commits when `|dx|` reaches the commit threshold, otherwise snaps
    /// back. Either way the offset is reset and both indicators are hidden.
    pub fn end_gesture<O>(&mut self, observer: &mut O) -> GestureOutcome
    where
        O: SwipeObserver + ?Sized,
    {
        let Some(gesture) = self.release(observer) else {
            debug!("end_gesture ignored: no active gesture");
            return GestureOutcome::Ignored;
        };

        let dx = gesture.offset().x;
        let origin = gesture.origin();
        let direction = SwipeDirection::from_dx(dx)
            .filter(|_| self.settings.thresholds.is_committing(dx));

        match direction.and_then(|d| self.commit(d.decision(), observer)) {
            Some(ticket) => {
                debug!(dx, press_x = origin.x, press_y = origin.y, "released past commit");
                GestureOutcome::Committed(ticket)
            }
            None => {
                debug!(dx, press_x = origin.x, press_y = origin.y, "snap back");
                GestureOutcome::SnapBack
            }
        }
    }

    /// Abandons the gesture without a decision.
    ///
    /// Returns `false` when no gesture was active.
    pub fn cancel_gesture<O>(&mut self, observer: &mut O) -> bool
    where
        O: SwipeObserver + ?Sized,
    {
        self.release(observer).is_some()
    }

    /// Dispatches a host pointer event.
    ///
    /// Returns a ticket when the event committed a swipe.
    pub fn handle_pointer<O>(&mut self, event: PointerEvent, observer: &mut O) -> Option<CommitTicket>
    where
        O: SwipeObserver + ?Sized,
    {
        match event.kind {
            PointerKind::Down => {
                self.begin_gesture(event.position, event.card_bounds);
                None
            }
            PointerKind::Move => {
                self.update_gesture(event.position, event.card_bounds, observer);
                None
            }
            PointerKind::Up => match self.end_gesture(observer) {
                GestureOutcome::Committed(ticket) => Some(ticket),
                GestureOutcome::SnapBack | GestureOutcome::Ignored => None,
            },
            PointerKind::Cancel => {
                self.cancel_gesture(observer);
                None
            }
        }
    }

    fn release<O>(&mut self, observer: &mut O) -> Option<GestureState>
    where
        O: SwipeObserver + ?Sized,
    {
        if self.phase != Phase::Dragging {
            return None;
        }
        let gesture = self.gesture.take()?;
        self.phase = Phase::Idle;
        observer.on_offset_changed(Vector::new(0.0, 0.0));
        self.show_indicator(None, observer);
        Some(gesture)
    }

    /// Makes `target` the only visible indicator, emitting only changes.
    fn show_indicator<O>(&mut self, target: Option<SwipeDirection>, observer: &mut O)
    where
        O: SwipeObserver + ?Sized,
    {
        if self.indicator == target {
            return;
        }
        if let Some(previous) = self.indicator {
            observer.on_indicator_visibility(previous, false);
        }
        if let Some(next) = target {
            observer.on_indicator_visibility(next, true);
        }
        self.indicator = target;
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Commits `decision` on the top card and starts the exit animation.
    ///
    /// Valid only while idle with a current card; returns `None` otherwise.
    pub fn commit<O>(&mut self, decision: Decision, observer: &mut O) -> Option<CommitTicket>
    where
        O: SwipeObserver + ?Sized,
    {
        if self.phase != Phase::Idle {
            debug!(phase = ?self.phase, ?decision, "commit ignored");
            return None;
        }
        let Some(item) = self.deck.current() else {
            debug!(?decision, "commit ignored: deck exhausted");
            return None;
        };

        let id = item.id().clone();
        observer.on_decision(decision, item);
        self.deck.mark(&id, ItemStatus::from_decision(decision));
        info!(item = %id, ?decision, "swipe committed");

        let ticket = CommitTicket {
            decision,
            item: id,
            duration: self.settings.exit_duration.as_duration(),
            rotation: self.settings.exit_rotation,
        };
        self.phase = Phase::Committing;
        self.pending = Some(ticket.clone());
        Some(ticket)
    }

    /// Likes the top card: an accept that records [`ItemStatus::Liked`].
    pub fn like_current<O>(&mut self, observer: &mut O) -> Option<CommitTicket>
    where
        O: SwipeObserver + ?Sized,
    {
        let ticket = self.commit(Decision::Accept, observer)?;
        self.deck.mark(&ticket.item, ItemStatus::Liked);
        Some(ticket)
    }

    /// Finishes the exit animation and advances the deck by one card.
    ///
    /// Returns `None` when no commit is pending.
    pub fn complete_commit<O>(&mut self, observer: &mut O) -> Option<Advance>
    where
        O: SwipeObserver + ?Sized,
    {
        if self.phase != Phase::Committing {
            debug!(phase = ?self.phase, "complete_commit ignored");
            return None;
        }
        self.pending = None;

        let advance = self.deck.advance();
        match advance {
            Advance::Moved => debug!(cursor = self.deck.cursor(), "card advanced"),
            Advance::Refilled => info!(len = self.deck.len(), "deck refilled"),
            Advance::Exhausted => info!("deck exhausted"),
        }
        observer.on_card_advanced(self.deck.current(), self.deck.peek_next());
        self.phase = Phase::Idle;
        Some(advance)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// Live drag offset; zero when no gesture is active.
    #[must_use]
    pub fn offset(&self) -> Vector {
        self.gesture
            .map_or(Vector::new(0.0, 0.0), |gesture| gesture.offset())
    }

    /// The indicator currently shown, if any.
    #[must_use]
    pub fn visible_indicator(&self) -> Option<SwipeDirection> {
        self.indicator
    }

    /// The commit whose exit animation is running, if any.
    #[must_use]
    pub fn pending_commit(&self) -> Option<&CommitTicket> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.deck.current()
    }

    #[must_use]
    pub fn peek_next_item(&self) -> Option<&Item> {
        self.deck.peek_next()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.deck.cursor()
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::StopWhenExhausted;
    use crate::domain::catalog::Price;
    use crate::swipe::observer::SwipeEvent;
    use iced::Size;

    /// Card centered on the origin so pointer positions equal offsets.
    fn card() -> Rectangle {
        Rectangle::new(Point::new(-150.0, -200.0), Size::new(300.0, 400.0))
    }

    fn deck(ids: &[&str]) -> Deck {
        Deck::new(
            ids.iter()
                .map(|id| Item::new(*id, "", "Brand", *id, Price::new(10)))
                .collect(),
        )
    }

    fn engine() -> SwipeEngine {
        SwipeEngine::new(deck(&["A", "B", "C", "D"]), SwipeSettings::default())
    }

    fn current_id(engine: &SwipeEngine) -> Option<&str> {
        engine.current_item().map(|i| i.id().as_str())
    }

    fn drag_to(engine: &mut SwipeEngine, dx: f32, events: &mut Vec<SwipeEvent>) {
        assert!(engine.begin_gesture(Point::ORIGIN, card()));
        engine.update_gesture(Point::new(dx, 0.0), card(), events);
    }

    fn swipe(engine: &mut SwipeEngine, dx: f32) -> GestureOutcome {
        let mut events = Vec::new();
        drag_to(engine, dx, &mut events);
        engine.end_gesture(&mut events)
    }

    // =========================================================================
    // Phase transitions
    // =========================================================================

    #[test]
    fn begin_enters_dragging_with_zero_offset() {
        let mut engine = engine();
        assert!(engine.begin_gesture(Point::ORIGIN, card()));
        assert_eq!(engine.phase(), Phase::Dragging);
        assert_eq!(engine.offset(), Vector::new(0.0, 0.0));
    }

    #[test]
    fn edge_press_nudge_commits_only_with_card_center_anchor() {
        // Press 140 units right of center, then move one unit.
        let press = Point::new(140.0, 0.0);
        let nudge = Point::new(141.0, 0.0);

        let mut centered = engine();
        assert!(centered.begin_gesture(press, card()));
        centered.update_gesture(nudge, card(), &mut ());
        assert!(matches!(centered.end_gesture(&mut ()), GestureOutcome::Committed(_)));

        let settings = SwipeSettings {
            anchor: GestureAnchor::PressPoint,
            ..SwipeSettings::default()
        };
        let mut pressed = SwipeEngine::new(deck(&["A", "B"]), settings);
        assert!(pressed.begin_gesture(press, card()));
        pressed.update_gesture(nudge, card(), &mut ());
        assert_eq!(pressed.end_gesture(&mut ()), GestureOutcome::SnapBack);
        assert_eq!(pressed.cursor(), 0);
    }

    #[test]
    fn begin_while_dragging_is_ignored() {
        let mut engine = engine();
        assert!(engine.begin_gesture(Point::ORIGIN, card()));
        engine.update_gesture(Point::new(30.0, 0.0), card(), &mut ());
        assert!(!engine.begin_gesture(Point::new(5.0, 5.0), card()));
        assert_eq!(engine.offset(), Vector::new(30.0, 0.0));
    }

    #[test]
    fn begin_while_committing_is_ignored() {
        let mut engine = engine();
        assert!(matches!(swipe(&mut engine, 200.0), GestureOutcome::Committed(_)));
        assert_eq!(engine.phase(), Phase::Committing);
        assert!(!engine.begin_gesture(Point::ORIGIN, card()));
    }

    #[test]
    fn update_without_gesture_returns_none() {
        let mut engine = engine();
        let mut events = Vec::new();
        assert!(engine
            .update_gesture(Point::new(10.0, 0.0), card(), &mut events)
            .is_none());
        assert!(events.is_empty());
    }

    #[test]
    fn end_without_gesture_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.end_gesture(&mut ()), GestureOutcome::Ignored);
        assert_eq!(engine.cursor(), 0);
    }

    // =========================================================================
    // Indicators
    // =========================================================================

    #[test]
    fn indicators_hidden_below_peek_threshold() {
        let mut engine = engine();
        let mut events = Vec::new();
        engine.begin_gesture(Point::ORIGIN, card());
        for dx in [-79.0, -40.0, 0.0, 40.0, 79.9] {
            engine.update_gesture(Point::new(dx, 12.0), card(), &mut events);
            assert_eq!(engine.visible_indicator(), None);
        }
        assert!(!events
            .iter()
            .any(|e| matches!(e, SwipeEvent::IndicatorVisibility { .. })));
    }

    #[test]
    fn indicator_matches_sign_at_or_above_peek() {
        let mut engine = engine();
        engine.begin_gesture(Point::ORIGIN, card());

        engine.update_gesture(Point::new(80.0, 0.0), card(), &mut ());
        assert_eq!(engine.visible_indicator(), Some(SwipeDirection::Right));

        engine.update_gesture(Point::new(-95.0, 0.0), card(), &mut ());
        assert_eq!(engine.visible_indicator(), Some(SwipeDirection::Left));
    }

    #[test]
    fn flipping_sides_hides_old_indicator_first() {
        let mut engine = engine();
        let mut events = Vec::new();
        engine.begin_gesture(Point::ORIGIN, card());
        engine.update_gesture(Point::new(100.0, 0.0), card(), &mut events);
        engine.update_gesture(Point::new(110.0, 0.0), card(), &mut events);
        engine.update_gesture(Point::new(-100.0, 0.0), card(), &mut events);

        let indicator_events: Vec<_> = events
            .into_iter()
            .filter(|e| matches!(e, SwipeEvent::IndicatorVisibility { .. }))
            .collect();
        assert_eq!(
            indicator_events,
            vec![
                SwipeEvent::IndicatorVisibility {
                    direction: SwipeDirection::Right,
                    visible: true
                },
                SwipeEvent::IndicatorVisibility {
                    direction: SwipeDirection::Right,
                    visible: false
                },
                SwipeEvent::IndicatorVisibility {
                    direction: SwipeDirection::Left,
                    visible: true
                },
            ]
        );
    }

    #[test]
    fn update_reports_offset_every_move() {
        let mut engine = engine();
        let mut events = Vec::new();
        engine.begin_gesture(Point::ORIGIN, card());
        engine.update_gesture(Point::new(10.0, 4.0), card(), &mut events);
        engine.update_gesture(Point::new(12.0, 6.0), card(), &mut events);
        assert_eq!(
            events,
            vec![
                SwipeEvent::OffsetChanged(Vector::new(10.0, 4.0)),
                SwipeEvent::OffsetChanged(Vector::new(12.0, 6.0)),
            ]
        );
    }

    // =========================================================================
    // Release
    // =========================================================================

    #[test]
    fn release_below_commit_snaps_back() {
        let mut engine = engine();
        let mut events = Vec::new();
        drag_to(&mut engine, 100.0, &mut events);
        assert_eq!(engine.visible_indicator(), Some(SwipeDirection::Right));

        assert_eq!(engine.end_gesture(&mut events), GestureOutcome::SnapBack);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.offset(), Vector::new(0.0, 0.0));
        assert_eq!(engine.visible_indicator(), None);
        assert_eq!(engine.cursor(), 0);
        assert!(events.contains(&SwipeEvent::OffsetChanged(Vector::new(0.0, 0.0))));
        assert!(events.contains(&SwipeEvent::IndicatorVisibility {
            direction: SwipeDirection::Right,
            visible: false
        }));
    }

    #[test]
    fn release_at_commit_threshold_accepts() {
        let mut engine = engine();
        match swipe(&mut engine, 120.0) {
            GestureOutcome::Committed(ticket) => {
                assert_eq!(ticket.decision, Decision::Accept);
                assert_eq!(ticket.item.as_str(), "A");
                assert_eq!(ticket.duration, Duration::from_millis(300));
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn release_at_negative_threshold_rejects() {
        let mut engine = engine();
        match swipe(&mut engine, -120.0) {
            GestureOutcome::Committed(ticket) => {
                assert_eq!(ticket.decision, Decision::Reject);
                assert_eq!(ticket.direction(), SwipeDirection::Left);
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn commit_hides_indicators_and_resets_offset() {
        let mut engine = engine();
        let mut events = Vec::new();
        drag_to(&mut engine, -300.0, &mut events);
        engine.end_gesture(&mut events);
        assert_eq!(engine.offset(), Vector::new(0.0, 0.0));
        assert_eq!(engine.visible_indicator(), None);
        assert!(events.contains(&SwipeEvent::Decided {
            decision: Decision::Reject,
            item: ItemId::new("A"),
        }));
    }

    #[test]
    fn cursor_only_moves_after_complete_commit() {
        let mut engine = engine();
        swipe(&mut engine, 150.0);
        assert_eq!(engine.cursor(), 0);
        assert!(engine.pending_commit().is_some());

        let mut events = Vec::new();
        assert_eq!(engine.complete_commit(&mut events), Some(Advance::Moved));
        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(engine.pending_commit().is_none());
        assert_eq!(
            events,
            vec![SwipeEvent::CardAdvanced {
                current: Some(ItemId::new("B")),
                next: Some(ItemId::new("C")),
            }]
        );
    }

    #[test]
    fn complete_commit_without_pending_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.complete_commit(&mut ()), None);
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn cancel_behaves_like_snap_back() {
        let mut engine = engine();
        let mut events = Vec::new();
        drag_to(&mut engine, 400.0, &mut events);
        assert!(engine.cancel_gesture(&mut events));
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.cursor(), 0);
        assert!(engine.pending_commit().is_none());
        assert!(!engine.cancel_gesture(&mut events));
    }

    #[test]
    fn swipes_record_item_status() {
        let mut engine = engine();
        swipe(&mut engine, 200.0);
        engine.complete_commit(&mut ());
        swipe(&mut engine, -200.0);
        engine.complete_commit(&mut ());

        assert_eq!(engine.deck().status(&ItemId::new("A")), ItemStatus::Saved);
        assert_eq!(engine.deck().status(&ItemId::new("B")), ItemStatus::Skipped);
    }

    // =========================================================================
    // Button commits
    // =========================================================================

    #[test]
    fn button_commit_from_idle() {
        let mut engine = engine();
        let ticket = engine.commit(Decision::Accept, &mut ()).expect("idle commit");
        assert_eq!(ticket.item.as_str(), "A");
        assert_eq!(engine.phase(), Phase::Committing);
        assert!(engine.commit(Decision::Reject, &mut ()).is_none());
    }

    #[test]
    fn button_commit_while_dragging_is_ignored() {
        let mut engine = engine();
        engine.begin_gesture(Point::ORIGIN, card());
        assert!(engine.commit(Decision::Accept, &mut ()).is_none());
        assert_eq!(engine.phase(), Phase::Dragging);
    }

    #[test]
    fn like_records_liked_status() {
        let mut engine = engine();
        let ticket = engine.like_current(&mut ()).expect("like");
        assert_eq!(ticket.decision, Decision::Accept);
        assert_eq!(engine.deck().status(&ItemId::new("A")), ItemStatus::Liked);
    }

    // =========================================================================
    // Exhaustion
    // =========================================================================

    #[test]
    fn last_card_reloads_deck() {
        let mut engine = engine();
        for _ in 0..3 {
            swipe(&mut engine, 200.0);
            engine.complete_commit(&mut ());
        }
        assert_eq!(current_id(&engine), Some("D"));

        swipe(&mut engine, -200.0);
        assert_eq!(engine.complete_commit(&mut ()), Some(Advance::Refilled));
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.deck().len(), 4);
        assert_eq!(current_id(&engine), Some("A"));
    }

    #[test]
    fn exhausted_deck_suppresses_gestures() {
        let deck = Deck::with_policy(
            vec![Item::new("A", "", "Brand", "A", Price::new(1))],
            Box::new(StopWhenExhausted),
        );
        let mut engine = SwipeEngine::new(deck, SwipeSettings::default());
        swipe(&mut engine, 200.0);
        assert_eq!(engine.complete_commit(&mut ()), Some(Advance::Exhausted));

        assert!(engine.current_item().is_none());
        assert!(engine.peek_next_item().is_none());
        assert!(!engine.begin_gesture(Point::ORIGIN, card()));
        assert!(engine.commit(Decision::Accept, &mut ()).is_none());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    // =========================================================================
    // Pointer dispatch
    // =========================================================================

    #[test]
    fn handle_pointer_runs_full_sequence() {
        let mut engine = engine();
        let event = |kind, x| PointerEvent {
            kind,
            position: Point::new(x, 0.0),
            card_bounds: card(),
        };

        assert!(engine
            .handle_pointer(event(PointerKind::Down, 0.0), &mut ())
            .is_none());
        assert!(engine
            .handle_pointer(event(PointerKind::Move, -180.0), &mut ())
            .is_none());
        let ticket = engine
            .handle_pointer(event(PointerKind::Up, -180.0), &mut ())
            .expect("committed");
        assert_eq!(ticket.decision, Decision::Reject);
    }

    #[test]
    fn handle_pointer_cancel_discards_drag() {
        let mut engine = engine();
        let event = |kind, x| PointerEvent {
            kind,
            position: Point::new(x, 0.0),
            card_bounds: card(),
        };
        engine.handle_pointer(event(PointerKind::Down, 0.0), &mut ());
        engine.handle_pointer(event(PointerKind::Move, 250.0), &mut ());
        engine.handle_pointer(event(PointerKind::Cancel, 250.0), &mut ());
        assert!(engine
            .handle_pointer(event(PointerKind::Up, 250.0), &mut ())
            .is_none());
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn custom_thresholds_apply() {
        let thresholds = SwipeThresholds::new(
            crate::domain::swipe::PeekThreshold::new(20.0),
            crate::domain::swipe::CommitThreshold::new(40.0),
        )
        .expect("valid thresholds");
        let mut engine = SwipeEngine::new(
            deck(&["A", "B"]),
            SwipeSettings {
                thresholds,
                ..SwipeSettings::default()
            },
        );
        assert!(matches!(swipe(&mut engine, 45.0), GestureOutcome::Committed(_)));
    }
}
