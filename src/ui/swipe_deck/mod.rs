// SPDX-License-Identifier: MPL-2.0
//! Swipe deck component.
//!
//! Wraps the [`SwipeEngine`] for the UI: pointer input comes in as
//! messages, the card stack is drawn by [`canvas::DeckCanvas`], and
//! committed swipes come out as [`Effect::Committed`] so the app can show
//! feedback and schedule [`Message::CommitElapsed`].

pub mod canvas;

use crate::domain::catalog::Item;
use crate::domain::swipe::{Decision, SwipeDirection};
use crate::i18n::I18n;
use crate::swipe::{
    CardTransform, CommitTicket, FeedbackStrategy, Phase, PointerEvent, PointerKind, SwipeEngine,
    SwipeObserver,
};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, column, container, row, text, Canvas, Space};
use iced::{alignment, Background, Border, Color, Element, Length, Theme, Vector};
use std::fmt;
use std::time::{Duration, Instant};

/// Fade time of the SAVE / SKIP badges.
const INDICATOR_FADE: Duration = Duration::from_millis(200);

/// Messages for the swipe deck.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer or touch input on the canvas.
    Pointer(PointerEvent),
    /// Heart button on the top card.
    Like,
    /// Save button on the top card.
    Save,
    /// The exit animation of the pending commit has run its course.
    CommitElapsed,
    /// Animation frame.
    Tick(Instant),
}

/// Effects produced by the deck for the app to act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A swipe was committed. Show the feedback message and send
    /// [`Message::CommitElapsed`] after `exit`.
    Committed {
        decision: Decision,
        message_key: &'static str,
        exit: Duration,
    },
}

/// Opacity ramp of one indicator badge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Fade {
    visible: bool,
    since: Option<Instant>,
}

impl Fade {
    fn set(&mut self, visible: bool, now: Instant) {
        if self.visible != visible {
            self.visible = visible;
            self.since = Some(now);
        }
    }

    fn alpha(self, now: Instant) -> f32 {
        let progress = self.since.map_or(1.0, |since| {
            now.saturating_duration_since(since).as_secs_f32() / INDICATOR_FADE.as_secs_f32()
        });
        let progress = progress.clamp(0.0, 1.0);
        if self.visible {
            progress
        } else {
            1.0 - progress
        }
    }

    fn is_animating(self, now: Instant) -> bool {
        self.since
            .is_some_and(|since| now.saturating_duration_since(since) < INDICATOR_FADE)
    }
}

/// Both indicator badges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Indicators {
    /// Left badge, shown while a release would reject.
    skip: Fade,
    /// Right badge, shown while a release would accept.
    save: Fade,
}

impl Indicators {
    fn get_mut(&mut self, direction: SwipeDirection) -> &mut Fade {
        match direction {
            SwipeDirection::Left => &mut self.skip,
            SwipeDirection::Right => &mut self.save,
        }
    }

    fn get(&self, direction: SwipeDirection) -> Fade {
        match direction {
            SwipeDirection::Left => self.skip,
            SwipeDirection::Right => self.save,
        }
    }
}

/// Keeps the view-side animation state in step with the engine.
struct ViewSync<'a> {
    indicators: &'a mut Indicators,
    settle: &'a mut Option<Settle>,
    now: Instant,
}

impl<'a> ViewSync<'a> {
    fn new(indicators: &'a mut Indicators, settle: &'a mut Option<Settle>, now: Instant) -> Self {
        Self {
            indicators,
            settle,
            now,
        }
    }
}

impl SwipeObserver for ViewSync<'_> {
    fn on_indicator_visibility(&mut self, direction: SwipeDirection, visible: bool) {
        self.indicators.get_mut(direction).set(visible, self.now);
    }

    fn on_card_advanced(&mut self, current: Option<&Item>, _next: Option<&Item>) {
        *self.settle = None;
        if current.is_none() {
            tracing::debug!("no card left to show");
        }
    }
}

/// A released card gliding back to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Settle {
    from: Vector,
    started: Instant,
    duration: Duration,
}

impl Settle {
    fn progress(self, now: Instant) -> f32 {
        now.saturating_duration_since(self.started).as_secs_f32() / self.duration.as_secs_f32()
    }
}

/// Swipe deck state.
pub struct State {
    engine: SwipeEngine,
    feedback: Box<dyn FeedbackStrategy>,
    indicators: Indicators,
    settle: Option<Settle>,
    exit_started: Option<Instant>,
    now: Instant,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("engine", &self.engine)
            .field("indicators", &self.indicators)
            .field("settle", &self.settle)
            .field("exit_started", &self.exit_started)
            .finish_non_exhaustive()
    }
}

impl State {
    pub fn new(engine: SwipeEngine, feedback: Box<dyn FeedbackStrategy>) -> Self {
        Self {
            engine,
            feedback,
            indicators: Indicators::default(),
            settle: None,
            exit_started: None,
            now: Instant::now(),
        }
    }

    /// Handle a deck message.
    ///
    /// Takes `Message` by value following the `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if !matches!(msg, Message::Tick(_)) {
            // Frames stop while idle, so input must refresh the clock.
            self.now = self.now.max(Instant::now());
        }
        match msg {
            Message::Pointer(event) => self.handle_pointer(event),
            Message::Like => {
                let mut sync = ViewSync::new(&mut self.indicators, &mut self.settle, self.now);
                let ticket = self.engine.like_current(&mut sync);
                self.on_commit(ticket)
            }
            Message::Save => {
                let mut sync = ViewSync::new(&mut self.indicators, &mut self.settle, self.now);
                let ticket = self.engine.commit(Decision::Accept, &mut sync);
                self.on_commit(ticket)
            }
            Message::CommitElapsed => {
                let mut sync = ViewSync::new(&mut self.indicators, &mut self.settle, self.now);
                if self.engine.complete_commit(&mut sync).is_some() {
                    self.exit_started = None;
                }
                Effect::None
            }
            Message::Tick(now) => {
                self.now = now;
                if self
                    .settle
                    .is_some_and(|settle| settle.progress(now) >= 1.0)
                {
                    self.settle = None;
                }
                Effect::None
            }
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> Effect {
        let was_dragging = self.engine.is_dragging();
        let released_at = self.engine.offset();

        if event.kind == PointerKind::Down {
            self.settle = None;
        }

        let now = self.now;
        let mut sync = ViewSync::new(&mut self.indicators, &mut self.settle, now);
        let ticket = self.engine.handle_pointer(event, &mut sync);

        if ticket.is_none() && was_dragging && !self.engine.is_dragging() {
            self.settle = Some(Settle {
                from: released_at,
                started: now,
                duration: self.engine.settings().exit_duration.as_duration(),
            });
        }
        self.on_commit(ticket)
    }

    fn on_commit(&mut self, ticket: Option<CommitTicket>) -> Effect {
        let Some(ticket) = ticket else {
            return Effect::None;
        };
        self.settle = None;
        self.exit_started = Some(self.now);
        Effect::Committed {
            decision: ticket.decision,
            message_key: self.feedback.message_key(ticket.decision),
            exit: ticket.duration,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn engine(&self) -> &SwipeEngine {
        &self.engine
    }

    /// Whether frames are needed to keep the deck moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.engine.phase() == Phase::Committing
            || self.settle.is_some()
            || self.indicators.skip.is_animating(self.now)
            || self.indicators.save.is_animating(self.now)
    }

    /// Transform of the top card at the current frame.
    ///
    /// `travel` is the distance that takes the card off screen.
    #[must_use]
    pub fn top_card_transform(&self, travel: f32) -> CardTransform {
        if let Some(ticket) = self.engine.pending_commit() {
            let progress = self.exit_started.map_or(1.0, |started| {
                self.now.saturating_duration_since(started).as_secs_f32()
                    / ticket.duration.as_secs_f32()
            });
            return CardTransform::exiting(ticket.direction(), travel, ticket.rotation, progress);
        }
        if self.engine.is_dragging() {
            return CardTransform::dragging(self.engine.offset());
        }
        if let Some(settle) = self.settle {
            return CardTransform::settling(settle.from, settle.progress(self.now));
        }
        CardTransform::IDENTITY
    }

    /// Current opacity of an indicator badge.
    #[must_use]
    pub fn indicator_alpha(&self, direction: SwipeDirection) -> f32 {
        self.indicators.get(direction).alpha(self.now)
    }

    /// Whether buttons may commit right now.
    #[must_use]
    pub fn accepts_buttons(&self) -> bool {
        self.engine.phase() == Phase::Idle && self.engine.current_item().is_some()
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.engine.current_item().is_none() {
            return empty_state(i18n);
        }

        let deck = Canvas::new(canvas::DeckCanvas::new(self, i18n))
            .width(Length::Fill)
            .height(Length::Fill);

        let hint: Element<'a, Message> = if self.engine.deck().is_at_first() {
            text(i18n.tr("swipe-hint"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::HINT,
                        ..palette::WHITE
                    }),
                })
                .into()
        } else {
            Space::new().height(Length::Fixed(typography::CAPTION)).into()
        };

        let enabled = self.accepts_buttons();
        let like = action_button(i18n.tr("button-like"), enabled.then_some(Message::Like));
        let save = action_button(i18n.tr("button-save"), enabled.then_some(Message::Save));

        column![
            deck,
            container(hint).center_x(Length::Fill),
            row![like, save].spacing(spacing::MD),
        ]
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into()
    }
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = column![
        text(i18n.tr("empty-deck-title"))
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::WHITE),
            }),
        text(i18n.tr("empty-deck-text"))
            .size(typography::BODY)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::GRAY_200),
            }),
    ]
    .spacing(spacing::XS)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}

fn action_button(label: String, on_press: Option<Message>) -> Element<'static, Message> {
    button(
        text(label)
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe(on_press)
    .width(Length::Fixed(sizing::CARD_MAX_WIDTH / 2.0 - spacing::MD))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::SM)
    .style(action_button_style)
    .into()
}

fn action_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (palette::PRIMARY_500, palette::WHITE),
        button::Status::Hovered => (palette::PRIMARY_400, palette::WHITE),
        button::Status::Pressed => (palette::PRIMARY_600, palette::WHITE),
        button::Status::Disabled => (palette::GRAY_800, palette::GRAY_400),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: if status == button::Status::Disabled {
            shadow::NONE
        } else {
            shadow::SM
        },
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::featured_products;
    use crate::deck::{Deck, StopWhenExhausted};
    use crate::domain::catalog::ItemStatus;
    use crate::swipe::feedback::{FixedFeedback, ACCEPT_MESSAGES, REJECT_MESSAGES};
    use crate::swipe::SwipeSettings;
    use iced::{Point, Rectangle, Size};

    fn card() -> Rectangle {
        Rectangle::new(Point::new(50.0, 50.0), Size::new(300.0, 400.0))
    }

    fn center() -> Point {
        card().center()
    }

    fn pointer(kind: PointerKind, dx: f32) -> Message {
        Message::Pointer(PointerEvent {
            kind,
            position: Point::new(center().x + dx, center().y),
            card_bounds: card(),
        })
    }

    fn state() -> State {
        let engine = SwipeEngine::new(Deck::new(featured_products()), SwipeSettings::default());
        State::new(engine, Box::new(FixedFeedback))
    }

    #[test]
    fn drag_past_commit_produces_feedback_effect() {
        let mut state = state();
        state.handle(pointer(PointerKind::Down, 0.0));
        state.handle(pointer(PointerKind::Move, 150.0));
        let effect = state.handle(pointer(PointerKind::Up, 150.0));

        assert_eq!(
            effect,
            Effect::Committed {
                decision: Decision::Accept,
                message_key: ACCEPT_MESSAGES[0],
                exit: Duration::from_millis(300),
            }
        );
        assert!(state.is_animating());
        assert!(!state.accepts_buttons());
    }

    #[test]
    fn short_drag_settles_back() {
        let mut state = state();
        state.handle(pointer(PointerKind::Down, 0.0));
        state.handle(pointer(PointerKind::Move, -60.0));
        let effect = state.handle(pointer(PointerKind::Up, -60.0));

        assert_eq!(effect, Effect::None);
        assert!(state.settle.is_some());
        assert!(state.top_card_transform(400.0).translation.x < 0.0);

        state.handle(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert!(state.settle.is_none());
        assert_eq!(state.top_card_transform(400.0), CardTransform::IDENTITY);
    }

    #[test]
    fn indicator_fades_in_past_peek() {
        let mut state = state();
        state.handle(pointer(PointerKind::Down, 0.0));
        state.handle(pointer(PointerKind::Move, -100.0));

        assert_eq!(state.indicator_alpha(SwipeDirection::Left), 0.0);
        state.handle(Message::Tick(state.now + INDICATOR_FADE));
        assert_eq!(state.indicator_alpha(SwipeDirection::Left), 1.0);
        assert_eq!(state.indicator_alpha(SwipeDirection::Right), 0.0);
    }

    #[test]
    fn reject_swipe_uses_reject_message() {
        let mut state = state();
        state.handle(pointer(PointerKind::Down, 0.0));
        state.handle(pointer(PointerKind::Move, -200.0));
        match state.handle(pointer(PointerKind::Up, -200.0)) {
            Effect::Committed { message_key, .. } => assert_eq!(message_key, REJECT_MESSAGES[0]),
            Effect::None => panic!("expected a commit"),
        }
    }

    #[test]
    fn like_button_marks_item_liked_and_advances_after_elapsed() {
        let mut state = state();
        let first = state.engine().current_item().map(|i| i.id().clone());

        let effect = state.handle(Message::Like);
        assert!(matches!(effect, Effect::Committed { decision: Decision::Accept, .. }));
        // Second press during the exit animation is ignored
        assert_eq!(state.handle(Message::Save), Effect::None);

        state.handle(Message::CommitElapsed);
        let first = first.expect("deck starts with a card");
        assert_eq!(state.engine().deck().status(&first), ItemStatus::Liked);
        assert_eq!(state.engine().cursor(), 1);
        assert!(state.accepts_buttons());
    }

    #[test]
    fn save_button_marks_item_saved() {
        let mut state = state();
        state.handle(Message::Save);
        state.handle(Message::CommitElapsed);
        let first = &featured_products()[0];
        assert_eq!(state.engine().deck().status(first.id()), ItemStatus::Saved);
    }

    #[test]
    fn exit_transform_moves_off_screen() {
        let mut state = state();
        state.handle(Message::Save);
        state.handle(Message::Tick(state.now + Duration::from_secs(1)));
        let transform = state.top_card_transform(500.0);
        assert!((transform.translation.x - 500.0).abs() < 1e-3);
    }

    #[test]
    fn buttons_disabled_when_deck_is_empty() {
        let engine = SwipeEngine::new(
            Deck::with_policy(Vec::new(), Box::new(StopWhenExhausted)),
            SwipeSettings::default(),
        );
        let mut state = State::new(engine, Box::new(FixedFeedback));
        assert!(!state.accepts_buttons());
        assert_eq!(state.handle(Message::Like), Effect::None);
    }

    #[test]
    fn cancel_settles_without_commit() {
        let mut state = state();
        state.handle(pointer(PointerKind::Down, 0.0));
        state.handle(pointer(PointerKind::Move, 300.0));
        let effect = state.handle(pointer(PointerKind::Cancel, 300.0));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.engine().phase(), Phase::Idle);
        assert!(state.settle.is_some());
    }
}
