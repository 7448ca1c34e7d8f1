// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the card stack and turning mouse/touch input into
//! [`PointerEvent`]s.

use super::{Message, State};
use crate::domain::catalog::Item;
use crate::domain::swipe::SwipeDirection;
use crate::i18n::I18n;
use crate::swipe::{CardTransform, PointerEvent, PointerKind};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::canvas::{Frame, Geometry, Path, Program, Text};
use iced::widget::Action;
use iced::{alignment, mouse, touch, Color, Event, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Bounds of the top card inside a canvas of `size`, centered.
#[must_use]
pub fn card_bounds(size: Size) -> Rectangle {
    let width = (size.width - 2.0 * spacing::MD)
        .min(sizing::CARD_MAX_WIDTH)
        .max(0.0);
    let height = (size.height - 2.0 * spacing::MD)
        .min(sizing::CARD_MAX_HEIGHT)
        .max(0.0);
    Rectangle::new(
        Point::new((size.width - width) / 2.0, (size.height - height) / 2.0),
        Size::new(width, height),
    )
}

/// Maps a canvas event to a pointer kind and a canvas-local position.
///
/// `dragging` tells whether a gesture is live; moves and releases outside a
/// gesture are not reported. `finger` is the touch that started the live
/// gesture; other fingers are ignored until it lifts.
fn pointer_input(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    dragging: bool,
    finger: Option<touch::Finger>,
) -> Option<(PointerKind, Point)> {
    let origin = Vector::new(bounds.x, bounds.y);
    let local = |position: Point| position - origin;

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_in(bounds).map(|p| (PointerKind::Down, p))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
            // Leaving the canvas abandons the gesture
            if bounds.contains(*position) {
                Some((PointerKind::Move, local(*position)))
            } else {
                Some((PointerKind::Cancel, local(*position)))
            }
        }
        Event::Mouse(mouse::Event::CursorLeft) if dragging => {
            Some((PointerKind::Cancel, Point::ORIGIN))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
            let position = cursor.position().map_or(Point::ORIGIN, local);
            Some((PointerKind::Up, position))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. })
            if !dragging && bounds.contains(*position) =>
        {
            Some((PointerKind::Down, local(*position)))
        }
        Event::Touch(touch::Event::FingerMoved { id, position })
            if dragging && finger == Some(*id) =>
        {
            Some((PointerKind::Move, local(*position)))
        }
        Event::Touch(touch::Event::FingerLifted { id, position })
            if dragging && finger == Some(*id) =>
        {
            Some((PointerKind::Up, local(*position)))
        }
        Event::Touch(touch::Event::FingerLost { id, position })
            if dragging && finger == Some(*id) =>
        {
            Some((PointerKind::Cancel, local(*position)))
        }
        _ => None,
    }
}

/// Draws the top card, the next card behind it and the SAVE / SKIP badges.
pub struct DeckCanvas<'a> {
    state: &'a State,
    save_label: String,
    skip_label: String,
}

impl<'a> DeckCanvas<'a> {
    pub fn new(state: &'a State, i18n: &I18n) -> Self {
        Self {
            state,
            save_label: i18n.tr("indicator-save"),
            skip_label: i18n.tr("indicator-skip"),
        }
    }

    /// Badge text for a drag direction.
    ///
    /// Labels follow the decision a release makes: the left badge reads
    /// SKIP, not like.
    fn label(&self, direction: SwipeDirection) -> &str {
        match direction {
            SwipeDirection::Left => &self.skip_label,
            SwipeDirection::Right => &self.save_label,
        }
    }

    fn badge(&self, frame: &mut Frame, card: Size, direction: SwipeDirection) {
        let alpha = self.state.indicator_alpha(direction);
        if alpha <= 0.0 {
            return;
        }
        let label = self.label(direction);
        let (color, x) = match direction {
            SwipeDirection::Left => (
                palette::SKIP_500,
                spacing::XL + sizing::INDICATOR / 2.0,
            ),
            SwipeDirection::Right => (
                palette::SAVE_500,
                card.width - spacing::XL - sizing::INDICATOR / 2.0,
            ),
        };
        let center = Point::new(x, card.height / 2.0);

        frame.fill(
            &Path::circle(center, sizing::INDICATOR / 2.0),
            Color { a: alpha, ..color },
        );
        frame.fill_text(Text {
            content: label.to_string(),
            position: center,
            color: Color {
                a: alpha,
                ..palette::WHITE
            },
            size: typography::CAPTION.into(),
            align_x: alignment::Horizontal::Center.into(),
            align_y: alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

/// Draws one product card with its top-left corner at the frame origin.
fn draw_card(frame: &mut Frame, item: &Item, size: Size) {
    let card = Path::rounded_rectangle(Point::ORIGIN, size, radius::LG.into());
    frame.fill(&card, swatch(item));

    // Bottom scrim for the product text
    let scrim_height = size.height * 0.35;
    frame.fill(
        &Path::rounded_rectangle(
            Point::new(0.0, size.height - scrim_height),
            Size::new(size.width, scrim_height),
            radius::LG.into(),
        ),
        Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        },
    );

    // Brand pill
    let brand_size = Size::new(
        (item.brand().chars().count() as f32).mul_add(7.0, 2.0 * spacing::SM),
        typography::CAPTION + 2.0 * spacing::XXS,
    );
    frame.fill(
        &Path::rounded_rectangle(
            Point::new(spacing::LG, spacing::LG),
            brand_size,
            radius::FULL.into(),
        ),
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        },
    );
    frame.fill_text(Text {
        content: item.brand().to_string(),
        position: Point::new(spacing::LG + spacing::SM, spacing::LG + spacing::XXS),
        color: palette::WHITE,
        size: typography::CAPTION.into(),
        ..Text::default()
    });

    frame.fill_text(Text {
        content: item.name().to_string(),
        position: Point::new(spacing::LG, size.height - spacing::LG - 2.0 * typography::PRICE),
        color: palette::WHITE,
        size: typography::TITLE_MD.into(),
        max_width: size.width - 2.0 * spacing::LG,
        ..Text::default()
    });
    frame.fill_text(Text {
        content: item.price().to_string(),
        position: Point::new(spacing::LG, size.height - spacing::LG - typography::PRICE),
        color: palette::PRIMARY_400,
        size: typography::PRICE.into(),
        ..Text::default()
    });
}

/// Placeholder artwork color, stable per item.
fn swatch(item: &Item) -> Color {
    let index = item
        .id()
        .as_str()
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_add(b as usize));
    palette::CARD_SWATCHES[index % palette::CARD_SWATCHES.len()]
}

/// Runs `draw` with the frame origin moved to the card's top-left corner
/// after applying `transform` around the card center.
fn with_card_transform(
    frame: &mut Frame,
    card: Rectangle,
    transform: CardTransform,
    scale: f32,
    draw: impl FnOnce(&mut Frame),
) {
    frame.with_save(|frame| {
        let center = card.center();
        frame.translate(Vector::new(center.x, center.y) + transform.translation);
        frame.rotate(transform.rotation_radians());
        frame.scale(scale);
        frame.translate(Vector::new(-card.width / 2.0, -card.height / 2.0));
        draw(frame);
    });
}

impl Program<Message> for DeckCanvas<'_> {
    /// Finger driving the live touch gesture.
    type State = Option<touch::Finger>;

    fn update(
        &self,
        finger: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let dragging = self.state.engine().is_dragging();
        let (kind, position) = pointer_input(event, bounds, cursor, dragging, *finger)?;
        let card = card_bounds(bounds.size());

        if kind == PointerKind::Down && !card.contains(position) {
            return None;
        }
        *finger = match (kind, event) {
            (PointerKind::Down, Event::Touch(touch::Event::FingerPressed { id, .. })) => Some(*id),
            (PointerKind::Down | PointerKind::Up | PointerKind::Cancel, _) => None,
            (PointerKind::Move, _) => *finger,
        };

        Some(
            Action::publish(Message::Pointer(PointerEvent {
                kind,
                position,
                card_bounds: card,
            }))
            .and_capture(),
        )
    }

    fn draw(
        &self,
        _finger: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let card = card_bounds(bounds.size());
        let engine = self.state.engine();

        if let Some(next) = engine.peek_next_item() {
            with_card_transform(
                &mut frame,
                card,
                CardTransform::IDENTITY,
                sizing::NEXT_CARD_SCALE,
                |frame| {
                    draw_card(frame, next, card.size());
                    frame.fill(
                        &Path::rounded_rectangle(Point::ORIGIN, card.size(), radius::LG.into()),
                        Color {
                            a: 1.0 - opacity::NEXT_CARD,
                            ..palette::GRAY_900
                        },
                    );
                },
            );
        }

        if let Some(current) = engine.current_item() {
            let transform = self.state.top_card_transform(bounds.width);
            with_card_transform(&mut frame, card, transform, 1.0, |frame| {
                draw_card(frame, current, card.size());
                self.badge(frame, card.size(), SwipeDirection::Left);
                self.badge(frame, card.size(), SwipeDirection::Right);
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _finger: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.state.engine().is_dragging() {
            return mouse::Interaction::Grabbing;
        }
        let card = card_bounds(bounds.size());
        match cursor.position_in(bounds) {
            Some(position) if card.contains(position) && self.state.accepts_buttons() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}
