// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header on top, swipe deck below, toasts stacked over both.

use super::Message;
use crate::deck::DeckInfo;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::swipe_deck;
use iced::widget::{column, container, row, text, Column, Container, Space, Stack};
use iced::{alignment, Background, Border, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub deck: &'a swipe_deck::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the application.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .push(header(ctx.i18n, ctx.deck.engine().deck().info()))
        .push(ctx.deck.view(ctx.i18n).map(Message::SwipeDeck))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::GRAY_900)),
            ..Default::default()
        });

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// "2 of 4 • 1 saved", or `None` once the deck is empty.
fn progress_label(i18n: &I18n, info: DeckInfo) -> Option<String> {
    if info.exhausted {
        return None;
    }
    let position = (info.position + 1).to_string();
    let total = info.total.to_string();
    let kept = info.kept.to_string();
    Some(format!(
        "{} • {}",
        i18n.tr_with_args(
            "deck-progress",
            &[("position", position.as_str()), ("total", total.as_str())]
        ),
        i18n.tr_with_args("deck-kept", &[("count", kept.as_str())]),
    ))
}

fn header(i18n: &I18n, info: DeckInfo) -> Element<'_, Message> {
    let title = text(i18n.tr("header-title"))
        .size(typography::TITLE_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::WHITE),
        });

    let progress = text(progress_label(i18n, info).unwrap_or_default())
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let badge = container(text(i18n.tr("header-badge")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::ACCENT_500)),
            text_color: Some(palette::WHITE),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        });

    row![
        column![title, progress].spacing(spacing::XXS),
        Space::new().width(Length::Fill),
        badge
    ]
        .align_y(alignment::Vertical::Center)
        .padding([spacing::MD, spacing::LG])
        .into()
}
