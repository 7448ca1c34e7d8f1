// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` wires the swipe deck, localization and toasts together and
//! turns deck effects into tasks: a committed swipe shows a feedback toast
//! and schedules the end of its exit animation.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::featured_products;
use crate::config::{self, Config};
use crate::deck::Deck;
use crate::i18n::I18n;
use crate::swipe::{RandomFeedback, SwipeEngine};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::{self, Notification};
use crate::ui::swipe_deck;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    deck: swipe_deck::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("cursor", &self.deck.engine().cursor())
            .field("phase", &self.deck.engine().phase())
            .finish()
    }
}

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags, &config);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        (app, Task::none())
    }

    /// Builds the state from an already loaded config.
    fn with_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let (settings, rejected) = config.swipe.to_settings_or_default();
        let exhaustion = flags
            .exhaustion
            .unwrap_or_else(|| config.swipe.exhaustion_mode());
        tracing::info!(
            locale = %i18n.current_locale(),
            ?exhaustion,
            peek = settings.thresholds.peek().value(),
            commit = settings.thresholds.commit().value(),
            "starting swipe deck"
        );

        let deck = Deck::with_policy(featured_products(), exhaustion.into_policy());
        let engine = SwipeEngine::new(deck, settings);

        let mut notifications = notifications::Manager::new();
        if let Some(invalid) = rejected {
            notifications.push(
                Notification::warning(config::INVALID_THRESHOLDS_KEY)
                    .with_arg("peek", invalid.peek.to_string())
                    .with_arg("commit", invalid.commit.to_string()),
            );
        }

        Self {
            i18n,
            deck: swipe_deck::State::new(engine, Box::new(RandomFeedback::new())),
            notifications,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_animation_subscription(self.deck.is_animating()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwipeDeck(msg) => self.handle_deck(msg),
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.handle_deck(swipe_deck::Message::Tick(now))
            }
        }
    }

    fn handle_deck(&mut self, msg: swipe_deck::Message) -> Task<Message> {
        match self.deck.handle(msg) {
            swipe_deck::Effect::None => Task::none(),
            swipe_deck::Effect::Committed {
                decision,
                message_key,
                exit,
            } => {
                self.notifications
                    .push(Notification::feedback(decision, message_key));
                Task::perform(tokio::time::sleep(exit), |()| {
                    Message::SwipeDeck(swipe_deck::Message::CommitElapsed)
                })
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            deck: &self.deck,
            notifications: &self.notifications,
        })
    }
}
