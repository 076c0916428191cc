// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar, the
//! blocklist screens and the appliance client.
//!
//! The `App` struct wires together the domains (filtering state, localization,
//! navigation) and translates messages into side effects like HTTP requests
//! or toasts. Policy decisions (window size, which screens load filter data)
//! stay close to the main update loop so user-facing behavior is easy to audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::Client;
use crate::error::Result;
use crate::filtering::FilteringState;
use crate::i18n::fluent::I18n;
use crate::ui::blocklist;
use crate::ui::navbar::{self, MenuActions};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;

/// Owner of the "menu open" flag driven by the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMenu {
    open: bool,
}

impl MenuActions for HeaderMenu {
    fn is_menu_open(&self) -> bool {
        self.open
    }

    fn close_menu(&mut self) {
        self.open = false;
    }

    fn toggle_menu_open(&mut self) {
        self.open = !self.open;
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    filtering: FilteringState,
    blocklist: blocklist::State,
    navbar: navbar::State,
    menu: HeaderMenu,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Appliance client, or why none could be built from the config.
    client: Result<Client>,
    theme_mode: ThemeMode,
    window_size: Size,
    /// Last cursor position, used to place pointer presses.
    cursor: Point,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("filters", &self.filtering.filters().len())
            .field("menu", &self.menu)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
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

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            filtering: FilteringState::new(),
            blocklist: blocklist::State::new(config.filters.page_size()),
            navbar: navbar::State::default(),
            menu: HeaderMenu::default(),
            notifications: notifications::Manager::new(),
            client: Client::new(&config.server),
            theme_mode: config.general.theme_mode,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: Point::ORIGIN,
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (mut config, config_warning) = config::load();
        if let Some(server) = flags.server {
            config.server.url = server;
        }

        let client = Client::new(&config.server);
        match &client {
            Ok(client) => tracing::info!(server = %client.base_url(), "appliance configured"),
            Err(err) => tracing::warn!(error = %err, "no usable appliance address"),
        }

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            blocklist: blocklist::State::new(config.filters.page_size()),
            client,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };
        tracing::info!(locale = %app.i18n.current_locale(), "console started");

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let screen = flags
            .route
            .as_deref()
            .and_then(Screen::from_path)
            .unwrap_or_default();
        let task = app.update_ctx(|ctx| update::navigate(ctx, screen));
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.i18n.tr(self.screen.title_key()),
            self.i18n.tr("window-title")
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_ctx(
        &mut self,
        f: impl FnOnce(&mut update::UpdateContext<'_>) -> Task<Message>,
    ) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            filtering: &mut self.filtering,
            blocklist: &mut self.blocklist,
            navbar: &mut self.navbar,
            menu: &mut self.menu,
            notifications: &mut self.notifications,
            client: &self.client,
            window_size: &mut self.window_size,
            cursor: &mut self.cursor,
        };
        f(&mut ctx)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                self.update_ctx(|ctx| update::handle_navbar_message(ctx, message))
            }
            Message::Blocklist(message) => {
                self.update_ctx(|ctx| update::handle_blocklist_message(ctx, message))
            }
            Message::Outcome(outcome) => {
                self.update_ctx(|ctx| update::handle_outcome(ctx, outcome))
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.update_ctx(|ctx| update::handle_window_resized(ctx, size))
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::PointerPressed => self.update_ctx(update::handle_pointer_pressed),
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            filtering: &self.filtering,
            blocklist: &self.blocklist,
            navbar: &self.navbar,
            menu_open: self.menu.open,
            window_size: self.window_size,
            notifications: &self.notifications,
        })
    }
}
