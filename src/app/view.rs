// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the page (navbar and current screen), the navbar
//! dropdown or drawer, the blocklist dialog, then toasts.

use super::{Message, Screen};
use crate::filtering::FilteringState;
use crate::i18n::fluent::I18n;
use crate::ui::blocklist::{self, ViewContext as BlocklistViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use iced::{
    widget::{scrollable, Column, Container, Stack, Text},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub filtering: &'a FilteringState,
    pub blocklist: &'a blocklist::State,
    pub navbar: &'a navbar::State,
    pub menu_open: bool,
    pub window_size: Size,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let nav = NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        current: ctx.screen,
        menu_open: ctx.menu_open,
        window_width: ctx.window_size.width,
    };
    let blocklist_ctx = || BlocklistViewContext {
        i18n: ctx.i18n,
        filtering: ctx.filtering,
        state: ctx.blocklist,
    };

    let content: Element<'_, Message> = match ctx.screen {
        Screen::Blocklist => blocklist::view(blocklist_ctx()).map(Message::Blocklist),
        Screen::CustomRules => blocklist::rules_view(blocklist_ctx()).map(Message::Blocklist),
        other => view_placeholder(ctx.i18n, other),
    };

    let page = Column::new()
        .push(navbar::view(&nav).map(Message::Navbar))
        .push(
            scrollable(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(menu) = navbar::overlay(&nav) {
        layers = layers.push(menu.map(Message::Navbar));
    }

    if ctx.screen == Screen::Blocklist {
        if let Some(dialog) = blocklist::dialog(blocklist_ctx()) {
            layers = layers.push(dialog.map(Message::Blocklist));
        }
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

/// Routes this console does not manage yet.
fn view_placeholder(i18n: &I18n, screen: Screen) -> Element<'_, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(i18n.tr(screen.title_key())).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("page-unavailable")).size(typography::BODY)),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .into()
}
