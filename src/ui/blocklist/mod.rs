// SPDX-License-Identifier: MPL-2.0
//! DNS blocklist screen: the filter table, its dialogs and the custom rules
//! editor.
//!
//! The component never mutates filter rows. It reads [`FilteringState`],
//! applies local dialog operations to it, and returns [`Event::Dispatch`]
//! for anything that must reach the appliance.

mod confirm;
pub mod modal;
pub mod rules;
pub mod table;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::filtering::{FilterPatch, FilteringState, Intent, ModalKind, ModalType};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, opaque, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Screen-local state.
#[derive(Debug)]
pub struct State {
    page: usize,
    page_size: usize,
    form: modal::Form,
    /// Url awaiting delete confirmation.
    pending_delete: Option<String>,
    rules: rules::Editor,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl State {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            form: modal::Form::default(),
            pending_delete: None,
            rules: rules::Editor::default(),
        }
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn form(&self) -> &modal::Form {
        &self.form
    }

    #[must_use]
    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Re-reads state owned elsewhere after a status fetch: clamps the page
    /// to the new row count and reloads the rules buffer.
    ///
    /// Unsaved rule edits win over the fetched text and are written back.
    pub fn sync(&mut self, filtering: &mut FilteringState) {
        let last = filtering.filters().page_count(self.page_size) - 1;
        self.page = self.page.min(last);
        if self.rules.is_dirty() {
            filtering.set_user_rules(self.rules.text());
        } else {
            self.rules.load(filtering.user_rules());
        }
    }

    /// The appliance accepted the rules; later fetches may reload them.
    pub fn rules_saved(&mut self) {
        self.rules.mark_saved();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Enable toggle of the row with this url.
    ToggleEnabled(String),
    OpenLink(String),
    PreviousPage,
    NextPage,
    AddFilter,
    EditFilter(String),
    /// Delete pressed; asks for confirmation.
    DeleteFilter(String),
    ConfirmDelete,
    CancelDelete,
    RefreshFilters,
    Modal(modal::Message),
    Rules(rules::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Dispatch(Intent),
    OpenUrl(String),
}

/// Process a blocklist message and return the corresponding event.
pub fn update(state: &mut State, filtering: &mut FilteringState, message: Message) -> Event {
    match message {
        Message::ToggleEnabled(url) => {
            if filtering.is_toggling(&url) {
                return Event::None;
            }
            match filtering.filters().get(&url) {
                Some(entry) => Event::Dispatch(Intent::ToggleFilter {
                    patch: FilterPatch::toggled(entry),
                    url,
                }),
                None => Event::None,
            }
        }
        Message::OpenLink(url) => Event::OpenUrl(url),
        Message::PreviousPage => {
            state.page = state.page.saturating_sub(1);
            Event::None
        }
        Message::NextPage => {
            let last = filtering.filters().page_count(state.page_size) - 1;
            state.page = (state.page + 1).min(last);
            Event::None
        }
        Message::AddFilter => {
            filtering.toggle_modal(ModalKind::Add);
            state.form = modal::Form::default();
            Event::None
        }
        Message::EditFilter(url) => {
            filtering.open_modal(ModalKind::Edit { url });
            state.form = modal::Form::seeded(filtering.current_filter_data());
            Event::None
        }
        Message::DeleteFilter(url) => {
            state.pending_delete = Some(url);
            Event::None
        }
        Message::ConfirmDelete => match state.pending_delete.take() {
            Some(url) => Event::Dispatch(Intent::RemoveFilter { url }),
            None => Event::None,
        },
        Message::CancelDelete => {
            state.pending_delete = None;
            Event::None
        }
        Message::RefreshFilters => Event::Dispatch(Intent::RefreshFilters),
        Message::Modal(message) => update_modal(state, filtering, message),
        Message::Rules(rules::Message::Edit(action)) => {
            rules::edit(&mut state.rules, filtering, action);
            Event::None
        }
        Message::Rules(rules::Message::Apply) => {
            Event::Dispatch(Intent::SetRules(filtering.user_rules().to_string()))
        }
    }
}

fn update_modal(state: &mut State, filtering: &mut FilteringState, message: modal::Message) -> Event {
    match message {
        modal::Message::Submit => {
            if !state.form.can_submit() {
                return Event::None;
            }
            let form = &state.form;
            let name = form.name.trim().to_string();
            let url = form.url.trim().to_string();
            let intent = match (filtering.modal_type(), filtering.modal_filter_url()) {
                (ModalType::Edit, Some(current_url)) => Intent::EditFilter {
                    url: current_url.to_string(),
                    patch: FilterPatch {
                        name,
                        url,
                        enabled: form.enabled,
                    },
                },
                _ => Intent::AddFilter { url, name },
            };
            Event::Dispatch(intent)
        }
        modal::Message::Close => {
            filtering.close_modal();
            Event::None
        }
        field => {
            modal::update_form(&mut state.form, &field);
            Event::None
        }
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filtering: &'a FilteringState,
    pub state: &'a State,
}

/// Renders the blocklist page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("nav-dns-blocklist")).size(typography::TITLE_LG);

    let add = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::plus(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("add-filter-button"))),
    )
    .on_press(Message::AddFilter)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary);

    let mut refresh = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::refresh(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("check-updates-button"))),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::secondary);
    if !ctx.filtering.processing().refresh {
        refresh = refresh.on_press(Message::RefreshFilters);
    }

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(add)
        .push(refresh)
        .push(Space::new().width(Length::Fill));

    let interval = ctx.filtering.update_interval();
    let hint = if interval == 0 {
        ctx.i18n.tr("blocklist-hint")
    } else {
        ctx.i18n
            .tr_with_args("blocklist-update-interval", &[("hours", &interval.to_string())])
    };

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(table::view(&ctx))
            .push(actions),
    )
    .padding(spacing::MD)
    .style(styles::container::panel);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(title)
        .push(Text::new(hint).size(typography::BODY_SM))
        .push(card)
        .into()
}

/// Renders the custom rules page.
pub fn rules_view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Container::new(rules::view(ctx.i18n, ctx.filtering, &ctx.state.rules))
        .padding(spacing::LG)
        .into()
}

/// Renders the open dialog over a scrim, if any.
pub fn dialog<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let card = if let Some(url) = ctx.state.pending_delete.as_deref() {
        confirm::view(ctx.i18n, url, ctx.filtering.processing().remove)
    } else if ctx.filtering.is_modal_open() {
        modal::view(ctx.i18n, ctx.filtering, &ctx.state.form)
    } else {
        return None;
    };

    // The scrim swallows clicks meant for the page underneath.
    Some(opaque(
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::scrim),
    ))
}
