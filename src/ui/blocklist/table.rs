// SPDX-License-Identifier: MPL-2.0
//! Paginated filter table.

use super::{Message, ViewContext};
use crate::config::MIN_VISIBLE_ROWS;
use crate::filtering::FilterEntry;
use crate::i18n::format::{format_count, format_detailed_datetime};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, rule, toggler, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Text shown in place of a missing last-update time.
const NEVER_UPDATED: &str = "–";

/// Blank rows appended so a short page keeps its height.
#[must_use]
pub fn filler_rows(visible: usize) -> usize {
    MIN_VISIBLE_ROWS.saturating_sub(visible)
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let filters = ctx.filtering.filters();
    let page_size = ctx.state.page_size();
    let page_count = filters.page_count(page_size);
    let page = ctx.state.page().min(page_count - 1);
    let rows = filters.page(page, page_size);
    let loading = ctx.filtering.table_loading();

    let mut table = Column::new().width(Length::Fill).push(header(ctx));

    if loading {
        table = table.push(caption(ctx.i18n.tr("table-loading")));
    } else if filters.is_empty() {
        table = table.push(caption(ctx.i18n.tr("no-filters-added")));
    }

    for entry in rows {
        table = table.push(row(ctx, entry)).push(rule::horizontal(1));
    }
    for _ in 0..filler_rows(rows.len()) {
        table = table.push(Space::new().height(Length::Fixed(sizing::TABLE_ROW_HEIGHT)));
    }

    table.push(pagination(ctx, page, page_count)).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = |key: &str| Text::new(ctx.i18n.tr(key)).size(typography::BODY_SM);

    let cells = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(label("table-column-enabled")).width(sizing::TABLE_TOGGLE_WIDTH))
        .push(Container::new(label("table-column-name")).width(Length::FillPortion(2)))
        .push(Container::new(label("table-column-url")).width(Length::FillPortion(3)))
        .push(Container::new(label("table-column-rules-count")).width(sizing::TABLE_COUNT_WIDTH))
        .push(Container::new(label("table-column-last-updated")).width(sizing::TABLE_DATE_WIDTH))
        .push(
            Container::new(label("table-column-actions"))
                .width(sizing::TABLE_ACTIONS_WIDTH)
                .align_x(Horizontal::Center),
        );

    Container::new(cells)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::table_header)
        .into()
}

fn row<'a>(ctx: &ViewContext<'a>, entry: &'a FilterEntry) -> Element<'a, Message> {
    let locale = ctx.i18n.current_locale();

    let mut toggle = toggler(entry.enabled).size(20.0);
    if !ctx.filtering.is_toggling(&entry.url) {
        let url = entry.url.clone();
        toggle = toggle.on_toggle(move |_| Message::ToggleEnabled(url.clone()));
    }

    let link = button(Text::new(entry.url.as_str()).size(typography::BODY_SM))
        .on_press(Message::OpenLink(entry.url.clone()))
        .padding(0)
        .style(styles::button::link);

    let last_updated = entry
        .last_updated
        .map(|time| format_detailed_datetime(&time, locale))
        .unwrap_or_else(|| NEVER_UPDATED.to_string());

    let edit = button(icons::sized(icons::pencil(), sizing::ICON_SM))
        .on_press(Message::EditFilter(entry.url.clone()))
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let mut delete = button(icons::sized(icons::trash(), sizing::ICON_SM))
        .padding(spacing::XXS)
        .style(styles::button::ghost);
    if !ctx.filtering.processing().remove {
        delete = delete.on_press(Message::DeleteFilter(entry.url.clone()));
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(edit)
        .push(delete);

    let cells = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(toggle).width(sizing::TABLE_TOGGLE_WIDTH))
        .push(
            Container::new(Text::new(entry.name.as_str()).size(typography::BODY))
                .width(Length::FillPortion(2)),
        )
        .push(Container::new(link).width(Length::FillPortion(3)))
        .push(
            Container::new(
                Text::new(format_count(entry.rules_count, locale)).size(typography::BODY),
            )
            .width(sizing::TABLE_COUNT_WIDTH),
        )
        .push(
            Container::new(Text::new(last_updated).size(typography::BODY_SM))
                .width(sizing::TABLE_DATE_WIDTH),
        )
        .push(
            Container::new(actions)
                .width(sizing::TABLE_ACTIONS_WIDTH)
                .align_x(Horizontal::Center),
        );

    Container::new(cells)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TABLE_ROW_HEIGHT))
        .padding([0.0, spacing::SM])
        .align_y(Vertical::Center)
        .into()
}

fn caption<'a>(text: String) -> Element<'a, Message> {
    Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .into()
}

fn pagination<'a>(ctx: &ViewContext<'a>, page: usize, page_count: usize) -> Element<'a, Message> {
    let mut previous = button(Text::new(ctx.i18n.tr("table-previous")))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);
    if page > 0 {
        previous = previous.on_press(Message::PreviousPage);
    }

    let mut next = button(Text::new(ctx.i18n.tr("table-next")))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);
    if page + 1 < page_count {
        next = next.on_press(Message::NextPage);
    }

    let current = (page + 1).to_string();
    let total = page_count.to_string();
    let caption = ctx
        .i18n
        .tr_with_args("table-page-caption", &[("current", &current), ("total", &total)]);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(
            Container::new(Text::new(caption).size(typography::BODY_SM))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(next)
        .into()
}
