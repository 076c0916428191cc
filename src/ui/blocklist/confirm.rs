// SPDX-License-Identifier: MPL-2.0
//! Yes/no confirmation before a filter is removed.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub fn view<'a>(i18n: &'a I18n, url: &'a str, removing: bool) -> Element<'a, Message> {
    let mut yes = button(Text::new(i18n.tr("confirm-yes")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::danger);
    if !removing {
        yes = yes.on_press(Message::ConfirmDelete);
    }

    let no = button(Text::new(i18n.tr("confirm-no")))
        .on_press(Message::CancelDelete)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("confirm-delete-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("confirm-delete-filter")).size(typography::BODY))
        .push(Text::new(url).size(typography::BODY_SM))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(no)
                .push(yes),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}
