// SPDX-License-Identifier: MPL-2.0
//! Add/edit filter dialog.

use super::Message as ParentMessage;
use crate::filtering::{FilteringState, ModalFilterData, ModalType};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, text_input, toggler, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use reqwest::Url;

/// Editable dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub url: String,
    pub enabled: bool,
}

impl Form {
    /// Fields pre-filled from `data`; a missing `enabled` defaults to on.
    #[must_use]
    pub fn seeded(data: ModalFilterData) -> Self {
        Self {
            name: data.name,
            url: data.url,
            enabled: data.enabled.unwrap_or(true),
        }
    }

    #[must_use]
    pub fn is_name_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The url must be absolute http(s).
    #[must_use]
    pub fn is_url_valid(&self) -> bool {
        Url::parse(self.url.trim())
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_name_valid() && self.is_url_valid()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    UrlChanged(String),
    EnabledToggled(bool),
    Submit,
    Close,
}

/// Applies a field edit. Submit and close are handled by the parent.
pub fn update_form(form: &mut Form, message: &Message) {
    match message {
        Message::NameChanged(name) => form.name.clone_from(name),
        Message::UrlChanged(url) => form.url.clone_from(url),
        Message::EnabledToggled(enabled) => form.enabled = *enabled,
        Message::Submit | Message::Close => {}
    }
}

pub fn view<'a>(
    i18n: &'a I18n,
    filtering: &'a FilteringState,
    form: &'a Form,
) -> Element<'a, ParentMessage> {
    let modal_type = filtering.modal_type();
    let title_key = match modal_type {
        ModalType::Add => "modal-add-title",
        ModalType::Edit => "modal-edit-title",
    };

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(title_key))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            button(icons::sized(icons::cross(), sizing::ICON_SM))
                .on_press(Message::Close)
                .padding(spacing::XXS)
                .style(styles::button::ghost),
        );

    let body: Element<'a, Message> = if filtering.is_filter_added() {
        added_body(i18n)
    } else {
        form_body(i18n, filtering, form, modal_type)
    };

    let card = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body);

    let element: Element<'a, Message> = Container::new(card)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into();
    element.map(ParentMessage::Modal)
}

fn form_body<'a>(
    i18n: &'a I18n,
    filtering: &'a FilteringState,
    form: &'a Form,
    modal_type: ModalType,
) -> Element<'a, Message> {
    let name_placeholder = i18n.tr("modal-name-placeholder");
    let url_placeholder = i18n.tr("modal-url-placeholder");

    let mut fields = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("modal-name-label")).size(typography::BODY_SM))
        .push(
            text_input(&name_placeholder, &form.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS)
                .size(typography::BODY_LG),
        )
        .push(Text::new(i18n.tr("modal-url-label")).size(typography::BODY_SM))
        .push(
            text_input(&url_placeholder, &form.url)
                .on_input(Message::UrlChanged)
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY_LG),
        );

    if !form.url.trim().is_empty() && !form.is_url_valid() {
        fields = fields.push(
            Text::new(i18n.tr("modal-url-invalid"))
                .size(typography::CAPTION)
                .style(iced::widget::text::danger),
        );
    }

    if modal_type == ModalType::Edit {
        fields = fields.push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(i18n.tr("modal-enabled-label")).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(
                    toggler(form.enabled)
                        .on_toggle(Message::EnabledToggled)
                        .size(20.0),
                ),
        );
    }

    let busy = match modal_type {
        ModalType::Add => filtering.processing().add,
        ModalType::Edit => filtering
            .modal_filter_url()
            .is_some_and(|url| filtering.is_toggling(url)),
    };

    let mut submit = button(Text::new(i18n.tr("modal-save-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if form.can_submit() && !busy {
        submit = submit.on_press(Message::Submit);
    }

    let cancel = button(Text::new(i18n.tr("modal-cancel-button")))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(Space::new().width(Length::Fill))
        .push(cancel)
        .push(submit);

    Column::new()
        .spacing(spacing::MD)
        .push(fields)
        .push(actions)
        .into()
}

fn added_body<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let close = button(Text::new(i18n.tr("modal-close-button")))
        .on_press(Message::Close)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(icons::sized(icons::checkmark(), sizing::ICON_MD))
                .push(Text::new(i18n.tr("filter-added-success")).size(typography::BODY_LG)),
        )
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(close),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, url: &str) -> Form {
        Form {
            name: name.into(),
            url: url.into(),
            enabled: true,
        }
    }

    #[test]
    fn seeded_form_keeps_enabled_or_defaults_on() {
        let seeded = Form::seeded(ModalFilterData {
            enabled: Some(false),
            name: "A".into(),
            url: "https://a.example".into(),
        });
        assert!(!seeded.enabled);
        assert!(Form::seeded(ModalFilterData::default()).enabled);
    }

    #[test]
    fn submit_requires_name_and_http_url() {
        assert!(form("AdGuard", "https://a.example/list.txt").can_submit());
        assert!(form("Local", "http://10.0.0.1/hosts").can_submit());
        assert!(!form("", "https://a.example/list.txt").can_submit());
        assert!(!form("   ", "https://a.example/list.txt").can_submit());
        assert!(!form("AdGuard", "a.example/list.txt").can_submit());
        assert!(!form("AdGuard", "ftp://a.example/list.txt").can_submit());
        assert!(!form("AdGuard", "").can_submit());
    }

    #[test]
    fn field_messages_edit_form() {
        let mut f = Form::default();
        update_form(&mut f, &Message::NameChanged("N".into()));
        update_form(&mut f, &Message::UrlChanged("https://n.example".into()));
        update_form(&mut f, &Message::EnabledToggled(true));
        assert_eq!(f, form("N", "https://n.example"));
    }
}
