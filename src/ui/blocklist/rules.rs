// SPDX-License-Identifier: MPL-2.0
//! Custom filtering rules editor.

use super::Message as ParentMessage;
use crate::filtering::FilteringState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_editor, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length};

/// Editor buffer mirroring [`FilteringState::user_rules`].
#[derive(Default)]
pub struct Editor {
    content: text_editor::Content,
    /// Edited since the last load or save.
    dirty: bool,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("lines", &self.content.line_count())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl Editor {
    /// Replaces the buffer with `rules`.
    pub fn load(&mut self, rules: &str) {
        self.content = text_editor::Content::with_text(rules);
        self.dirty = false;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.content.text()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(text_editor::Action),
    Apply,
}

/// Applies an editor action and writes the new text back to the state owner.
///
/// Returns `true` when the text changed.
pub fn edit(editor: &mut Editor, filtering: &mut FilteringState, action: text_editor::Action) -> bool {
    let is_edit = action.is_edit();
    editor.content.perform(action);
    if is_edit {
        editor.dirty = true;
        filtering.set_user_rules(editor.text());
    }
    is_edit
}

pub fn view<'a>(
    i18n: &'a I18n,
    filtering: &'a FilteringState,
    editor: &'a Editor,
) -> Element<'a, ParentMessage> {
    let saving = filtering.processing().rules;

    let input = text_editor(&editor.content)
        .placeholder(i18n.tr("rules-placeholder"))
        .on_action(Message::Edit)
        .font(Font::MONOSPACE)
        .size(typography::BODY)
        .height(Length::Fixed(sizing::RULES_EDITOR_HEIGHT))
        .padding(spacing::SM);

    let mut apply = button(Text::new(i18n.tr("rules-apply-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    if !saving {
        apply = apply.on_press(Message::Apply);
    }

    let content: Element<'a, Message> = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("nav-custom-rules")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("rules-hint")).size(typography::BODY_SM))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::MD)
                    .push(input)
                    .push(Row::new().push(Space::new().width(Length::Fill)).push(apply)),
            )
            .padding(spacing::MD)
            .style(styles::container::panel),
        )
        .into();

    content.map(ParentMessage::Rules)
}
