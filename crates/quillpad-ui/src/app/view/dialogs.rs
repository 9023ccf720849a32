use iced::widget::{button, column, container, row, text, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};
use quillpad_core::CloseDecision;

use crate::app::{App, Message};
use crate::theme::colors;

pub const SAVE_CHANGES_PROMPT: &str = "Save changes before closing?";

fn secondary_button(label: &str, msg: Message) -> Element<'_, Message> {
    button(text(label).size(13).color(colors::TEXT_PRIMARY))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => colors::BG_LIGHT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

fn primary_button(label: &str, msg: Message, base: Color, hover: Color) -> Element<'_, Message> {
    button(text(label).size(13).color(Color::WHITE))
        .padding(Padding::from([8, 20]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => hover,
                _ => base,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

fn modal_frame<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(container(content).style(|_| container::Style {
        background: Some(Background::Color(colors::BG_MEDIUM)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

impl App {
    /// Save / Discard / Cancel prompt for the tab waiting to close.
    pub fn view_save_changes_modal(&self) -> Element<'_, Message> {
        let label = self
            .pending_close
            .and_then(|id| self.tabs.position(id))
            .and_then(|idx| self.tabs.get(idx))
            .map(|tab| tab.doc.label().to_string())
            .unwrap_or_default();

        let modal_content = column![
            text("Save Changes").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text(SAVE_CHANGES_PROMPT)
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(4),
            text(label).size(11).color(colors::TEXT_MUTED),
            Space::with_height(16),
            row![
                secondary_button("Cancel", Message::CloseDecision(CloseDecision::Cancel)),
                Space::with_width(12),
                primary_button(
                    "Discard",
                    Message::CloseDecision(CloseDecision::Discard),
                    colors::DANGER,
                    colors::DANGER_HOVER,
                ),
                Space::with_width(12),
                primary_button(
                    "Save",
                    Message::CloseDecision(CloseDecision::Save),
                    colors::ACCENT,
                    Color::from_rgb(0.40, 0.58, 0.95),
                ),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(400.0));

        modal_frame(modal_content)
    }

    pub fn view_error_modal(&self) -> Element<'_, Message> {
        let message = self.error_message.as_deref().unwrap_or_default();

        let modal_content = column![
            text("Error").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text(message).size(13).color(colors::TEXT_SECONDARY),
            Space::with_height(16),
            row![
                iced::widget::horizontal_space(),
                primary_button("OK", Message::DismissError, colors::ACCENT, Color::from_rgb(0.40, 0.58, 0.95)),
            ],
        ]
        .padding(24)
        .width(Length::Fixed(400.0));

        modal_frame(modal_content)
    }
}
