pub mod dialogs;
pub mod editor;
pub mod menu;

use iced::widget::{column, container, horizontal_space, mouse_area, row, stack, text, Space};
use iced::{Background, Border, Element, Length, Padding};
use quillpad_core::CloseDecision;

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_main_area(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if self.error_message.is_some() {
            stack![
                main_view,
                Self::backdrop(Message::DismissError),
                self.view_error_modal(),
            ]
            .into()
        } else if self.pending_close.is_some() {
            stack![
                main_view,
                Self::backdrop(Message::CloseDecision(CloseDecision::Cancel)),
                self.view_save_changes_modal(),
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(container(Space::new(Length::Fill, Length::Fill)))
                    .on_press(Message::CloseTopMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }

    /// Dimmed layer behind a modal; a press on it sends `on_press`.
    fn backdrop<'a>(on_press: Message) -> Element<'a, Message> {
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(colors::BACKDROP)),
                    ..Default::default()
                }),
        )
        .on_press(on_press)
        .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let active = self.tabs.active();

        let cursor_info = active
            .map(|tab| {
                let (line, col) = tab.content.cursor_position();
                format!("Ln {}, Col {}", line + 1, col + 1)
            })
            .unwrap_or_else(|| "Ln 1, Col 1".to_string());

        let language_info = active
            .map(|tab| tab.doc.language().to_string())
            .unwrap_or_else(|| "text".to_string());

        let status_content = row![
            text(&self.status_message).size(12).color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(cursor_info).size(12).color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text(language_info).size(12).color(colors::ACCENT),
            Space::with_width(24),
            text("UTF-8").size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
