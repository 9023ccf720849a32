use iced::widget::{
    button, column, container, horizontal_space, mouse_area, row, scrollable, text, text_editor, Row, Space,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};

use crate::app::{App, Message, Tab};
use crate::highlighter::{EditorHighlighter, HighlightSettings};
use crate::style::{gutter_text, EDITOR_PADDING};
use crate::theme::colors;

impl App {
    pub fn view_main_area(&self) -> Element<'_, Message> {
        column![self.view_tabs(), self.view_editor()]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The tab bar. Presses that land on the bar itself, rather than on a
    /// tab, feed the double-click detector.
    pub fn view_tabs(&self) -> Element<'_, Message> {
        let active = self.tabs.active_index();
        let mut tabs_vec: Vec<Element<'_, Message>> = Vec::new();

        for (idx, tab) in self.tabs.iter().enumerate() {
            tabs_vec.push(self.make_tab(tab, idx, active == Some(idx)));
        }

        tabs_vec.push(horizontal_space().into());

        let tabs_row = Row::with_children(tabs_vec)
            .spacing(1)
            .height(Length::Fill)
            .align_y(iced::Alignment::End);

        let bar = container(tabs_row)
            .width(Length::Fill)
            .height(36)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            });

        mouse_area(bar).on_press(Message::TabBarPressed).into()
    }

    pub fn make_tab<'a>(&self, tab: &'a Tab, idx: usize, is_active: bool) -> Element<'a, Message> {
        let display_name = if tab.doc.is_modified() {
            format!("{} *", tab.doc.label())
        } else {
            tab.doc.label().to_string()
        };

        let close_btn = button(text("x").size(12).color(colors::TEXT_MUTED))
            .padding(Padding::from([2, 6]))
            .style(|_, status| {
                let bg = match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    _ => Color::TRANSPARENT,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 2.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::CloseTab(idx));

        let tab_content = row![
            text(display_name).size(13).color(if is_active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            }),
            Space::with_width(8),
            close_btn,
        ]
        .align_y(iced::Alignment::Center);

        let bg = if is_active { colors::BG_DARK } else { colors::BG_MEDIUM };

        button(tab_content)
            .padding(Padding::from([8, 14]))
            .style(move |_, status| {
                let hover_bg = match status {
                    button::Status::Hovered if !is_active => colors::BG_HOVER,
                    _ => bg,
                };
                button::Style {
                    background: Some(Background::Color(hover_bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        color: if is_active { colors::ACCENT } else { Color::TRANSPARENT },
                        width: if is_active { 2.0 } else { 0.0 },
                        radius: 0.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::TabSelected(idx))
            .into()
    }

    /// The active tab's editor with its line-number gutter.
    pub fn view_editor(&self) -> Element<'_, Message> {
        let Some(tab) = self.tabs.active() else {
            return container(text("No file open").size(16).color(colors::TEXT_MUTED))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_| container::Style {
                    background: Some(Background::Color(colors::BG_DARK)),
                    ..Default::default()
                })
                .into();
        };

        let style = self.editor_style;
        let settings = HighlightSettings {
            language: tab.doc.language().to_string(),
        };

        // Every byte gets a highlight colour, so `value` only paints the caret.
        let editor = text_editor(&tab.content)
            .font(Font::MONOSPACE)
            .size(style.font_size)
            .padding(EDITOR_PADDING)
            .style(move |_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: style.caret_color,
                selection: colors::SELECTION,
            })
            .highlight_with::<EditorHighlighter>(settings, |highlight, _theme| highlight.to_format())
            .on_action(Message::EditorAction);

        let body: Element<'_, Message> = if style.line_numbers {
            let gutter = container(
                text(gutter_text(tab.content.line_count()))
                    .font(Font::MONOSPACE)
                    .size(style.font_size)
                    .color(colors::TEXT_MUTED)
                    .align_x(iced::alignment::Horizontal::Right)
                    .width(Length::Fill),
            )
            .width(Length::Fixed(style.gutter_width))
            .padding(Padding {
                top: EDITOR_PADDING,
                right: 6.0,
                bottom: EDITOR_PADDING,
                left: 0.0,
            })
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_GUTTER)),
                ..Default::default()
            });

            scrollable(row![gutter, editor].width(Length::Fill))
                .height(Length::Fill)
                .into()
        } else {
            scrollable(editor).height(Length::Fill).into()
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }
}
