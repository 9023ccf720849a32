use iced::widget::{button, column, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Message, TopMenu};
use crate::theme::colors;

impl TopMenu {
    const ALL: [TopMenu; 1] = [TopMenu::File];

    fn label(self) -> &'static str {
        match self {
            TopMenu::File => "File",
        }
    }

    /// Horizontal offset of the dropdown under its menu button.
    fn dropdown_offset(self) -> f32 {
        match self {
            TopMenu::File => 8.0,
        }
    }
}

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in TopMenu::ALL {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(text(menu.label()).size(12).color(if is_active {
                colors::TEXT_PRIMARY
            } else {
                colors::TEXT_SECONDARY
            }))
            .padding(Padding::from([6, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    colors::BG_ACTIVE
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_MEDIUM,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleTopMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let bar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(bar)
            .width(Length::Fill)
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

    /// A dropdown entry with its label, shortcut hint and action.
    pub fn menu_item<'a>(label: &'a str, shortcut: &'a str, msg: Message) -> Element<'a, Message> {
        button(
            row![
                text(label).size(12).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(shortcut).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
    }

    pub fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .padding(Padding::from([4, 8]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some(menu) = self.active_menu else {
            return Space::new(0, 0).into();
        };

        let items: Vec<Element<'_, Message>> = match menu {
            TopMenu::File => vec![
                Self::menu_item("New Tab", "Ctrl+N", Message::NewTab),
                Self::menu_separator(),
                Self::menu_item("Open", "Ctrl+O", Message::OpenFile),
                Self::menu_item("Save", "Ctrl+S", Message::Save),
            ],
        };

        let menu_box = container(Column::with_children(items).width(Length::Fixed(220.0)).padding(4)).style(|_| {
            container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            }
        });

        column![
            Space::with_height(Length::Fixed(32.0)),
            row![Space::with_width(Length::Fixed(menu.dropdown_offset())), menu_box],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
