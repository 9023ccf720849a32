use iced::{keyboard, window, Point, Size, Subscription, Task};
use quillpad_core::{Config, TabId, TabStrip};

pub mod file_dialogs;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::style::EditorStyle;

pub struct App {
    pub tabs: TabStrip<Tab>,
    pub config: Config,
    pub editor_style: EditorStyle,
    pub status_message: String,
    pub active_menu: Option<TopMenu>,
    /// Modified tab waiting on the Save / Discard / Cancel prompt
    pub pending_close: Option<TabId>,
    /// Text of the open error modal
    pub error_message: Option<String>,
    pub tab_bar_clicks: DoubleClick,
}

impl App {
    /// Builds the window state: one untitled tab, then any start-up files.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let editor_style = EditorStyle::from_config(&flags.config.editor);
        let mut app = Self {
            tabs: TabStrip::new(),
            config: flags.config,
            editor_style,
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save".to_string(),
            active_menu: None,
            pending_close: None,
            error_message: None,
            tab_bar_clicks: DoubleClick::default(),
        };

        app.add_tab();
        for path in flags.files {
            app.open_path(path);
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        let base = &self.config.window.title;
        match self.tabs.active() {
            Some(tab) if tab.doc.is_modified() => format!("{} * - {}", tab.doc.label(), base),
            Some(tab) => format!("{} - {}", tab.doc.label(), base),
            None => base.clone(),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

/// Runs the editor window until it is closed.
pub fn run(flags: Flags) -> iced::Result {
    let window = &flags.config.window;
    let size = Size::new(window.width, window.height);
    let position = window::Position::Specific(Point::new(window.x, window.y));

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .position(position)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
