use iced::keyboard;
use iced::widget::text_editor;
use quillpad_core::{CloseDecision, TabId};
use std::path::PathBuf;

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    NewTab,
    OpenFile,
    Save,
    CloseTab(usize),

    // Tabs
    TabSelected(usize),
    TabBarPressed,

    // Editor
    EditorAction(text_editor::Action),

    // Modals
    CloseDecision(CloseDecision),
    DismissError,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Dialog results
    OpenDialogClosed(Option<PathBuf>),
    SaveDialogClosed {
        tab: TabId,
        path: Option<PathBuf>,
        /// Remove the tab once the save succeeds
        close_after: bool,
    },
}
