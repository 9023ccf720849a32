use std::path::PathBuf;
use std::time::Instant;

use iced::{keyboard, Task};
use quillpad_core::{close_action, read_text, with_extension_appended, write_text, CloseAction, TabId};

use super::file_dialogs::{pick_open_path, pick_save_path};
use super::{App, Message, Tab};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewTab => {
                self.active_menu = None;
                self.add_tab();
            }

            Message::TabBarPressed => {
                self.active_menu = None;
                if self.tab_bar_clicks.press(Instant::now()) {
                    self.add_tab();
                }
            }

            Message::OpenFile => {
                self.active_menu = None;
                return Task::perform(pick_open_path(), Message::OpenDialogClosed);
            }

            Message::OpenDialogClosed(path) => match path {
                Some(path) => self.open_path(path),
                None => tracing::debug!("Open dialog cancelled"),
            },

            Message::Save => {
                self.active_menu = None;
                if let Some(id) = self.tabs.active().map(|t| t.doc.id()) {
                    return self.request_save(id, false);
                }
            }

            Message::SaveDialogClosed {
                tab,
                path,
                close_after,
            } => match path {
                Some(path) => self.save_to(tab, path, close_after),
                None => tracing::debug!("Save dialog cancelled"),
            },

            Message::CloseTab(idx) => {
                if self.pending_close.is_some() || self.error_message.is_some() {
                    return Task::none();
                }
                let Some(tab) = self.tabs.get(idx) else {
                    return Task::none();
                };

                match close_action(tab.doc.is_modified(), None) {
                    CloseAction::Remove => self.remove_tab(idx),
                    _ => self.pending_close = Some(tab.doc.id()),
                }
            }

            Message::CloseDecision(decision) => {
                let Some(id) = self.pending_close.take() else {
                    return Task::none();
                };
                let Some(idx) = self.tabs.position(id) else {
                    return Task::none();
                };

                match close_action(true, Some(decision)) {
                    CloseAction::Remove => self.remove_tab(idx),
                    CloseAction::SaveThenRemove => return self.request_save(id, true),
                    CloseAction::Keep => {
                        self.status_message = "Close cancelled".to_string();
                    }
                }
            }

            Message::DismissError => {
                self.error_message = None;
            }

            Message::TabSelected(idx) => {
                self.active_menu = None;
                if self.tabs.set_active(idx) {
                    if let Some(tab) = self.tabs.active() {
                        self.status_message = format!("Editing: {}", tab.doc.label());
                    }
                }
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                if let Some(tab) = self.tabs.active_mut() {
                    let is_edit = action.is_edit();
                    tab.content.perform(action);
                    if is_edit {
                        tab.doc.mark_modified();
                    }
                }
            }

            Message::ToggleTopMenu(menu) => {
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
        }
        Task::none()
    }

    pub fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            if self.error_message.is_some() {
                return self.update(Message::DismissError);
            }
            if self.pending_close.is_some() {
                return self.update(Message::CloseDecision(quillpad_core::CloseDecision::Cancel));
            }
            return self.update(Message::CloseTopMenu);
        }

        if !modifiers.control() || modifiers.shift() || modifiers.alt() {
            return Task::none();
        }
        // Shortcuts stay inert while a modal is up.
        if self.pending_close.is_some() || self.error_message.is_some() {
            return Task::none();
        }

        if let keyboard::Key::Character(c) = &key {
            match c.to_lowercase().as_str() {
                "n" => return self.update(Message::NewTab),
                "o" => return self.update(Message::OpenFile),
                "s" => return self.update(Message::Save),
                _ => {}
            }
        }

        Task::none()
    }

    /// Appends an "Untitled" tab using the default lexer and activates it.
    pub fn add_tab(&mut self) {
        let tab = Tab::untitled(&self.config.editor.default_language);
        let idx = self.tabs.push(tab);
        tracing::debug!("Added tab {}", idx);
        self.status_message = "New tab".to_string();
    }

    /// Reads `path` into a new, active tab labelled with the path.
    ///
    /// A read failure is not recovered from: no tab is created and the
    /// fault is reported in the status bar.
    pub fn open_path(&mut self, path: PathBuf) {
        match read_text(&path) {
            Ok(text) => {
                tracing::info!("Opened {}", path.display());
                self.status_message = format!("Opened: {}", path.display());
                self.tabs.push(Tab::from_file(path, &text));
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Starts a save of tab `id` by asking for a destination.
    fn request_save(&self, id: TabId, close_after: bool) -> Task<Message> {
        let current = self
            .tabs
            .iter()
            .find(|t| t.doc.id() == id)
            .and_then(|t| t.doc.path().map(|p| p.to_path_buf()));

        Task::perform(pick_save_path(current), move |path| Message::SaveDialogClosed {
            tab: id,
            path,
            close_after,
        })
    }

    /// Writes tab `id` to `path`, with the save extension appended if the
    /// name lacks it.
    ///
    /// On success the tab is relabelled, marked clean and, when
    /// `close_after` is set, removed. On failure the error modal opens and
    /// the tab is left exactly as it was.
    pub fn save_to(&mut self, id: TabId, path: PathBuf, close_after: bool) {
        let path = with_extension_appended(path, &self.config.files.save_extension);

        let Some(tab) = self.tabs.by_id_mut(id) else {
            tracing::warn!("Tab {} closed before it could be saved", id);
            return;
        };

        match write_text(&path, &tab.text()) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                self.status_message = format!("Saved: {}", path.display());
                tab.doc.mark_saved(path);

                if close_after {
                    if let Some(idx) = self.tabs.position(id) {
                        self.remove_tab(idx);
                    }
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.error_message = Some(format!("Failed to save file: {}", e));
            }
        }
    }

    fn remove_tab(&mut self, idx: usize) {
        if let Some(tab) = self.tabs.remove(idx) {
            tracing::debug!("Closed tab {} ({})", idx, tab.doc.label());
            self.status_message = "Tab closed".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use iced::widget::text_editor;
    use quillpad_core::CloseDecision;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    fn active_text(app: &App) -> Option<String> {
        app.tabs.active().map(Tab::text)
    }

    fn type_into_active(app: &mut App, text: &str) {
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Paste(Arc::new(text.to_string())),
        )));
    }

    #[test]
    fn test_starts_with_one_untitled_tab() {
        let app = app();
        assert_eq!(app.tabs.len(), 1);
        assert_eq!(app.tabs.active().unwrap().doc.label(), "Untitled");
        assert_eq!(app.tabs.active().unwrap().doc.language(), "python");
    }

    #[test]
    fn test_open_populates_one_new_tab() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hello.py");
        std::fs::write(&path, "print('hello')\n").unwrap();

        let mut app = app();
        let _ = app.update(Message::OpenDialogClosed(Some(path.clone())));

        assert_eq!(app.tabs.len(), 2);
        assert_eq!(app.tabs.active_index(), Some(1));
        let tab = app.tabs.active().unwrap();
        assert_eq!(tab.text(), "print('hello')\n");
        assert_eq!(tab.doc.label(), path.display().to_string());
        assert!(!tab.doc.is_modified());
    }

    #[test]
    fn test_open_failure_creates_no_tab() {
        let dir = tempdir().unwrap();
        let mut app = app();
        let _ = app.update(Message::OpenDialogClosed(Some(dir.path().join("missing.py"))));

        assert_eq!(app.tabs.len(), 1);
        assert!(app.status_message.starts_with("Error:"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_open_cancelled_is_noop() {
        let mut app = app();
        let _ = app.update(Message::OpenDialogClosed(None));
        assert_eq!(app.tabs.len(), 1);
    }

    #[test]
    fn test_save_appends_extension() {
        let dir = tempdir().unwrap();
        let mut app = app();
        type_into_active(&mut app, "x = 1\n");
        assert!(app.tabs.active().unwrap().doc.is_modified());
        let id = app.tabs.active().unwrap().doc.id();

        let _ = app.update(Message::SaveDialogClosed {
            tab: id,
            path: Some(dir.path().join("foo")),
            close_after: false,
        });

        let saved = dir.path().join("foo.py");
        assert_eq!(std::fs::read_to_string(&saved).unwrap(), "x = 1\n");
        let tab = app.tabs.active().unwrap();
        assert_eq!(tab.doc.label(), saved.display().to_string());
        assert!(!tab.doc.is_modified());
    }

    #[test]
    fn test_open_then_save_keeps_bytes() {
        for (name, original) in [
            ("plain.py", "abc"),
            ("crlf.py", "a\r\nb\r\n"),
            ("mixed_tail.py", "a\r\nb"),
            ("blank_lines.py", "\n\nx\n\n"),
        ] {
            let dir = tempdir().unwrap();
            let source = dir.path().join(name);
            std::fs::write(&source, original).unwrap();

            let mut app = app();
            let _ = app.update(Message::OpenDialogClosed(Some(source)));
            assert_eq!(active_text(&app).unwrap(), original);

            let id = app.tabs.active().unwrap().doc.id();
            let target = dir.path().join(format!("copy_{}", name));
            let _ = app.update(Message::SaveDialogClosed {
                tab: id,
                path: Some(target.clone()),
                close_after: false,
            });

            assert!(app.error_message.is_none());
            assert_eq!(std::fs::read(&target).unwrap(), original.as_bytes());
        }
    }

    #[test]
    fn test_save_failure_shows_error_and_keeps_tab() {
        let dir = tempdir().unwrap();
        let mut app = app();
        type_into_active(&mut app, "y");
        let id = app.tabs.active().unwrap().doc.id();

        let _ = app.update(Message::SaveDialogClosed {
            tab: id,
            path: Some(dir.path().join("no-such-dir").join("foo")),
            close_after: false,
        });

        let message = app.error_message.as_deref().unwrap();
        assert!(message.starts_with("Failed to save file:"));
        let tab = app.tabs.active().unwrap();
        assert_eq!(tab.doc.label(), "Untitled");
        assert!(tab.doc.path().is_none());
        assert!(tab.doc.is_modified());

        let _ = app.update(Message::DismissError);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_close_unmodified_tab_has_no_prompt() {
        let mut app = app();
        let _ = app.update(Message::NewTab);
        let _ = app.update(Message::CloseTab(0));

        assert_eq!(app.tabs.len(), 1);
        assert!(app.pending_close.is_none());
    }

    #[test]
    fn test_close_modified_tab_cancel_keeps_it() {
        let mut app = app();
        type_into_active(&mut app, "keep me\n");
        let before = active_text(&app);

        let _ = app.update(Message::CloseTab(0));
        assert!(app.pending_close.is_some());
        assert_eq!(app.tabs.len(), 1);

        let _ = app.update(Message::CloseDecision(CloseDecision::Cancel));
        assert!(app.pending_close.is_none());
        assert_eq!(app.tabs.len(), 1);
        assert_eq!(active_text(&app), before);
        assert!(app.tabs.active().unwrap().doc.is_modified());
    }

    #[test]
    fn test_close_modified_tab_discard_removes_without_writing() {
        let dir = tempdir().unwrap();
        let mut app = app();
        type_into_active(&mut app, "throw away\n");

        let _ = app.update(Message::CloseTab(0));
        let _ = app.update(Message::CloseDecision(CloseDecision::Discard));

        assert!(app.tabs.is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_save_on_close_targets_closing_tab() {
        let dir = tempdir().unwrap();
        let mut app = app();
        type_into_active(&mut app, "first\n");
        let closing = app.tabs.active().unwrap().doc.id();

        let _ = app.update(Message::NewTab);
        type_into_active(&mut app, "second\n");
        assert_eq!(app.tabs.active_index(), Some(1));

        let _ = app.update(Message::CloseTab(0));
        assert_eq!(app.pending_close, Some(closing));
        let _ = app.update(Message::CloseDecision(CloseDecision::Save));

        let _ = app.update(Message::SaveDialogClosed {
            tab: closing,
            path: Some(dir.path().join("first.py")),
            close_after: true,
        });

        assert_eq!(
            std::fs::read_to_string(dir.path().join("first.py")).unwrap(),
            "first\n"
        );
        assert_eq!(app.tabs.len(), 1);
        assert!(app.tabs.position(closing).is_none());
        assert_eq!(active_text(&app).unwrap(), "second\n");
    }

    #[test]
    fn test_save_on_close_cancelled_keeps_tab() {
        let mut app = app();
        type_into_active(&mut app, "draft");
        let id = app.tabs.active().unwrap().doc.id();

        let _ = app.update(Message::SaveDialogClosed {
            tab: id,
            path: None,
            close_after: true,
        });
        assert_eq!(app.tabs.len(), 1);
    }

    #[test]
    fn test_double_click_adds_exactly_one_tab() {
        for existing in 0..3 {
            let mut app = app();
            for _ in 0..existing {
                let _ = app.update(Message::NewTab);
            }
            let before = app.tabs.len();

            let _ = app.update(Message::TabBarPressed);
            let _ = app.update(Message::TabBarPressed);

            assert_eq!(app.tabs.len(), before + 1);
            assert_eq!(app.tabs.active_index(), Some(before));
            assert_eq!(app.tabs.active().unwrap().doc.label(), "Untitled");
        }
    }

    #[test]
    fn test_save_without_tabs_is_noop() {
        let mut app = app();
        let _ = app.update(Message::CloseTab(0));
        assert!(app.tabs.is_empty());
        let _ = app.update(Message::Save);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_tab_select_and_title() {
        let mut app = app();
        let _ = app.update(Message::NewTab);
        let _ = app.update(Message::TabSelected(0));
        assert_eq!(app.tabs.active_index(), Some(0));
        assert_eq!(app.title(), "Untitled - Code Editor");

        type_into_active(&mut app, "z");
        assert_eq!(app.title(), "Untitled * - Code Editor");
    }
}
