use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::widget::text_editor;
use quillpad_core::{join_lines, Config, Document, HasTabId, LineEnding, TabId};

/// One editor tab: its metadata plus the widget content holding the text.
pub struct Tab {
    pub doc: Document,
    pub content: text_editor::Content,
}

impl Tab {
    /// An empty "Untitled" tab highlighted as `language`.
    pub fn untitled(language: &str) -> Self {
        Self {
            doc: Document::untitled(language),
            content: text_editor::Content::new(),
        }
    }

    /// A clean tab holding `text` just read from `path`.
    ///
    /// The file's line ending is kept so [`Tab::text`] writes it back.
    pub fn from_file(path: PathBuf, text: &str) -> Self {
        Self {
            doc: Document::from_path(path).with_line_ending(LineEnding::detect(text)),
            content: text_editor::Content::with_text(text),
        }
    }

    /// Full text of the tab, byte for byte what a save writes.
    ///
    /// Built from the widget's lines rather than `Content::text`, which
    /// always appends a newline and drops `\r`.
    pub fn text(&self) -> String {
        let lines = (0..self.content.line_count()).map(|i| {
            self.content
                .line(i)
                .map(|line| {
                    let line: &str = &line;
                    line.strip_suffix('\r').unwrap_or(line).to_string()
                })
                .unwrap_or_default()
        });
        join_lines(lines, self.doc.line_ending())
    }
}

impl HasTabId for Tab {
    fn tab_id(&self) -> TabId {
        self.doc.id()
    }
}

/// Launch options handed from the binary to the window.
#[derive(Debug, Default)]
pub struct Flags {
    /// Files opened into tabs at start-up
    pub files: Vec<PathBuf>,
    pub config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
}

/// Detects double clicks from a stream of press timestamps.
#[derive(Debug, Clone)]
pub struct DoubleClick {
    last_press: Option<Instant>,
    interval: Duration,
}

impl DoubleClick {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(400);

    pub fn new(interval: Duration) -> Self {
        Self {
            last_press: None,
            interval,
        }
    }

    /// Records a press at `now`; returns true if it completes a double click.
    ///
    /// A completed double click resets the tracker, so a third press starts
    /// a new pair.
    pub fn press(&mut self, now: Instant) -> bool {
        match self.last_press.take() {
            Some(last) if now.saturating_duration_since(last) <= self.interval => true,
            _ => {
                self.last_press = Some(now);
                false
            }
        }
    }
}

impl Default for DoubleClick {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_click_within_interval() {
        let mut clicks = DoubleClick::default();
        let t0 = Instant::now();
        assert!(!clicks.press(t0));
        assert!(clicks.press(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_slow_presses_are_single_clicks() {
        let mut clicks = DoubleClick::default();
        let t0 = Instant::now();
        assert!(!clicks.press(t0));
        assert!(!clicks.press(t0 + Duration::from_millis(900)));
        assert!(clicks.press(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn test_third_press_starts_new_pair() {
        let mut clicks = DoubleClick::default();
        let t0 = Instant::now();
        clicks.press(t0);
        assert!(clicks.press(t0 + Duration::from_millis(100)));
        assert!(!clicks.press(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn test_file_text_is_unchanged() {
        for original in ["abc", "abc\n", "a\r\nb\r\n", "a\r\nb", "\n\nx\n\n", ""] {
            let tab = Tab::from_file(PathBuf::from("/tmp/t.py"), original);
            assert_eq!(tab.text(), original);
        }
    }

    #[test]
    fn test_untitled_tab() {
        let tab = Tab::untitled("python");
        assert_eq!(tab.text(), "");
        assert_eq!(tab.doc.label(), "Untitled");
        assert!(!tab.doc.is_modified());
        assert_eq!(tab.tab_id(), tab.doc.id());
    }
}
