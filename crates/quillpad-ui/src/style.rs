//! Style definitions for the editing widget.

use iced::Color;
use quillpad_core::config::EditorConfig;

/// Padding between the editor frame and its first line, shared by the
/// gutter so line numbers sit on the same baselines as the text.
pub const EDITOR_PADDING: f32 = 8.0;

/// Visual settings applied to every tab's editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorStyle {
    pub line_numbers: bool,
    pub gutter_width: f32,
    pub caret_color: Color,
    pub font_size: f32,
}

impl EditorStyle {
    pub fn from_config(config: &EditorConfig) -> Self {
        let (r, g, b) = config.caret_rgb();
        Self {
            line_numbers: config.line_numbers,
            gutter_width: config.gutter_width.max(0.0),
            caret_color: Color::from_rgb8(r, g, b),
            font_size: config.font_size,
        }
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

/// Text for the line-number gutter: `1` through `line_count`, one per line.
pub fn gutter_text(line_count: usize) -> String {
    (1..=line_count.max(1))
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
