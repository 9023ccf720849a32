//! Colour palette for the window chrome.
//!
//! Syntax colours live next to the highlighter; these cover menus, tabs,
//! the gutter, modals and the status bar.

pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_LIGHT: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const BG_GUTTER: Color = Color::from_rgb(0.12, 0.12, 0.14);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);
    pub const DANGER: Color = Color::from_rgb(0.75, 0.22, 0.22);
    pub const DANGER_HOVER: Color = Color::from_rgb(0.85, 0.25, 0.25);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
    pub const SELECTION: Color = Color::from_rgba(0.25, 0.46, 0.85, 0.55);
}
