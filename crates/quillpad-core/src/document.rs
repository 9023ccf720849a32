//! Per-tab document metadata and the close-tab policy.
//!
//! The text itself lives in the editing widget; a [`Document`] tracks
//! everything else a tab needs: where it was loaded from or saved to, what
//! the tab shows as its label, which lexer it uses and whether it has
//! unsaved edits.

use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::fs::LineEnding;
use crate::language::detect_language;

/// Label shown on a tab that has never been opened from or saved to disk.
pub const UNTITLED: &str = "Untitled";

/// Unique identifier for a tab.
///
/// Indices shift when tabs close, so anything that outlives a single
/// update (a pending save, an in-flight dialog) refers to a tab by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(Uuid);

impl TabId {
    /// Creates a new unique tab ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata for a single tab.
#[derive(Debug, Clone)]
pub struct Document {
    id: TabId,

    /// File path (None for untitled documents)
    path: Option<PathBuf>,

    /// Tab label
    label: String,

    /// Lexer id
    language: String,

    /// Line ending written back on save
    line_ending: LineEnding,

    modified: bool,
}

impl Document {
    /// Creates an untitled, clean document highlighted as `language`.
    pub fn untitled(language: impl Into<String>) -> Self {
        Self {
            id: TabId::new(),
            path: None,
            label: UNTITLED.to_string(),
            language: language.into(),
            line_ending: LineEnding::Lf,
            modified: false,
        }
    }

    /// Creates a clean document for content just read from `path`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: TabId::new(),
            label: path.display().to_string(),
            language: detect_language(&path).to_string(),
            path: Some(path),
            line_ending: LineEnding::Lf,
            modified: false,
        }
    }

    /// Sets the line ending the document is saved with.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns true if the document has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Records an edit made in the widget.
    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Records a successful write to `path`; the tab is relabelled and clean.
    ///
    /// The lexer is left alone: saving does not re-highlight the tab.
    pub fn mark_saved(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.label = path.display().to_string();
        self.path = Some(path);
        self.modified = false;
    }
}

/// The user's answer to "Save changes before closing?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Save,
    Discard,
    Cancel,
}

/// What closing a tab should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    /// Remove the tab now.
    Remove,
    /// Save the tab, and remove it once the save succeeds.
    SaveThenRemove,
    /// Leave the tab open.
    Keep,
}

/// Resolves a close request.
///
/// `decision` is only consulted for modified tabs; a clean tab closes
/// without asking, so callers pass `None` until the user has answered.
/// A modified tab with no answer yet is kept.
pub fn close_action(modified: bool, decision: Option<CloseDecision>) -> CloseAction {
    if !modified {
        return CloseAction::Remove;
    }
    match decision {
        Some(CloseDecision::Save) => CloseAction::SaveThenRemove,
        Some(CloseDecision::Discard) => CloseAction::Remove,
        Some(CloseDecision::Cancel) | None => CloseAction::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untitled_document() {
        let doc = Document::untitled("python");
        assert_eq!(doc.label(), "Untitled");
        assert!(doc.path().is_none());
        assert!(!doc.is_modified());
        assert_eq!(doc.language(), "python");
        assert_eq!(doc.line_ending(), LineEnding::Lf);
    }

    #[test]
    fn test_from_path_uses_full_path_as_label() {
        let doc = Document::from_path("/tmp/project/main.rs");
        assert_eq!(doc.label(), "/tmp/project/main.rs");
        assert_eq!(doc.path(), Some(Path::new("/tmp/project/main.rs")));
        assert_eq!(doc.language(), "rust");
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_mark_saved_relabels_and_cleans() {
        let mut doc = Document::untitled("python");
        doc.mark_modified();
        assert!(doc.is_modified());

        doc.mark_saved("/tmp/out.py");
        assert!(!doc.is_modified());
        assert_eq!(doc.label(), "/tmp/out.py");
        assert_eq!(doc.path(), Some(Path::new("/tmp/out.py")));
    }

    #[test]
    fn test_line_ending_survives_save() {
        let mut doc = Document::from_path("/tmp/win.py").with_line_ending(LineEnding::CrLf);
        doc.mark_saved("/tmp/win2.py");
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Document::untitled("text").id(), Document::untitled("text").id());
    }

    #[test]
    fn test_clean_tab_closes_without_asking() {
        assert_eq!(close_action(false, None), CloseAction::Remove);
        assert_eq!(close_action(false, Some(CloseDecision::Cancel)), CloseAction::Remove);
    }

    #[test]
    fn test_modified_tab_follows_decision() {
        assert_eq!(close_action(true, None), CloseAction::Keep);
        assert_eq!(close_action(true, Some(CloseDecision::Cancel)), CloseAction::Keep);
        assert_eq!(close_action(true, Some(CloseDecision::Discard)), CloseAction::Remove);
        assert_eq!(close_action(true, Some(CloseDecision::Save)), CloseAction::SaveThenRemove);
    }
}
