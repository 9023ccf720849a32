//! # Quillpad Core
//!
//! Toolkit-independent state behind the editor window.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  TabStrip<T>                  │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐       │
//! │  │ Document │ │ Document │ │ Document │  ...  │
//! │  └──────────┘ └──────────┘ └──────────┘       │
//! └──────────────────────────────────────────────┘
//!        │                          │
//!   fs (read/write)          Config (TOML)
//! ```
//!
//! The UI crate wraps each [`Document`] together with the widget that owns
//! the text; everything here can be exercised without opening a window.

pub mod config;
pub mod document;
pub mod fs;
pub mod language;
pub mod tabs;

use std::path::PathBuf;

pub use config::{Config, ConfigError};
pub use document::{close_action, CloseAction, CloseDecision, Document, TabId};
pub use fs::{default_filters, join_lines, read_text, with_extension_appended, write_text, FileFilter, LineEnding};
pub use language::detect_language;
pub use tabs::{HasTabId, TabStrip};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
