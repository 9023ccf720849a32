//! # Quillpad UI
//!
//! The editor window, built on iced.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] owns the tab strip and dialog state
//! - **Message**: every user action or finished dialog is a [`Message`]
//! - **Update**: `App::update` applies one message and may return a task
//! - **View**: `App::view` renders the current state
//!
//! File dialogs run as tasks; the file reads and writes that follow them
//! happen inside `update`, so tests can drive the whole flow by feeding the
//! dialog results back in as messages.

pub mod app;
pub mod highlighter;
pub mod style;
pub mod theme;

pub use app::{run, App, Flags, Message};
