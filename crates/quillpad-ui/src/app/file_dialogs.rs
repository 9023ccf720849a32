//! Native open/save dialogs.
//!
//! Both resolve to `None` when the user cancels.

use std::path::{Path, PathBuf};

use quillpad_core::default_filters;

fn with_filters(mut dialog: rfd::AsyncFileDialog) -> rfd::AsyncFileDialog {
    for filter in default_filters() {
        dialog = dialog.add_filter(filter.name, filter.extensions);
    }
    dialog
}

pub async fn pick_open_path() -> Option<PathBuf> {
    with_filters(rfd::AsyncFileDialog::new().set_title("Open File"))
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Asks for a save location, starting next to `current` when the tab
/// already has a path.
pub async fn pick_save_path(current: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = with_filters(rfd::AsyncFileDialog::new().set_title("Save File"));

    if let Some(current) = current.as_deref() {
        if let Some(dir) = current.parent().filter(|d| d != &Path::new("")) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = current.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }
    }

    dialog
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
