//! Whole-file text I/O and the save-path extension policy.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// A named group of extensions offered by the open and save dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// Extensions without the leading dot; `"*"` matches everything.
    pub extensions: &'static [&'static str],
}

/// Filters shown by both file dialogs, in display order.
pub fn default_filters() -> &'static [FileFilter] {
    const FILTERS: &[FileFilter] = &[
        FileFilter {
            name: "All Files",
            extensions: &["*"],
        },
        FileFilter {
            name: "Python Files",
            extensions: &["py"],
        },
    ];
    FILTERS
}

/// Line terminator of a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// The ending of the first terminated line in `text`; `Lf` if there is none.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if text[..pos].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Joins `lines` with `ending`.
///
/// A file ending in a newline is split into a last line that is empty, so
/// joining gives back the same trailing terminator and nothing more.
pub fn join_lines<S: AsRef<str>>(lines: impl IntoIterator<Item = S>, ending: LineEnding) -> String {
    let mut text = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            text.push_str(ending.as_str());
        }
        text.push_str(line.as_ref());
    }
    text
}

/// Reads the whole file at `path` as UTF-8 text.
pub fn read_text(path: impl AsRef<Path>) -> CoreResult<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| CoreError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `text` to `path`, replacing any previous content.
///
/// Not atomic: a failed write can leave a truncated file behind.
pub fn write_text(path: impl AsRef<Path>, text: &str) -> CoreResult<()> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|source| CoreError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends `.{ext}` to the file name unless it already ends with it.
///
/// Any other extension is kept: `notes.txt` becomes `notes.txt.py`.
pub fn with_extension_appended(path: impl Into<PathBuf>, ext: &str) -> PathBuf {
    let path = path.into();
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() || path.extension().is_some_and(|e| e == ext) {
        return path;
    }

    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_appends_missing_extension() {
        assert_eq!(with_extension_appended("/tmp/foo", "py"), PathBuf::from("/tmp/foo.py"));
    }

    #[test]
    fn test_keeps_matching_extension() {
        assert_eq!(with_extension_appended("/tmp/foo.py", "py"), PathBuf::from("/tmp/foo.py"));
        assert_eq!(with_extension_appended("/tmp/foo.py", ".py"), PathBuf::from("/tmp/foo.py"));
    }

    #[test]
    fn test_appends_after_other_extension() {
        assert_eq!(
            with_extension_appended("/tmp/notes.txt", "py"),
            PathBuf::from("/tmp/notes.txt.py")
        );
    }

    #[test]
    fn test_empty_extension_is_noop() {
        assert_eq!(with_extension_appended("/tmp/foo", ""), PathBuf::from("/tmp/foo"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.py");

        write_text(&path, "print('hi')\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "print('hi')\n");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.py");

        match read_text(&path) {
            Err(CoreError::ReadFile { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ReadFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("foo.py");

        let err = write_text(&path, "x").unwrap_err();
        assert!(matches!(err, CoreError::WriteFile { .. }));
        assert!(err.to_string().contains("foo.py"));
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a\r\nb\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a\nb\r\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("abc"), LineEnding::Lf);
        assert_eq!(LineEnding::detect(""), LineEnding::Lf);
    }

    #[test]
    fn test_join_lines_keeps_trailing_terminator() {
        assert_eq!(join_lines(["abc"], LineEnding::Lf), "abc");
        assert_eq!(join_lines(["abc", ""], LineEnding::Lf), "abc\n");
        assert_eq!(join_lines(["a", "b", ""], LineEnding::CrLf), "a\r\nb\r\n");
        assert_eq!(join_lines([""], LineEnding::Lf), "");
    }

    #[test]
    fn test_filters() {
        let filters = default_filters();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[0].extensions, &["*"]);
        assert_eq!(filters[1].name, "Python Files");
    }

    proptest! {
        #[test]
        fn prop_extension_appended_is_idempotent(stem in "[a-zA-Z0-9_]{1,12}(\\.[a-z]{1,4})?") {
            let once = with_extension_appended(format!("/tmp/{}", stem), "py");
            let twice = with_extension_appended(once.clone(), "py");
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.extension().and_then(|e| e.to_str()), Some("py"));
        }

        #[test]
        fn prop_split_then_join_restores_text(text in "[a-z \\n]{0,40}", crlf in any::<bool>()) {
            let ending = if crlf { LineEnding::CrLf } else { LineEnding::Lf };
            let original = text.replace('\n', ending.as_str());
            let lines: Vec<&str> = text.split('\n').collect();
            prop_assert_eq!(join_lines(lines, ending), original);
        }
    }
}
