//! Syntax highlighting for the editor.
//!
//! A per-line lexer plugged into `text_editor`'s highlighter hook. Lexer
//! state that spans lines (block comments, triple-quoted strings) is cached
//! per line so the widget can restart highlighting from any line.

use iced::advanced::text::highlighter::{Format, Highlighter};
use iced::{Color, Font};
use std::ops::Range;

/// Colors for syntax highlighting (dark theme)
mod colors {
    use iced::Color;

    pub const KEYWORD: Color = Color::from_rgb(0.86, 0.55, 0.76);
    pub const STRING: Color = Color::from_rgb(0.72, 0.84, 0.55);
    pub const NUMBER: Color = Color::from_rgb(0.82, 0.68, 0.55);
    pub const COMMENT: Color = Color::from_rgb(0.50, 0.55, 0.55);
    pub const FUNCTION: Color = Color::from_rgb(0.55, 0.75, 0.90);
    pub const TYPE: Color = Color::from_rgb(0.90, 0.80, 0.55);
    pub const OPERATOR: Color = Color::from_rgb(0.80, 0.80, 0.90);
    pub const PUNCTUATION: Color = Color::from_rgb(0.70, 0.70, 0.70);
    pub const ATTRIBUTE: Color = Color::from_rgb(0.90, 0.80, 0.55);
    pub const CONSTANT: Color = Color::from_rgb(0.90, 0.60, 0.50);
    pub const MACRO: Color = Color::from_rgb(0.55, 0.80, 0.80);
    pub const DEFAULT: Color = Color::from_rgb(0.90, 0.90, 0.90);
}

/// Settings for the highlighter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HighlightSettings {
    pub language: String,
}

/// Format for highlighted text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightFormat {
    pub color: Color,
}

impl HighlightFormat {
    pub fn to_format(self) -> Format<Font> {
        Format {
            color: Some(self.color),
            font: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Keyword,
    Type,
    Function,
    String,
    Number,
    Comment,
    Operator,
    Punctuation,
    Attribute,
    Constant,
    Macro,
    Default,
}

impl TokenKind {
    fn color(self) -> Color {
        match self {
            Self::Keyword => colors::KEYWORD,
            Self::Type => colors::TYPE,
            Self::Function => colors::FUNCTION,
            Self::String => colors::STRING,
            Self::Number => colors::NUMBER,
            Self::Comment => colors::COMMENT,
            Self::Operator => colors::OPERATOR,
            Self::Punctuation => colors::PUNCTUATION,
            Self::Attribute => colors::ATTRIBUTE,
            Self::Constant => colors::CONSTANT,
            Self::Macro => colors::MACRO,
            Self::Default => colors::DEFAULT,
        }
    }
}

// ============================================================================
// Language configuration
// ============================================================================

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];
const PYTHON_TYPES: &[&str] = &[
    "int", "float", "str", "bool", "list", "dict", "tuple", "set", "frozenset", "bytes",
    "bytearray", "object", "type", "self", "cls",
];
const PYTHON_CONSTANTS: &[&str] = &["True", "False", "None"];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "type",
    "unsafe", "use", "where", "while",
];
const RUST_TYPES: &[&str] = &[
    "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "str", "u8", "u16",
    "u32", "u64", "u128", "usize", "String", "Vec", "Option", "Result", "Box", "Rc", "Arc",
];
const RUST_CONSTANTS: &[&str] = &["true", "false", "None", "Some", "Ok", "Err"];

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "from", "function", "if",
    "import", "in", "instanceof", "let", "new", "of", "return", "static", "super", "switch",
    "this", "throw", "try", "typeof", "var", "void", "while", "yield", "interface", "type",
];
const JS_CONSTANTS: &[&str] = &["true", "false", "null", "undefined", "NaN", "Infinity"];

const C_KEYWORDS: &[&str] = &[
    "break", "case", "class", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "include", "namespace", "return", "sizeof", "static", "struct",
    "switch", "template", "typedef", "union", "using", "while",
];
const C_TYPES: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void", "bool",
    "size_t", "auto",
];

const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "elif", "fi", "for", "while", "do", "done", "case", "esac", "in",
    "function", "return", "local", "export",
];

const BOOL_CONSTANTS: &[&str] = &["true", "false", "null"];

struct LangConfig {
    keywords: &'static [&'static str],
    types: &'static [&'static str],
    constants: &'static [&'static str],
    line_comment: Option<&'static str>,
    block_comment: Option<(&'static str, &'static str)>,
    single_quote_strings: bool,
    triple_quote_strings: bool,
    /// `@name` decorators
    decorators: bool,
    /// `#[...]` attributes
    attributes: bool,
    /// `name!` macro calls
    macros: bool,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self {
            keywords: &[],
            types: &[],
            constants: &[],
            line_comment: None,
            block_comment: None,
            single_quote_strings: true,
            triple_quote_strings: false,
            decorators: false,
            attributes: false,
            macros: false,
        }
    }
}

fn lang_config(language: &str) -> LangConfig {
    match language {
        "python" => LangConfig {
            keywords: PYTHON_KEYWORDS,
            types: PYTHON_TYPES,
            constants: PYTHON_CONSTANTS,
            line_comment: Some("#"),
            triple_quote_strings: true,
            decorators: true,
            ..Default::default()
        },
        "rust" => LangConfig {
            keywords: RUST_KEYWORDS,
            types: RUST_TYPES,
            constants: RUST_CONSTANTS,
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            single_quote_strings: false,
            attributes: true,
            macros: true,
            ..Default::default()
        },
        "javascript" | "typescript" => LangConfig {
            keywords: JS_KEYWORDS,
            constants: JS_CONSTANTS,
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            decorators: true,
            ..Default::default()
        },
        "c" | "cpp" => LangConfig {
            keywords: C_KEYWORDS,
            types: C_TYPES,
            constants: BOOL_CONSTANTS,
            line_comment: Some("//"),
            block_comment: Some(("/*", "*/")),
            ..Default::default()
        },
        "bash" => LangConfig {
            keywords: BASH_KEYWORDS,
            line_comment: Some("#"),
            ..Default::default()
        },
        "toml" => LangConfig {
            constants: BOOL_CONSTANTS,
            line_comment: Some("#"),
            ..Default::default()
        },
        "json" => LangConfig {
            constants: BOOL_CONSTANTS,
            ..Default::default()
        },
        _ => LangConfig {
            single_quote_strings: false,
            ..Default::default()
        },
    }
}

// ============================================================================
// Highlighter
// ============================================================================

/// Lexer state at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LineState {
    #[default]
    Normal,
    BlockComment,
    /// Inside a triple-quoted string opened with this quote byte
    TripleString(u8),
}

#[derive(Debug, Clone)]
struct Span {
    range: Range<usize>,
    kind: TokenKind,
}

/// Syntax highlighter for the text editor.
pub struct EditorHighlighter {
    language: String,
    config: LangConfig,
    /// `line_states[i]` is the state at the start of line `i`.
    /// Always holds exactly `current_line + 1` entries.
    line_states: Vec<LineState>,
    current_line: usize,
    spans: Vec<Span>,
}

impl Highlighter for EditorHighlighter {
    type Settings = HighlightSettings;
    type Highlight = HighlightFormat;
    type Iterator<'a> = std::vec::IntoIter<(Range<usize>, HighlightFormat)> where Self: 'a;

    fn new(settings: &Self::Settings) -> Self {
        Self {
            language: settings.language.clone(),
            config: lang_config(&settings.language),
            line_states: vec![LineState::Normal],
            current_line: 0,
            spans: Vec::new(),
        }
    }

    fn update(&mut self, new_settings: &Self::Settings) {
        if self.language != new_settings.language {
            *self = Self::new(new_settings);
        }
    }

    fn change_line(&mut self, line: usize) {
        self.current_line = line.min(self.current_line);
        self.line_states.truncate(self.current_line + 1);
    }

    fn highlight_line(&mut self, line: &str) -> Self::Iterator<'_> {
        let start_state = self.line_states[self.current_line];

        self.spans.clear();
        let end_state = self.tokenize_line(line, start_state);

        self.line_states.push(end_state);
        self.current_line += 1;

        self.spans
            .iter()
            .map(|s| (s.range.clone(), HighlightFormat { color: s.kind.color() }))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn current_line(&self) -> usize {
        self.current_line
    }
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

impl EditorHighlighter {
    fn push(&mut self, range: Range<usize>, kind: TokenKind) {
        if !range.is_empty() {
            self.spans.push(Span { range, kind });
        }
    }

    /// Tokenizes one line starting in `state`; returns the state the next
    /// line starts in. Spans cover every byte of the line, in order.
    fn tokenize_line(&mut self, line: &str, mut state: LineState) -> LineState {
        let bytes = line.as_bytes();
        let len = bytes.len();
        let mut i = 0;

        while i < len {
            match state {
                LineState::BlockComment => {
                    let end = self.config.block_comment.map(|(_, end)| end).unwrap_or("*/");
                    match line[i..].find(end) {
                        Some(pos) => {
                            let end_pos = i + pos + end.len();
                            self.push(i..end_pos, TokenKind::Comment);
                            i = end_pos;
                            state = LineState::Normal;
                        }
                        None => {
                            self.push(i..len, TokenKind::Comment);
                            return state;
                        }
                    }
                    continue;
                }
                LineState::TripleString(quote) => {
                    let delim = if quote == b'\'' { "'''" } else { "\"\"\"" };
                    match line[i..].find(delim) {
                        Some(pos) => {
                            let end_pos = i + pos + 3;
                            self.push(i..end_pos, TokenKind::String);
                            i = end_pos;
                            state = LineState::Normal;
                        }
                        None => {
                            self.push(i..len, TokenKind::String);
                            return state;
                        }
                    }
                    continue;
                }
                LineState::Normal => {}
            }

            let rest = &line[i..];
            let b = bytes[i];

            if b.is_ascii_whitespace() {
                let start = i;
                while i < len && bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                self.push(start..i, TokenKind::Default);
                continue;
            }

            if let Some(comment) = self.config.line_comment {
                if rest.starts_with(comment) && !(self.config.attributes && rest.starts_with("#[")) {
                    self.push(i..len, TokenKind::Comment);
                    return state;
                }
            }

            if let Some((open, _)) = self.config.block_comment {
                if rest.starts_with(open) {
                    self.push(i..i + open.len(), TokenKind::Comment);
                    i += open.len();
                    state = LineState::BlockComment;
                    continue;
                }
            }

            if self.config.triple_quote_strings && (rest.starts_with("\"\"\"") || rest.starts_with("'''")) {
                self.push(i..i + 3, TokenKind::String);
                i += 3;
                state = LineState::TripleString(b);
                continue;
            }

            if b == b'"' || (b == b'\'' && self.config.single_quote_strings) {
                let start = i;
                i += 1;
                while i < len && bytes[i] != b {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(len);
                self.push(start..i, TokenKind::String);
                continue;
            }

            if b.is_ascii_digit() {
                let start = i;
                while i < len && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'.' || bytes[i] == b'_') {
                    i += 1;
                }
                self.push(start..i, TokenKind::Number);
                continue;
            }

            if self.config.decorators && b == b'@' {
                let start = i;
                i += 1;
                while i < len && (is_ident_byte(bytes[i]) || bytes[i] == b'.') {
                    i += 1;
                }
                self.push(start..i, TokenKind::Attribute);
                continue;
            }

            if self.config.attributes && rest.starts_with("#[") {
                let end = rest.find(']').map(|p| i + p + 1).unwrap_or(len);
                self.push(i..end, TokenKind::Attribute);
                i = end;
                continue;
            }

            if is_ident_byte(b) {
                let start = i;
                while i < len && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                let word = &line[start..i];

                let kind = if self.config.keywords.contains(&word) {
                    TokenKind::Keyword
                } else if self.config.types.contains(&word) {
                    TokenKind::Type
                } else if self.config.constants.contains(&word) {
                    TokenKind::Constant
                } else if self.config.macros && i < len && bytes[i] == b'!' {
                    i += 1;
                    TokenKind::Macro
                } else if line[i..].trim_start().starts_with('(') {
                    TokenKind::Function
                } else {
                    TokenKind::Default
                };
                self.push(start..i, kind);
                continue;
            }

            if matches!(b, b'+' | b'-' | b'*' | b'/' | b'%' | b'=' | b'<' | b'>' | b'!' | b'&' | b'|' | b'^' | b'~') {
                self.push(i..i + 1, TokenKind::Operator);
                i += 1;
                continue;
            }

            if matches!(b, b'(' | b')' | b'{' | b'}' | b'[' | b']' | b';' | b',' | b'.' | b':') {
                self.push(i..i + 1, TokenKind::Punctuation);
                i += 1;
                continue;
            }

            // Anything else is a single ASCII byte; multi-byte characters were
            // consumed as identifier bytes above.
            self.push(i..i + 1, TokenKind::Default);
            i += 1;
        }

        state
    }
}
