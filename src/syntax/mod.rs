//! Syntax highlighting for chapter code examples
//!
//! syntect does the real work. A small keyword lexer covers fence tags
//! syntect has no grammar for. The curriculum is JavaScript-first, with
//! Java and Python examples on the other tracks.

use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use syntect::highlighting::{
    FontStyle, HighlightState, Highlighter, RangedHighlightIterator, ThemeSet,
};
use syntect::parsing::{ParseState, ScopeStack, SyntaxReference, SyntaxSet};

use crate::theme::Theme;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

/// Languages a chapter fence can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lang {
    JavaScript,
    TypeScript,
    Java,
    Python,
    Shell,
    Html,
    Css,
    Json,
    Other,
}

impl Lang {
    /// Parse a fence tag, tolerating modifiers like `javascript,no-run`.
    fn detect(tag: &str) -> Lang {
        let base = tag.split(',').next().unwrap_or(tag).trim().to_lowercase();
        match base.as_str() {
            "js" | "javascript" | "node" | "jsx" => Lang::JavaScript,
            "ts" | "typescript" | "tsx" => Lang::TypeScript,
            "java" => Lang::Java,
            "py" | "python" | "python3" => Lang::Python,
            "sh" | "bash" | "shell" | "console" => Lang::Shell,
            "html" | "htm" => Lang::Html,
            "css" => Lang::Css,
            "json" => Lang::Json,
            _ => Lang::Other,
        }
    }

    /// Grammar name in syntect's default set.
    fn syntect_name(self) -> Option<&'static str> {
        match self {
            Lang::JavaScript => Some("JavaScript"),
            Lang::TypeScript => Some("TypeScript"),
            Lang::Java => Some("Java"),
            Lang::Python => Some("Python"),
            Lang::Shell => Some("Bourne Again Shell (bash)"),
            Lang::Html => Some("HTML"),
            Lang::Css => Some("CSS"),
            Lang::Json => Some("JSON"),
            Lang::Other => None,
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Lang::JavaScript | Lang::TypeScript => JS_KEYWORDS,
            Lang::Java => JAVA_KEYWORDS,
            Lang::Python => PYTHON_KEYWORDS,
            _ => COMMON_KEYWORDS,
        }
    }

    /// Whether `#` opens a comment.
    fn hash_comments(self) -> bool {
        matches!(self, Lang::Python | Lang::Shell)
    }
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "finally", "for", "from", "function", "get",
    "if", "import", "in", "instanceof", "let", "new", "of", "return", "set", "static", "super",
    "switch", "this", "throw", "try", "typeof", "var", "void", "while", "yield", "null",
    "undefined", "true", "false",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "break", "case", "catch", "class", "continue", "default", "do", "else", "enum",
    "extends", "final", "finally", "for", "if", "implements", "import", "instanceof",
    "interface", "new", "package", "private", "protected", "public", "return", "static",
    "super", "switch", "synchronized", "this", "throw", "throws", "try", "void", "while",
    "null", "true", "false",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "async", "await", "break", "class", "continue", "def", "elif", "else",
    "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
    "None", "True", "False",
];

const COMMON_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "return", "function", "class", "import", "export", "const",
    "let", "var", "true", "false", "null", "None",
];

/// Built-in type names worth tinting across the three tracks.
const TYPE_NAMES: &[&str] = &[
    "Array", "ArrayList", "Boolean", "Date", "Double", "Error", "HashMap", "Integer", "JSON",
    "List", "Long", "Map", "Math", "Number", "Object", "Promise", "RegExp", "Set", "String",
    "Symbol", "any", "boolean", "byte", "double", "float", "int", "long", "number", "short",
    "string", "void",
];

const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~?:;,.()[]{}";

/// Highlight one line of a fenced code block.
pub fn highlight_line(line: &str, language: Option<&str>, theme: &Theme) -> Vec<Span<'static>> {
    let lang = language.map(Lang::detect).unwrap_or(Lang::Other);
    if let Some(spans) = syntect_spans(line, lang, theme) {
        return spans;
    }
    lex_line(line, lang, theme)
}

/// Grammar-driven highlighting. None when no grammar matches or the
/// parse comes back empty, which routes the line to the keyword lexer.
fn syntect_spans(line: &str, lang: Lang, theme: &Theme) -> Option<Vec<Span<'static>>> {
    let syntax = find_syntax(lang)?;
    let syntect_theme = THEME_SET.themes.get("base16-ocean.dark")?;

    let highlighter = Highlighter::new(syntect_theme);
    let mut state = HighlightState::new(&highlighter, ScopeStack::new());
    let ops = ParseState::new(syntax).parse_line(line, &SYNTAX_SET).ok()?;

    let spans: Vec<Span<'static>> =
        RangedHighlightIterator::new(&mut state, &ops, line, &highlighter)
            .map(|(style, text, _)| {
                let fg = style.foreground;
                let mut out =
                    Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)).bg(theme.bg_secondary);
                if style.font_style.contains(FontStyle::BOLD) {
                    out = out.add_modifier(Modifier::BOLD);
                }
                if style.font_style.contains(FontStyle::ITALIC) {
                    out = out.add_modifier(Modifier::ITALIC);
                }
                if style.font_style.contains(FontStyle::UNDERLINE) {
                    out = out.add_modifier(Modifier::UNDERLINED);
                }
                Span::styled(text.to_string(), out)
            })
            .collect();

    if spans.is_empty() { None } else { Some(spans) }
}

fn find_syntax(lang: Lang) -> Option<&'static SyntaxReference> {
    SYNTAX_SET.find_syntax_by_name(lang.syntect_name()?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Literal,
    Number,
    Comment,
    Operator,
    Plain,
}

/// Keyword lexer for lines syntect could not place. Splits the line
/// into tokens, then styles each against the track's keyword table.
fn lex_line(line: &str, lang: Lang, theme: &Theme) -> Vec<Span<'static>> {
    if line.is_empty() {
        return vec![Span::styled(
            String::new(),
            Style::default().fg(theme.fg_primary).bg(theme.bg_secondary),
        )];
    }

    let mut spans = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let (kind, len) = next_token(rest, lang);
        let (text, tail) = rest.split_at(len.max(1));
        spans.push(Span::styled(text.to_string(), token_style(kind, text, lang, theme)));
        rest = tail;
    }
    spans
}

/// Kind and byte length of the token at the head of `rest`.
fn next_token(rest: &str, lang: Lang) -> (TokenKind, usize) {
    let Some(first) = rest.chars().next() else {
        return (TokenKind::Plain, 0);
    };

    if rest.starts_with("//") || (first == '#' && lang.hash_comments()) {
        return (TokenKind::Comment, rest.len());
    }
    if matches!(first, '"' | '\'' | '`') {
        return (TokenKind::Literal, quoted_len(rest, first));
    }
    if first.is_ascii_digit() {
        return (TokenKind::Number, numeric_len(rest));
    }
    if is_word_char(first) {
        let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        return (TokenKind::Word, len);
    }
    if OPERATOR_CHARS.contains(first) {
        return (TokenKind::Operator, first.len_utf8());
    }
    (TokenKind::Plain, first.len_utf8())
}

/// Byte length of the literal opened by `quote`, escapes included. Runs
/// to end of line when unterminated.
fn quoted_len(rest: &str, quote: char) -> usize {
    let mut escaped = false;
    for (idx, ch) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return idx + ch.len_utf8();
        }
    }
    rest.len()
}

/// Byte length of a numeric literal: digits plus hex, float, and
/// separator characters.
fn numeric_len(rest: &str) -> usize {
    rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_'))
        .unwrap_or(rest.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn token_style(kind: TokenKind, text: &str, lang: Lang, theme: &Theme) -> Style {
    let on_code = Style::default().bg(theme.bg_secondary);
    match kind {
        TokenKind::Comment => on_code.fg(theme.syntax_comment),
        TokenKind::Literal => on_code.fg(theme.syntax_string),
        TokenKind::Number => on_code.fg(theme.syntax_number),
        TokenKind::Operator => on_code.fg(theme.syntax_operator),
        TokenKind::Word if lang.keywords().contains(&text) => {
            on_code.fg(theme.syntax_keyword).add_modifier(Modifier::BOLD)
        }
        TokenKind::Word if TYPE_NAMES.contains(&text) => on_code.fg(theme.syntax_type),
        TokenKind::Word if looks_like_type(text) => on_code.fg(theme.syntax_type),
        _ => on_code.fg(theme.fg_primary),
    }
}

/// Capitalized multi-character words read as class names.
fn looks_like_type(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase) && word.chars().count() > 1
}
