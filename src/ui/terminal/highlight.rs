// SPDX-License-Identifier: MPL-2.0
//! Minimal syntax highlighter for the typewriter terminal.
//!
//! Works one line at a time and tolerates half-typed input: an unterminated
//! string literal simply runs to the end of the line.

use crate::ui::design_tokens::palette;
use iced::Color;

const KEYWORDS: &[&str] = &[
    "interface",
    "async",
    "function",
    "const",
    "let",
    "await",
    "return",
    "export",
    "class",
    "extends",
    "implements",
    "import",
    "from",
    "type",
    "enum",
    "fn",
    "pub",
    "struct",
    "impl",
    "use",
    "mut",
];

const BUILTIN_TYPES: &[&str] = &["string", "boolean", "number", "bool", "str", "u32", "usize"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    String,
    Type,
    Property,
    Boolean,
    Function,
    Comment,
    Number,
    Plain,
}

impl TokenKind {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            TokenKind::Keyword => palette::SYNTAX_KEYWORD,
            TokenKind::String => palette::SYNTAX_STRING,
            TokenKind::Type => palette::SYNTAX_TYPE,
            TokenKind::Property => palette::SYNTAX_PROPERTY,
            TokenKind::Boolean => palette::SYNTAX_BOOLEAN,
            TokenKind::Function => palette::SYNTAX_FUNCTION,
            TokenKind::Comment => palette::SYNTAX_COMMENT,
            TokenKind::Number => palette::SYNTAX_NUMBER,
            TokenKind::Plain => palette::SYNTAX_PLAIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Splits `line` into highlighted tokens. Concatenating the token texts
/// always yields `line` unchanged.
#[must_use]
pub fn highlight(line: &str) -> Vec<Token<'_>> {
    let mut spans: Vec<(TokenKind, usize, usize)> = Vec::new();
    let mut pos = 0;

    while let Some(first) = line[pos..].chars().next() {
        let rest = &line[pos..];
        let (kind, len) = if rest.starts_with("//") {
            (TokenKind::Comment, rest.len())
        } else if first == '"' {
            let len = rest[1..].find('"').map_or(rest.len(), |end| end + 2);
            (TokenKind::String, len)
        } else if first.is_ascii_digit() {
            let len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            (TokenKind::Number, len)
        } else if is_word_start(first) {
            let len = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            (classify_word(&rest[..len], &rest[len..]), len)
        } else {
            (TokenKind::Plain, first.len_utf8())
        };

        match spans.last_mut() {
            // Adjacent plain text merges into one token.
            Some((TokenKind::Plain, _, end)) if kind == TokenKind::Plain => *end += len,
            _ => spans.push((kind, pos, pos + len)),
        }
        pos += len;
    }

    spans
        .into_iter()
        .map(|(kind, start, end)| Token {
            kind,
            text: &line[start..end],
        })
        .collect()
}

fn classify_word(word: &str, after: &str) -> TokenKind {
    if word == "true" || word == "false" {
        TokenKind::Boolean
    } else if KEYWORDS.contains(&word) {
        TokenKind::Keyword
    } else if BUILTIN_TYPES.contains(&word)
        || word.starts_with(|c: char| c.is_ascii_uppercase())
    {
        TokenKind::Type
    } else if after.trim_start().starts_with(':') {
        TokenKind::Property
    } else if after.starts_with('(') {
        TokenKind::Function
    } else {
        TokenKind::Plain
    }
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
