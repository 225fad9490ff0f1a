#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{ErrorTip, LexicalError};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use config::{LexerConfig, UnterminatedStringPolicy};
pub use errors::errors::ErrorKind;
pub use lexer::{
    lexer::{lex, tokenize, tokenize_with, Lexed},
    tokens::{Keyword, Operator, Punctuation, Token, TokenKind, TypeKeyword},
};

/// A 1-based line/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }

    /// The position reached after reading `text` from `self`.
    pub fn advanced_by(self, text: &str) -> Self {
        text.chars().fold(self, |position, c| {
            if c == '\n' {
                Position {
                    line: position.line + 1,
                    column: 1,
                }
            } else {
                Position {
                    line: position.line,
                    column: position.column + 1,
                }
            }
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open byte range into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The text of the line `position` is on, without its line terminator.
pub fn get_line_at_position<'a>(source: &'a str, position: &Position) -> Option<&'a str> {
    let index = (position.line as usize).checked_sub(1)?;
    source
        .split('\n')
        .nth(index)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Formats a lexical error against the source it came from:
///
/// ```text
/// Error: InvalidCharacter (`@` is not a valid character)
/// -> error_input.ts
///   |
/// 7 | let y: number = x @ 5;
///   | ------------------^
/// ```
pub fn render_error(error: &LexicalError, source: &str, file_name: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    match error.get_tip() {
        ErrorTip::None => {
            let _ = writeln!(out, "Error: {}", error.get_error_name());
        }
        tip => {
            let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), tip);
        }
    }
    let _ = writeln!(out, "-> {}:{}", file_name, position);

    let Some(line_text) = get_line_at_position(source, position) else {
        return out;
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    let _ = write!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (&string[start..], start)
}
