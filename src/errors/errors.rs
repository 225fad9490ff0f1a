use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// A recovered lexical error. The lexer records one and keeps scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalError {
    internal_error: ErrorKind,
    position: Position,
    span: Span,
}

impl LexicalError {
    pub fn new(error_kind: ErrorKind, position: Position, span: Span) -> Self {
        LexicalError {
            internal_error: error_kind,
            position,
            span,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// The source bytes the error covers. For unterminated constructs this
    /// runs from the opening delimiter to where the lexer stopped.
    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn offending_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.start..self.span.end).unwrap_or_default()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorKind::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorKind::UnterminatedString { .. } => "UnterminatedString",
            ErrorKind::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorKind::InvalidCharacter { character: '`' } => {
                ErrorTip::Suggestion(String::from("template literals are not supported"))
            }
            ErrorKind::InvalidCharacter { character } if character.is_whitespace() => {
                ErrorTip::None
            }
            ErrorKind::InvalidCharacter { character } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid character", character))
            }
            ErrorKind::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("missing closing `\"`"))
            }
            ErrorKind::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("missing closing `*/`"))
            }
        }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position)
    }
}

impl std::error::Error for LexicalError {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated string: \"{partial}")]
    UnterminatedString { partial: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
}
