use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    /// Every reserved word of the language. Words are only looked up once the
    /// identifier pattern has matched in full, so `letx` stays an identifier.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Keyword(Keyword::Let));
        map.insert("const", TokenKind::Keyword(Keyword::Const));
        map.insert("if", TokenKind::Keyword(Keyword::If));
        map.insert("else", TokenKind::Keyword(Keyword::Else));
        map.insert("while", TokenKind::Keyword(Keyword::While));
        map.insert("number", TokenKind::TypeKeyword(TypeKeyword::Number));
        map.insert("string", TokenKind::TypeKeyword(TypeKeyword::String));
        map.insert("boolean", TokenKind::TypeKeyword(TypeKeyword::Boolean));
        map.insert("true", TokenKind::BooleanLiteral);
        map.insert("false", TokenKind::BooleanLiteral);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    Const,
    If,
    Else,
    While,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::Const => "const",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::While => "while",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TypeKeyword {
    Number,
    String,
    Boolean,
}

impl TypeKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Number => "number",
            TypeKeyword::String => "string",
            TypeKeyword::Boolean => "boolean",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And,
    Or,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Dash => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Assignment => "=",
            Operator::Equals => "==",
            Operator::Not => "!",
            Operator::NotEquals => "!=",
            Operator::Less => "<",
            Operator::LessEquals => "<=",
            Operator::Greater => ">",
            Operator::GreaterEquals => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Punctuation {
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Comma,
    Colon,
}

impl Punctuation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuation::OpenParen => "(",
            Punctuation::CloseParen => ")",
            Punctuation::OpenCurly => "{",
            Punctuation::CloseCurly => "}",
            Punctuation::Semicolon => ";",
            Punctuation::Comma => ",",
            Punctuation::Colon => ":",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    NumberLiteral,
    StringLiteral,
    BooleanLiteral,

    Keyword(Keyword),
    TypeKeyword(TypeKeyword),
    Operator(Operator),
    Punctuation(Punctuation),

    /// Only ever found in `Lexed::comments`, never in the token stream.
    Comment,
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(_) => write!(f, "Keyword"),
            TokenKind::TypeKeyword(_) => write!(f, "TypeKeyword"),
            TokenKind::Operator(_) => write!(f, "Operator"),
            TokenKind::Punctuation(_) => write!(f, "Punctuation"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "{}", self.kind),
            _ => write!(f, "{}({})", self.kind, self.lexeme),
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Decodes the escape sequences of a string literal's lexeme.
    ///
    /// Returns `None` for every other kind of token. Unknown escapes and a
    /// trailing lone backslash are kept verbatim.
    pub fn unescaped(&self) -> Option<String> {
        if self.kind != TokenKind::StringLiteral {
            return None;
        }

        let mut result = String::new();
        let mut chars = self.lexeme.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.peek() {
                Some('n') => {
                    result.push('\n');
                    chars.next();
                }
                Some('t') => {
                    result.push('\t');
                    chars.next();
                }
                Some('r') => {
                    result.push('\r');
                    chars.next();
                }
                Some('\\') => {
                    result.push('\\');
                    chars.next();
                }
                Some('"') => {
                    result.push('"');
                    chars.next();
                }
                Some('0') => {
                    result.push('\0');
                    chars.next();
                }
                Some('x') => {
                    chars.next();
                    let mut hex = String::new();

                    while hex.len() < 2 {
                        match chars.peek() {
                            Some(ch) if ch.is_ascii_hexdigit() => {
                                hex.push(*ch);
                                chars.next();
                            }
                            _ => break,
                        }
                    }

                    match u8::from_str_radix(&hex, 16) {
                        Ok(byte) => result.push(byte as char),
                        Err(_) => {
                            // `\x` without digits
                            result.push_str("\\x");
                            result.push_str(&hex);
                        }
                    }
                }
                _ => result.push(ch), // Keep the backslash
            }
        }

        Some(result)
    }
}
