//! Lexical analysis.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens. It handles:
//!
//! - Tokenization driven by an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, literals, operators and punctuation
//! - Line/column tracking for every token and error
//! - Comments and whitespace skipping
//! - Recovery from invalid characters and unterminated strings or comments

pub mod lexer;
pub mod tokens;
