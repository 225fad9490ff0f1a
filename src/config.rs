//! Lexer configuration.
//!
//! The vocabulary of the language is fixed; the only tunable behavior is how
//! far an unterminated string literal reaches before the lexer gives up on it.

/// Where the lexer stops consuming a string literal that has no closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedStringPolicy {
    /// The literal swallows everything up to the end of the input.
    #[default]
    ConsumeToEndOfInput,
    /// The literal ends before the first newline; lexing resumes on the next line.
    StopAtNewline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    pub unterminated_string: UnterminatedStringPolicy,
}

impl LexerConfig {
    pub fn with_unterminated_string(mut self, policy: UnterminatedStringPolicy) -> Self {
        self.unterminated_string = policy;
        self
    }
}
