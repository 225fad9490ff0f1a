use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::{LexerConfig, UnterminatedStringPolicy},
    errors::errors::{ErrorKind, LexicalError},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Operator, Punctuation, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer<'_>, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried in order at every offset; the first match wins. Two-character
    /// operators are listed ahead of their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^//[^\n]*").unwrap(), handler: line_comment_handler },
        RegexPattern { regex: Regex::new("^/\\*").unwrap(), handler: block_comment_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Equals), "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::NotEquals), "!=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::LessEquals), "<=") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::GreaterEquals), ">=") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::And), "&&") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Or), "||") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Assignment), "=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Not), "!") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Less), "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Greater), ">") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Plus), "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Dash), "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Star), "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Slash), "/") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Percent), "%") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::OpenParen), "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::CloseParen), ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::OpenCurly), "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::CloseCurly), "}") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::Semicolon), ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::Comma), ",") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation(Punctuation::Colon), ":") },
    ];

    static ref BLOCK_COMMENT: Regex = Regex::new("^/\\*(?s:.*?)\\*/").unwrap();
    static ref STRING: Regex = Regex::new("^\"(?:\\\\(?s:.)|[^\"\\\\])*\"").unwrap();
    static ref SINGLE_LINE_STRING: Regex = Regex::new("^\"(?:\\\\.|[^\"\\\\\n])*\"").unwrap();
}

/// Everything a single pass over the source produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    /// Source-ordered tokens, always ending with one `EndOfInput`.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
    /// Skipped comments, as `TokenKind::Comment` tokens.
    pub comments: Vec<Token>,
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    position: Position,
    config: LexerConfig,
    tokens: Vec<Token>,
    comments: Vec<Token>,
    errors: Vec<LexicalError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, config: LexerConfig) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            position: Position::start(),
            config,
            tokens: vec![],
            comments: vec![],
            errors: vec![],
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Span of the next `len` bytes.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.pos,
            end: (self.pos + len).min(self.source.len()),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        let end = (self.pos + n).min(self.source.len());
        if let Some(consumed) = self.source.get(self.pos..end) {
            self.position = self.position.advanced_by(consumed);
            self.pos = end;
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn matched(&self, regex: &Regex) -> &'a str {
        regex
            .find(self.remainder())
            .map(|m| m.as_str())
            .unwrap_or_default()
    }

    /// Pushes a token spelled by the next `len` bytes and moves past it.
    fn emit(&mut self, kind: TokenKind, len: usize) {
        let span = self.span_of(len);
        let lexeme = self.source.get(span.start..span.end).unwrap_or_default().to_string();
        let token = MK_TOKEN!(kind, lexeme, self.position, span);

        self.push(token);
        self.advance_n(len);
    }

    fn emit_comment(&mut self, len: usize) {
        let span = self.span_of(len);
        let lexeme = self.source.get(span.start..span.end).unwrap_or_default().to_string();

        self.comments
            .push(MK_TOKEN!(TokenKind::Comment, lexeme, self.position, span));
        self.advance_n(len);
    }

    /// Records an error covering the next `len` bytes without consuming them.
    fn report(&mut self, kind: ErrorKind, len: usize) {
        let error = LexicalError::new(kind, self.position, self.span_of(len));
        trace!(position = %error.get_position(), "{}", error.message());
        self.errors.push(error);
    }

    fn invalid_character(&mut self) {
        let Some(character) = self.at() else {
            return;
        };

        self.report(ErrorKind::InvalidCharacter { character }, character.len_utf8());
        self.advance_n(character.len_utf8());
    }

    fn finish(mut self) -> Lexed {
        let token = MK_TOKEN!(
            TokenKind::EndOfInput,
            String::new(),
            self.position,
            self.span_of(0)
        );
        self.push(token);

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
            comments: self.comments,
        }
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.advance_n(matched.len());
}

fn line_comment_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.emit_comment(matched.len());
}

fn block_comment_handler(lexer: &mut Lexer<'_>, _regex: &Regex) {
    let matched = lexer.matched(&BLOCK_COMMENT);
    if !matched.is_empty() {
        lexer.emit_comment(matched.len());
        return;
    }

    // No closing `*/`: the comment runs to the end of the input.
    let rest = lexer.remainder().len();
    lexer.report(ErrorKind::UnterminatedComment, rest);
    lexer.emit_comment(rest);
}

fn symbol_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.emit(kind, value.len());
}

fn number_handler(lexer: &mut Lexer<'_>, regex: &Regex) {
    let matched = lexer.matched(regex);
    lexer.emit(TokenKind::NumberLiteral, matched.len());
}

fn string_handler(lexer: &mut Lexer<'_>, _regex: &Regex) {
    let policy = lexer.config.unterminated_string;
    let terminated = match policy {
        UnterminatedStringPolicy::ConsumeToEndOfInput => &*STRING,
        UnterminatedStringPolicy::StopAtNewline => &*SINGLE_LINE_STRING,
    };

    let matched = lexer.matched(terminated);
    let (content, len) = if !matched.is_empty() {
        (&matched[1..matched.len() - 1], matched.len())
    } else {
        let rest = &lexer.remainder()[1..];
        let content = match policy {
            UnterminatedStringPolicy::ConsumeToEndOfInput => rest,
            UnterminatedStringPolicy::StopAtNewline => {
                let line = rest.find('\n').map_or(rest, |end| &rest[..end]);
                line.strip_suffix('\r').unwrap_or(line)
            }
        };

        lexer.report(
            ErrorKind::UnterminatedString {
                partial: content.to_string(),
            },
            content.len() + 1,
        );
        (content, content.len() + 1)
    };

    let token = MK_TOKEN!(
        TokenKind::StringLiteral,
        content.to_string(),
        lexer.position(),
        lexer.span_of(len)
    );
    lexer.push(token);
    lexer.advance_n(len);
}

/// Tokenizes `source` with the default configuration.
///
/// Never fails: malformed input shows up in the returned error list and the
/// token stream still ends with `EndOfInput`.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    tokenize_with(source, LexerConfig::default())
}

pub fn tokenize_with(source: &str, config: LexerConfig) -> (Vec<Token>, Vec<LexicalError>) {
    let lexed = lex(source, config);
    (lexed.tokens, lexed.errors)
}

#[tracing::instrument(level = "debug", skip(source), fields(bytes = source.len()))]
pub fn lex(source: &str, config: LexerConfig) -> Lexed {
    let mut lex = Lexer::new(source, config);

    while !lex.at_eof() {
        let start = lex.pos;
        let remainder = lex.remainder();

        match PATTERNS.iter().find(|pattern| pattern.regex.is_match(remainder)) {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => lex.invalid_character(),
        }

        // Every iteration must consume something.
        if lex.pos == start {
            lex.invalid_character();
        }
    }

    let lexed = lex.finish();
    debug!(
        tokens = lexed.tokens.len(),
        errors = lexed.errors.len(),
        comments = lexed.comments.len(),
        "tokenized source"
    );
    lexed
}
