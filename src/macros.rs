//! Token construction macros.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for a fixed-spelling token
//!
//! These macros keep the pattern table in the lexer down to one line per token.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$position` - Line and column of the first character
/// * `$span` - The byte range in the source
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, "42".to_string(), position, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
            span: $span,
        }
    };
}

/// Creates a lexer handler for tokens whose spelling never varies.
///
/// The handler pushes a token of the given kind at the current position and
/// advances past its spelling.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator(Operator::Plus), "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer<'_>, _regex: &Regex| {
            let token = MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.position(),
                lexer.span_of($value.len())
            );
            lexer.push(token);
            lexer.advance_n($value.len());
        }
    };
}
