//! Lexical error types.
//!
//! Errors are plain values collected while scanning:
//!
//! - `LexicalError` pairs an `ErrorKind` with its position and span
//! - `ErrorKind` is the closed set of recoverable failures
//! - `ErrorTip` carries an optional human-readable suggestion

pub mod errors;
