//! Error types for the lexer.
//!
//! Lexical problems never abort scanning: they are reported in-band as
//! [`TokenKind::Error`](crate::TokenKind::Error) tokens. [`LexError`] names
//! the reason behind such a token (see [`Token::error`](crate::Token::error))
//! and carries read failures from stream-backed sources.

use thiserror::Error;

/// Reason a lexeme could not be classified, or why the input ended early.
#[derive(Debug, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(String),

    /// A string literal without its closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A block comment without its closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// The underlying reader failed; input was treated as ending there.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
