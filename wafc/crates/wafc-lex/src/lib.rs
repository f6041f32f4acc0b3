//! wafc-lex - Lexical Analyzer for the Waffle Programming Language
//!
//! This crate provides the lexer (tokenizer) for the Waffle programming
//! language. It transforms source text into a stream of classified tokens
//! that can be consumed by the parser.
//!
//! # Overview
//!
//! The lexer works over any [`cursor::Source`]. Two are provided:
//!
//! - [`Cursor`] scans an in-memory `&str`.
//! - [`ReplayBuffer`] pulls bytes lazily from any [`std::io::Read`], keeping
//!   just enough history to replay lookahead.
//!
//! Tokens can be pulled one at a time with [`Lexer::next_token`], inspected
//! ahead of time with [`Lexer::peek`] and [`Lexer::peek_nth`], or collected
//! with [`Lexer::tokenize`]. Lexical problems never abort scanning: they
//! come out as [`TokenKind::Error`] tokens and [`Token::error`] explains them.
//!
//! # Example Usage
//!
//! ```
//! use wafc_lex::{Lexer, TokenKind};
//!
//! let source = "var x = 42;";
//! let mut lexer = Lexer::new(source);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().kind, TokenKind::Var);
//!
//! // Or iterate through the rest (the iterator stops before Eof)
//! let rest: Vec<_> = lexer.map(|t| t.lexeme).collect();
//! assert_eq!(rest, ["x", "=", "42", ";"]);
//! ```
//!
//! Reading from a stream:
//!
//! ```
//! use wafc_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_reader_with_file("func main() {}".as_bytes(), "main.wf");
//! let tokens = lexer.tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Func);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, spans and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - The `Source` trait and the in-memory cursor
//! - [`replay`] - Stream-backed source with lookahead replay
//! - [`chars`] - Byte classification
//! - [`config`] - Lexer settings
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! **Structural**: `func`, `extern`, `return`, `while`, `for`, `if`, `else`,
//! `use`, `mut`, `var`, `public`
//!
//! **Types**: `void`, `bool`, `int8`, `int16`, `int32`, `int64`, `uint8`,
//! `uint16`, `uint32`, `uint64`, `fp32`, `fp64`
//!
//! Keywords are case-sensitive and only match whole identifiers.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007`
//! - **Float**: `3.14` (a digit is required on both sides of the `.`)
//! - **String**: `"hello"`, `"a\"b"` (escapes are kept verbatim)
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`, `++`, `--`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `<<=`, `>>=`, `&=`, `|=`, `^=`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`
//! - **Comparison**: `==`, `!=`, `<`, `<=`, `>`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Other**: `?`, `:`, `.`
//!
//! ## Delimiters
//!
//! `(`, `)`, `{`, `}`, `,`, `;`
//!
//! ## Special
//!
//! - **Eof**: End of input, repeated on every further call
//! - **Error**: Unknown character, unterminated string, or (when enabled)
//!   unterminated block comment

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod replay;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use config::{BlockCommentRecovery, ConfigError, LexerConfig};
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::{operator_kind, Lexer, OPERATORS};
pub use replay::ReplayBuffer;
pub use token::{keyword_from_ident, Span, Token, TokenKind, KEYWORDS};
