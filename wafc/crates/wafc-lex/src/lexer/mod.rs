//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, constructors and the pull/peek/batch API
//! - `comment` - Whitespace and comment skipping
//! - `operator` - Longest-match operator and punctuation table
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Lexer;
pub use operator::{operator_kind, OPERATORS};
