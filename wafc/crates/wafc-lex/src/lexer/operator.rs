//! Operator and punctuation lexing.
//!
//! Operators are matched against a static table, longest entry first, so
//! `<<=` is never split into `<<` and `=` and `==` never into two `=`.

use crate::cursor::Source;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Operator and punctuation spellings in match order.
///
/// Every entry comes before any shorter entry that is a prefix of it.
pub static OPERATORS: &[(&str, TokenKind)] = &[
    // Three characters
    ("<<=", TokenKind::LtLtEq),
    (">>=", TokenKind::GtGtEq),
    // Two characters
    ("++", TokenKind::PlusPlus),
    ("--", TokenKind::MinusMinus),
    ("+=", TokenKind::PlusEq),
    ("-=", TokenKind::MinusEq),
    ("*=", TokenKind::StarEq),
    ("/=", TokenKind::SlashEq),
    ("%=", TokenKind::PercentEq),
    ("&=", TokenKind::AmpEq),
    ("|=", TokenKind::PipeEq),
    ("^=", TokenKind::CaretEq),
    ("==", TokenKind::EqEq),
    ("!=", TokenKind::NotEq),
    ("<=", TokenKind::LtEq),
    (">=", TokenKind::GtEq),
    ("<<", TokenKind::LtLt),
    (">>", TokenKind::GtGt),
    ("&&", TokenKind::AndAnd),
    ("||", TokenKind::OrOr),
    // One character
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("=", TokenKind::Eq),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("&", TokenKind::Amp),
    ("|", TokenKind::Pipe),
    ("^", TokenKind::Caret),
    ("~", TokenKind::Tilde),
    ("!", TokenKind::Bang),
    ("?", TokenKind::Question),
    (":", TokenKind::Colon),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    (".", TokenKind::Dot),
];

/// Returns the kind of an exact operator or punctuation spelling.
///
/// # Example
///
/// ```
/// use wafc_lex::{operator_kind, TokenKind};
///
/// assert_eq!(operator_kind(">>="), Some(TokenKind::GtGtEq));
/// assert_eq!(operator_kind("=>"), None);
/// ```
pub fn operator_kind(text: &str) -> Option<TokenKind> {
    OPERATORS
        .iter()
        .find(|(op, _)| *op == text)
        .map(|(_, kind)| *kind)
}

impl<S: Source> Lexer<S> {
    /// Lexes the longest operator or punctuation at the cursor.
    ///
    /// Returns `None`, consuming nothing, if no table entry matches.
    pub(crate) fn lex_operator(&mut self) -> Option<Token> {
        let (op, kind) = OPERATORS.iter().find(|(op, _)| self.at(op))?;
        for _ in 0..op.len() {
            self.bump();
        }
        Some(self.make_token(*kind))
    }

    /// Checks whether the input at the cursor starts with `text`.
    fn at(&mut self, text: &str) -> bool {
        text.bytes()
            .enumerate()
            .all(|(i, b)| self.source.peek_byte(i) == Some(b))
    }
}
