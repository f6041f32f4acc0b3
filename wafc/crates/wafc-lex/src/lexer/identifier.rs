//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use crate::chars::is_ident_continue;
use crate::cursor::Source;
use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the maximal run of `[A-Za-z0-9_]` before looking the text
    /// up, so `funcs` and `int32bit` stay identifiers.
    ///
    /// # Returns
    ///
    /// A keyword kind, [`TokenKind::BoolLiteral`] for `true`/`false`, or
    /// [`TokenKind::Ident`]
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.bump_while(is_ident_continue);

        let mut token = self.make_token(TokenKind::Ident);
        if let Some(kind) = keyword_from_ident(&token.lexeme) {
            token.kind = kind;
        }
        token
    }
}
