//! Comment lexing.
//!
//! This module handles skipping whitespace, line comments and block
//! comments. Block comments do not nest.

use crate::config::BlockCommentRecovery;
use crate::cursor::Source;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Returns a token only when an
    /// unterminated block comment must be reported
    /// ([`BlockCommentRecovery::Error`]).
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Option<Token> {
        loop {
            match self.source.current_byte() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.source.bump();
                },
                Some(b'/') => match self.source.peek_byte(1) {
                    Some(b'/') => self.skip_line_comment(),
                    Some(b'*') => {
                        if let Some(token) = self.skip_block_comment() {
                            return Some(token);
                        }
                    },
                    _ => return None,
                },
                _ => return None,
            }
        }
    }

    /// Skips a line comment (from `//` up to, not including, the newline).
    fn skip_line_comment(&mut self) {
        self.source.bump();
        self.source.bump();

        while self.source.current_byte().is_some_and(|b| b != b'\n') {
            self.source.bump();
        }
    }

    /// Skips a block comment, ending at the first `*/`.
    ///
    /// An inner `/*` has no effect. At end of input the comment either ends
    /// silently or becomes an error token holding its text. The text is only
    /// collected when it may be reported.
    fn skip_block_comment(&mut self) -> Option<Token> {
        let report = self.block_comments == BlockCommentRecovery::Error;

        self.begin_token();
        self.bump_comment(report);
        self.bump_comment(report);

        loop {
            match self.source.current_byte() {
                None => break,
                Some(b'*') if self.source.peek_byte(1) == Some(b'/') => {
                    self.source.bump();
                    self.source.bump();
                    return None;
                },
                Some(_) => self.bump_comment(report),
            }
        }

        if !report {
            return None;
        }

        let token = self.make_token(TokenKind::Error);
        log::debug!("{}: unterminated block comment", token.span);
        Some(token)
    }

    /// Consumes one comment byte, keeping it in the lexeme if `keep`.
    fn bump_comment(&mut self, keep: bool) {
        if keep {
            self.bump();
        } else {
            self.source.bump();
        }
    }
}
