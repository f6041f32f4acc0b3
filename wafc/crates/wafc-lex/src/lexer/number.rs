//! Number literal lexing.
//!
//! Only decimal literals exist: a digit run, optionally followed by `.` and
//! a second digit run. There are no exponents, radix prefixes or digit
//! separators.

use crate::cursor::Source;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes an integer or float literal.
    ///
    /// The `.` is taken only when a digit follows it; `123.` lexes as
    /// `IntLiteral` and leaves the `.` for the next token.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.bump_while(|b| b.is_ascii_digit());

        let is_float = self.source.current_byte() == Some(b'.')
            && self.source.peek_byte(1).is_some_and(|b| b.is_ascii_digit());

        if is_float {
            self.bump();
            self.bump_while(|b| b.is_ascii_digit());
            self.make_token(TokenKind::FloatLiteral)
        } else {
            self.make_token(TokenKind::IntLiteral)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_num(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.lex_number()
    }

    fn pairs(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_integer() {
        let token = lex_num("42");
        assert_eq!(token.kind, TokenKind::IntLiteral);
        assert_eq!(token.lexeme, "42");
    }

    #[test]
    fn test_float() {
        let token = lex_num("123.456");
        assert_eq!(token.kind, TokenKind::FloatLiteral);
        assert_eq!(token.lexeme, "123.456");
        assert_eq!(token.span.length, 7);
    }

    #[test]
    fn test_int_and_float() {
        assert_eq!(
            pairs("42 123.456"),
            vec![
                (TokenKind::IntLiteral, "42".to_string()),
                (TokenKind::FloatLiteral, "123.456".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_separate() {
        assert_eq!(
            pairs("123."),
            vec![
                (TokenKind::IntLiteral, "123".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_member_access_after_number() {
        assert_eq!(
            pairs("1.x"),
            vec![
                (TokenKind::IntLiteral, "1".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_only_one_fraction() {
        assert_eq!(
            pairs("1.2.3"),
            vec![
                (TokenKind::FloatLiteral, "1.2".to_string()),
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::IntLiteral, "3".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_no_radix_prefix_or_exponent() {
        let kinds: Vec<_> = Lexer::new("0xFF 1e10").map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IntLiteral,
                TokenKind::Ident,
                TokenKind::IntLiteral,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(lex_num("007").lexeme, "007");
        assert_eq!(lex_num("0.50").lexeme, "0.50");
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        assert_eq!(
            pairs(".5"),
            vec![
                (TokenKind::Dot, ".".to_string()),
                (TokenKind::IntLiteral, "5".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }
}
