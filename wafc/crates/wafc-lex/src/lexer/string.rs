//! String literal lexing.
//!
//! Escapes are recognized only to find the closing quote. The lexeme keeps
//! them verbatim; decoding belongs to later phases.

use crate::cursor::Source;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<S: Source> Lexer<S> {
    /// Lexes a string literal, quotes included.
    ///
    /// A `\` always takes the following character with it, so `\"` does
    /// not close the string. Reaching end of input first yields
    /// [`TokenKind::Error`] carrying the partial text.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.bump();

        loop {
            match self.source.current_byte() {
                None => {
                    let token = self.make_token(TokenKind::Error);
                    log::debug!("{}: unterminated string literal", token.span);
                    return token;
                },
                Some(b'"') => {
                    self.bump();
                    return self.make_token(TokenKind::StringLiteral);
                },
                Some(b'\\') => {
                    self.bump();
                    self.bump_char();
                },
                Some(_) => {
                    self.bump();
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::{Token, TokenKind};
    use crate::Lexer;

    fn lex_str(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.lex_string()
    }

    #[test]
    fn test_string_literal() {
        let token = lex_str("\"hello world\"");
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "\"hello world\"");
    }

    #[test]
    fn test_empty_string() {
        let token = lex_str("\"\"");
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.span.length, 2);
    }

    #[test]
    fn test_escaped_quote() {
        let token = lex_str(r#""he\"llo""#);
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, "\"he\\\"llo\"");
    }

    #[test]
    fn test_escapes_are_not_decoded() {
        let token = lex_str(r#""a\nb\tc\\""#);
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.lexeme, r#""a\nb\tc\\""#);
    }

    #[test]
    fn test_escaped_backslash_then_quote_closes() {
        let tokens = Lexer::new(r#""a\\" x"#).tokenize();
        assert_eq!(tokens[0].lexeme, r#""a\\""#);
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_unterminated_string() {
        let token = lex_str("\"hello");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, "\"hello");
        assert!(matches!(token.error(), Some(LexError::UnterminatedString)));
    }

    #[test]
    fn test_unterminated_after_escape() {
        let tokens = Lexer::new("\"abc\\").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].lexeme, "\"abc\\");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_escaped_quote_at_end_is_unterminated() {
        let token = lex_str(r#""abc\""#);
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.lexeme, r#""abc\""#);
    }

    #[test]
    fn test_multiline_string() {
        let tokens = Lexer::new("\"a\nb\" c").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, "\"a\nb\"");
        assert_eq!((tokens[1].span.line, tokens[1].span.column), (2, 4));
    }

    #[test]
    fn test_non_ascii_content() {
        let source = "\"héllo \\é\" x";
        let tokens = Lexer::new(source).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(&source[tokens[0].span.range()], tokens[0].lexeme);
        assert_eq!(tokens[1].lexeme, "x");
    }
}
