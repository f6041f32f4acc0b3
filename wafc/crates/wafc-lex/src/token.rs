//! Token definitions.
//!
//! This module defines [`TokenKind`], the closed set of lexical categories,
//! together with the [`Token`] and [`Span`] values handed to the parser and
//! the static keyword table.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::error::LexError;

/// Every lexical category the lexer can produce.
///
/// The set is total: any input maps to exactly one kind per token, with
/// [`TokenKind::Error`] catching unrecognized or malformed lexemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Structural keywords
    /// `func`
    Func,
    /// `extern`
    Extern,
    /// `return`
    Return,
    /// `while`
    While,
    /// `for`
    For,
    /// `if`
    If,
    /// `else`
    Else,
    /// `use`
    Use,
    /// `mut`
    Mut,
    /// `var`
    Var,
    /// `public`
    Public,

    // Primitive type keywords
    /// `void`
    Void,
    /// `bool`
    Bool,
    /// `int8`
    Int8,
    /// `int16`
    Int16,
    /// `int32`
    Int32,
    /// `int64`
    Int64,
    /// `uint8`
    Uint8,
    /// `uint16`
    Uint16,
    /// `uint32`
    Uint32,
    /// `uint64`
    Uint64,
    /// `fp32`
    Fp32,
    /// `fp64`
    Fp64,

    // Literals
    /// Decimal integer literal, e.g. `42`
    IntLiteral,
    /// Decimal float literal, e.g. `3.14`
    FloatLiteral,
    /// Double-quoted string literal with escapes kept verbatim
    StringLiteral,
    /// `true` or `false`
    BoolLiteral,

    /// Identifier
    Ident,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    // Assignment
    /// `=`
    Eq,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `/=`
    SlashEq,
    /// `%=`
    PercentEq,

    // Bitwise
    /// `<<`
    LtLt,
    /// `>>`
    GtGt,
    /// `<<=`
    LtLtEq,
    /// `>>=`
    GtGtEq,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `~`
    Tilde,
    /// `!`
    Bang,
    /// `&=`
    AmpEq,
    /// `|=`
    PipeEq,
    /// `^=`
    CaretEq,

    // Comparison and logic
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,

    // Punctuation
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,

    /// End of input.
    Eof,
    /// Unrecognized character or malformed lexeme.
    Error,
}

impl TokenKind {
    /// Returns true for structural and primitive-type keywords.
    ///
    /// `true` and `false` lex as [`TokenKind::BoolLiteral`] and are not
    /// counted here.
    pub fn is_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Func | Extern | Return | While | For | If | Else | Use | Mut | Var | Public
        ) || self.is_type_keyword()
    }

    /// Returns true for the primitive type names (`void`, `int32`, `fp64`, ...).
    pub fn is_type_keyword(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Void | Bool
                | Int8
                | Int16
                | Int32
                | Int64
                | Uint8
                | Uint16
                | Uint32
                | Uint64
                | Fp32
                | Fp64
        )
    }

    /// Returns true for literal kinds.
    pub fn is_literal(self) -> bool {
        use TokenKind::*;
        matches!(self, IntLiteral | FloatLiteral | StringLiteral | BoolLiteral)
    }

    /// Returns true for arithmetic, assignment, bitwise, comparison and
    /// logical operators.
    pub fn is_operator(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Plus | Minus
                | Star
                | Slash
                | Percent
                | PlusPlus
                | MinusMinus
                | Eq
                | PlusEq
                | MinusEq
                | StarEq
                | SlashEq
                | PercentEq
                | LtLt
                | GtGt
                | LtLtEq
                | GtGtEq
                | Amp
                | Pipe
                | Caret
                | Tilde
                | Bang
                | AmpEq
                | PipeEq
                | CaretEq
                | EqEq
                | NotEq
                | Lt
                | LtEq
                | Gt
                | GtEq
                | AndAnd
                | OrOr
        )
    }

    /// Returns true for grouping and separator punctuation.
    pub fn is_punctuation(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Question | Colon | LParen | RParen | LBrace | RBrace | Comma | Semicolon | Dot
        )
    }

    /// Returns true for [`TokenKind::Eof`] and [`TokenKind::Error`].
    pub fn is_sentinel(self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Reserved words and the kinds they lex to. Lookup is exact and
/// case-sensitive.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("func", TokenKind::Func),
    ("extern", TokenKind::Extern),
    ("return", TokenKind::Return),
    ("while", TokenKind::While),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("use", TokenKind::Use),
    ("mut", TokenKind::Mut),
    ("var", TokenKind::Var),
    ("public", TokenKind::Public),
    ("void", TokenKind::Void),
    ("bool", TokenKind::Bool),
    ("int8", TokenKind::Int8),
    ("int16", TokenKind::Int16),
    ("int32", TokenKind::Int32),
    ("int64", TokenKind::Int64),
    ("uint8", TokenKind::Uint8),
    ("uint16", TokenKind::Uint16),
    ("uint32", TokenKind::Uint32),
    ("uint64", TokenKind::Uint64),
    ("fp32", TokenKind::Fp32),
    ("fp64", TokenKind::Fp64),
    ("true", TokenKind::BoolLiteral),
    ("false", TokenKind::BoolLiteral),
];

lazy_static! {
    static ref KEYWORD_MAP: FxHashMap<&'static str, TokenKind> =
        KEYWORDS.iter().copied().collect();
}

/// Looks up the keyword kind for a complete identifier.
///
/// # Example
///
/// ```
/// use wafc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("func"), Some(TokenKind::Func));
/// assert_eq!(keyword_from_ident("true"), Some(TokenKind::BoolLiteral));
/// assert_eq!(keyword_from_ident("funcs"), None);
/// assert_eq!(keyword_from_ident("Func"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(text).copied()
}

/// Location of a lexeme in its source.
///
/// `offset` and `length` are in bytes. `line` and `column` are 1-based and
/// describe the first character of the lexeme, with columns counted in
/// characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Name of the originating source, `<memory>` for anonymous buffers.
    pub file: Arc<str>,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Length in bytes.
    pub length: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    pub fn new(file: Arc<str>, offset: usize, length: usize, line: u32, column: u32) -> Self {
        Self {
            file,
            offset,
            length,
            line,
            column,
        }
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Byte range covered by the span, suitable for slicing the source.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Returns true for zero-length spans.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A classified lexeme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenKind,
    /// Exact source text, including quotes for strings.
    pub lexeme: String,
    /// Where the lexeme came from.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token reports a malformed lexeme.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Explains why an [`TokenKind::Error`] token was produced.
    ///
    /// Returns `None` for every other kind.
    ///
    /// # Example
    ///
    /// ```
    /// use wafc_lex::{LexError, Lexer};
    ///
    /// let mut lexer = Lexer::new("\"open");
    /// let token = lexer.next_token();
    /// assert!(matches!(token.error(), Some(LexError::UnterminatedString)));
    /// ```
    pub fn error(&self) -> Option<LexError> {
        if !self.is_error() {
            return None;
        }

        let error = if self.lexeme.starts_with("/*") {
            LexError::UnterminatedBlockComment
        } else if self.lexeme.starts_with('"') {
            LexError::UnterminatedString
        } else {
            LexError::UnexpectedCharacter(self.lexeme.clone())
        };
        Some(error)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(offset: usize, length: usize) -> Span {
        Span::new(Arc::from("test.wf"), offset, length, 1, offset as u32 + 1)
    }

    #[test]
    fn test_keyword_lookup_is_exact() {
        assert_eq!(keyword_from_ident("int32"), Some(TokenKind::Int32));
        assert_eq!(keyword_from_ident("uint64"), Some(TokenKind::Uint64));
        assert_eq!(keyword_from_ident("false"), Some(TokenKind::BoolLiteral));
        assert_eq!(keyword_from_ident("int32bit"), None);
        assert_eq!(keyword_from_ident("INT32"), None);
        assert_eq!(keyword_from_ident(""), None);
    }

    #[test]
    fn test_every_keyword_is_reachable() {
        for (text, kind) in KEYWORDS {
            assert_eq!(keyword_from_ident(text), Some(*kind), "{}", text);
        }
    }

    #[test]
    fn test_keyword_categories() {
        for (text, kind) in KEYWORDS {
            if *kind == TokenKind::BoolLiteral {
                assert!(kind.is_literal(), "{}", text);
            } else {
                assert!(kind.is_keyword(), "{}", text);
            }
        }
        assert!(TokenKind::Fp32.is_type_keyword());
        assert!(!TokenKind::Func.is_type_keyword());
        assert!(!TokenKind::Ident.is_keyword());
    }

    #[test]
    fn test_operator_and_punctuation_are_disjoint() {
        assert!(TokenKind::LtLtEq.is_operator());
        assert!(!TokenKind::LtLtEq.is_punctuation());
        assert!(TokenKind::Semicolon.is_punctuation());
        assert!(!TokenKind::Semicolon.is_operator());
        assert!(TokenKind::Eof.is_sentinel());
        assert!(TokenKind::Error.is_sentinel());
        assert!(!TokenKind::Ident.is_sentinel());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::LtLtEq.to_string(), "LtLtEq");
        let token = Token::new(TokenKind::Ident, "foo", span(0, 3));
        assert_eq!(token.to_string(), "Ident(\"foo\")");
        assert_eq!(token.span.to_string(), "test.wf:1:1");
    }

    #[test]
    fn test_span_range() {
        let s = span(4, 3);
        assert_eq!(s.end(), 7);
        assert_eq!(s.range(), 4..7);
        assert!(!s.is_empty());
        assert!(span(9, 0).is_empty());
    }

    #[test]
    fn test_error_classification() {
        let unknown = Token::new(TokenKind::Error, "@", span(0, 1));
        assert!(matches!(unknown.error(), Some(LexError::UnexpectedCharacter(c)) if c == "@"));

        let string = Token::new(TokenKind::Error, "\"abc", span(0, 4));
        assert!(matches!(string.error(), Some(LexError::UnterminatedString)));

        let comment = Token::new(TokenKind::Error, "/* abc", span(0, 6));
        assert!(matches!(comment.error(), Some(LexError::UnterminatedBlockComment)));

        let ident = Token::new(TokenKind::Ident, "abc", span(0, 3));
        assert!(ident.error().is_none());
    }
}
