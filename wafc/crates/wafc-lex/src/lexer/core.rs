//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its constructors and the
//! public pull, lookahead and batch interfaces.

use std::io::Read;
use std::mem;
use std::sync::Arc;

use crate::chars::{is_continuation, is_ident_start, utf8_width};
use crate::config::{BlockCommentRecovery, ConfigError, LexerConfig};
use crate::cursor::{Cursor, Source};
use crate::error::LexError;
use crate::replay::ReplayBuffer;
use crate::token::{Span, Token, TokenKind};

/// Lexer for the Waffle programming language.
///
/// The lexer transforms source text into a stream of [`Token`]s. Lexical
/// problems never stop it: they come out as [`TokenKind::Error`] tokens and
/// scanning continues after them.
///
/// # Example
///
/// ```
/// use wafc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::with_file("var x = 42;", "main.wf");
/// assert_eq!(lexer.peek().kind, TokenKind::Var);
/// assert_eq!(lexer.next_token().kind, TokenKind::Var);
/// assert_eq!(lexer.peek_nth(1).kind, TokenKind::Eq);
///
/// let tokens = lexer.tokenize();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[0].lexeme, "x");
/// assert_eq!(tokens[0].span.to_string(), "main.wf:1:5");
/// assert!(tokens[4].is_eof());
/// ```
pub struct Lexer<S> {
    /// Input being scanned.
    pub(crate) source: S,

    /// Source name shared by every span.
    file: Arc<str>,

    /// Unterminated block comment policy.
    pub(crate) block_comments: BlockCommentRecovery,

    /// Bytes of the lexeme being scanned.
    lexeme: Vec<u8>,

    /// Byte offset where the current token starts.
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<Cursor<'a>> {
    /// Creates a lexer over an in-memory string named `<memory>`.
    pub fn new(source: &'a str) -> Self {
        Self::from_source(Cursor::new(source), &LexerConfig::default())
    }

    /// Creates a lexer over an in-memory string with a file name for spans.
    pub fn with_file(source: &'a str, file_name: impl Into<String>) -> Self {
        let config = LexerConfig::new().file_name(file_name);
        Self::from_source(Cursor::new(source), &config)
    }

    /// Creates a lexer over an in-memory string with explicit settings.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_source(Cursor::new(source), &config))
    }
}

impl<R: Read> Lexer<ReplayBuffer<R>> {
    /// Creates a lexer that pulls its input from `reader` on demand.
    pub fn from_reader(reader: R) -> Self {
        Self::from_source(ReplayBuffer::new(reader), &LexerConfig::default())
    }

    /// Creates a stream-backed lexer with a file name for spans.
    pub fn from_reader_with_file(reader: R, file_name: impl Into<String>) -> Self {
        let config = LexerConfig::new().file_name(file_name);
        Self::from_source(ReplayBuffer::new(reader), &config)
    }

    /// Creates a stream-backed lexer with explicit settings.
    pub fn from_reader_with_config(reader: R, config: LexerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = ReplayBuffer::with_chunk_size(reader, config.read_chunk_size);
        Ok(Self::from_source(source, &config))
    }
}

impl<S: Source> Lexer<S> {
    /// Creates a lexer over any [`Source`].
    ///
    /// `config` is taken as-is; `read_chunk_size` does not apply here since
    /// the source is already built.
    pub fn from_source(source: S, config: &LexerConfig) -> Self {
        let mut lexer = Self {
            source,
            file: Arc::from(config.file_name.as_str()),
            block_comments: config.block_comments,
            lexeme: Vec::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        };
        lexer.begin_token();
        lexer
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the current byte.
    /// At end of input this returns [`TokenKind::Eof`], again and again.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = self.skip_whitespace_and_comments() {
            return token;
        }

        self.begin_token();

        let token = match self.source.current_byte() {
            None => self.make_token(TokenKind::Eof),
            Some(b'"') => self.lex_string(),
            Some(b) if is_ident_start(b) => self.lex_identifier(),
            Some(b) if b.is_ascii_digit() => self.lex_number(),
            Some(_) => match self.lex_operator() {
                Some(token) => token,
                None => self.lex_unknown(),
            },
        };

        log::trace!(
            "{} {:?} at {}",
            token.kind,
            token.lexeme,
            token.span.offset
        );
        token
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Token {
        self.peek_nth(0)
    }

    /// Returns the token `lookahead` positions ahead without consuming
    /// anything. `peek_nth(0)` is the token [`Lexer::next_token`] would return.
    pub fn peek_nth(&mut self, lookahead: usize) -> Token {
        let snapshot = self.source.snapshot();

        let mut token = self.next_token();
        for _ in 0..lookahead {
            token = self.next_token();
        }

        self.source.restore(snapshot);
        token
    }

    /// Scans the rest of the input.
    ///
    /// The result ends with exactly one [`TokenKind::Eof`] token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        log::debug!(
            "tokenized {}: {} tokens, {} errors",
            self.file,
            tokens.len(),
            tokens.iter().filter(|t| t.is_error()).count()
        );
        tokens
    }

    /// Returns the read error that cut a stream source short, if any.
    ///
    /// Such an error ends the input: the lexer reports `Eof` where the
    /// failure happened. The error is handed out once.
    pub fn take_io_error(&mut self) -> Option<LexError> {
        self.source.take_error().map(LexError::from)
    }

    /// Returns the source name used in spans.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.source.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.source.column()
    }

    /// Marks the current position as the start of a new token.
    pub(crate) fn begin_token(&mut self) {
        self.lexeme.clear();
        self.token_start = self.source.position();
        self.token_start_line = self.source.line();
        self.token_start_column = self.source.column();
    }

    /// Consumes one byte into the current lexeme.
    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.source.bump()?;
        self.lexeme.push(byte);
        Some(byte)
    }

    /// Consumes one whole character (all bytes of its UTF-8 sequence).
    pub(crate) fn bump_char(&mut self) {
        let Some(first) = self.bump() else {
            return;
        };
        for _ in 1..utf8_width(first) {
            match self.source.current_byte() {
                Some(b) if is_continuation(b) => {
                    self.bump();
                },
                _ => break,
            }
        }
    }

    /// Consumes bytes while `pred` holds.
    pub(crate) fn bump_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.source.current_byte().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Builds a token of `kind` from the current lexeme and start position.
    pub(crate) fn make_token(&mut self, kind: TokenKind) -> Token {
        let bytes = mem::take(&mut self.lexeme);
        let lexeme = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        let span = Span::new(
            Arc::clone(&self.file),
            self.token_start,
            self.source.position() - self.token_start,
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, lexeme, span)
    }

    /// Consumes one unrecognized character as an error token.
    fn lex_unknown(&mut self) -> Token {
        self.bump_char();
        let token = self.make_token(TokenKind::Error);
        log::debug!("{}: unexpected character {:?}", token.span, token.lexeme);
        token
    }
}

impl<S: Source> Iterator for Lexer<S> {
    type Item = Token;

    /// Yields tokens up to, but not including, [`TokenKind::Eof`].
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
