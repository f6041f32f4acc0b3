//! Lexer configuration.
//!
//! Most callers never touch this: [`Lexer::new`](crate::Lexer::new) and
//! [`Lexer::with_file`](crate::Lexer::with_file) use the defaults.

use thiserror::Error;

/// File name reported in spans when the source has no name.
pub const DEFAULT_FILE_NAME: &str = "<memory>";

/// Default number of bytes requested per read from a stream source.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 4096;

/// Upper bound for [`LexerConfig::read_chunk_size`].
pub const MAX_READ_CHUNK_SIZE: usize = 1024 * 1024;

/// What to do when a `/*` comment reaches end of input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockCommentRecovery {
    /// Skip to end of input; the next token is `Eof`.
    #[default]
    Silent,
    /// Emit an `Error` token holding the comment text, then `Eof`.
    Error,
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `file_name` was set to an empty string.
    #[error("file_name must not be empty")]
    EmptyFileName,

    /// `read_chunk_size` outside `1..=MAX_READ_CHUNK_SIZE`.
    #[error("read_chunk_size must be between 1 and {max} bytes, got {0}", max = MAX_READ_CHUNK_SIZE)]
    InvalidChunkSize(usize),
}

/// Lexer settings.
///
/// # Examples
///
/// ```
/// use wafc_lex::{BlockCommentRecovery, LexerConfig};
///
/// let config = LexerConfig::new()
///     .file_name("main.wf")
///     .block_comments(BlockCommentRecovery::Error);
/// assert!(config.validate().is_ok());
///
/// let config = LexerConfig {
///     read_chunk_size: 0,
///     ..Default::default()
/// };
/// assert!(config.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Source name recorded in every span.
    ///
    /// Default: `<memory>`
    pub file_name: String,

    /// Recovery for unterminated block comments.
    ///
    /// Default: [`BlockCommentRecovery::Silent`]
    pub block_comments: BlockCommentRecovery,

    /// Bytes requested per `read` call on stream sources. Ignored for
    /// in-memory sources.
    ///
    /// Default: 4096
    pub read_chunk_size: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            block_comments: BlockCommentRecovery::Silent,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl LexerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name. An empty name falls back to `<memory>`.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.file_name = if name.is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            name
        };
        self
    }

    /// Sets the unterminated block comment policy.
    pub fn block_comments(mut self, recovery: BlockCommentRecovery) -> Self {
        self.block_comments = recovery;
        self
    }

    /// Sets the stream read size.
    pub fn read_chunk_size(mut self, size: usize) -> Self {
        self.read_chunk_size = size;
        self
    }

    /// Checks that all values are in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.is_empty() {
            return Err(ConfigError::EmptyFileName);
        }

        if self.read_chunk_size == 0 || self.read_chunk_size > MAX_READ_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize(self.read_chunk_size));
        }

        Ok(())
    }
}
