//! Byte cursor for traversing source code.
//!
//! The lexer reads its input through the [`Source`] trait. This module
//! provides the in-memory implementation, [`Cursor`]; the stream-backed one
//! lives in [`crate::replay`]. Both track the byte offset and the 1-based
//! line and column of the next unread character.

/// Input the lexer can scan.
///
/// Positions are absolute byte offsets from the start of the input.
/// Lookahead beyond the end yields `None`.
pub trait Source {
    /// Returns the byte `offset` positions ahead of the cursor without
    /// consuming anything.
    fn peek_byte(&mut self, offset: usize) -> Option<u8>;

    /// Consumes and returns the current byte.
    fn bump(&mut self) -> Option<u8>;

    /// Byte offset of the next unread byte.
    fn position(&self) -> usize;

    /// Line of the next unread character (1-based).
    fn line(&self) -> u32;

    /// Column of the next unread character (1-based, in characters).
    fn column(&self) -> u32;

    /// Saves the current state.
    ///
    /// Every snapshot must be handed back to [`Source::restore`].
    fn snapshot(&mut self) -> SourceSnapshot;

    /// Rewinds to a state saved by [`Source::snapshot`].
    fn restore(&mut self, snapshot: SourceSnapshot);

    /// Takes the read error that ended the input early, if any.
    fn take_error(&mut self) -> Option<std::io::Error> {
        None
    }

    /// Returns the current byte without consuming it.
    #[inline]
    fn current_byte(&mut self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    fn is_at_end(&mut self) -> bool {
        self.peek_byte(0).is_none()
    }
}

/// A saved source state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

/// Advances line/column bookkeeping past one consumed byte.
///
/// Continuation bytes of a multi-byte character do not move the column.
/// Both counters stop at `u32::MAX`.
#[inline]
pub(crate) fn track(line: &mut u32, column: &mut u32, byte: u8) {
    if byte == b'\n' {
        *line = line.saturating_add(1);
        *column = 1;
    } else if !crate::chars::is_continuation(byte) {
        *column = column.saturating_add(1);
    }
}

/// A cursor over an in-memory source string.
///
/// # Example
///
/// ```
/// use wafc_lex::cursor::{Cursor, Source};
///
/// let mut cursor = Cursor::new("var x = 42;");
/// assert_eq!(cursor.current_byte(), Some(b'v'));
/// cursor.bump();
/// assert_eq!(cursor.current_byte(), Some(b'a'));
/// assert_eq!(cursor.position(), 1);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the source text from the current position to the end.
    ///
    /// # Example
    ///
    /// ```
    /// use wafc_lex::cursor::{Cursor, Source};
    ///
    /// let mut cursor = Cursor::new("var x");
    /// for _ in 0..4 {
    ///     cursor.bump();
    /// }
    /// assert_eq!(cursor.remaining(), "x");
    /// ```
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }
}

impl<'a> Source for Cursor<'a> {
    #[inline]
    fn peek_byte(&mut self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<u8> {
        let byte = *self.source.as_bytes().get(self.position)?;
        self.position += 1;
        track(&mut self.line, &mut self.column, byte);
        Some(byte)
    }

    fn position(&self) -> usize {
        self.position
    }

    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }

    fn snapshot(&mut self) -> SourceSnapshot {
        SourceSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, snapshot: SourceSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
