//! Stream-backed source with a replay buffer.
//!
//! [`ReplayBuffer`] reads from any [`Read`] implementation lazily, in chunks.
//! Bytes that have been read but not yet consumed wait in the buffer. While a
//! lookahead snapshot is outstanding, consumed bytes are kept as well, so a
//! restore can replay them without seeking or re-reading the stream. Once the
//! last snapshot is restored, consumed bytes are dropped again.

use std::collections::VecDeque;
use std::io::{self, Read};

use crate::config::DEFAULT_READ_CHUNK_SIZE;
use crate::cursor::{track, Source, SourceSnapshot};

/// A [`Source`] over a byte stream.
///
/// # Example
///
/// ```
/// use wafc_lex::cursor::Source;
/// use wafc_lex::replay::ReplayBuffer;
///
/// let mut source = ReplayBuffer::new("ab".as_bytes());
/// let snapshot = source.snapshot();
/// assert_eq!(source.bump(), Some(b'a'));
/// source.restore(snapshot);
/// assert_eq!(source.bump(), Some(b'a'));
/// assert_eq!(source.bump(), Some(b'b'));
/// assert_eq!(source.bump(), None);
/// ```
pub struct ReplayBuffer<R> {
    reader: R,

    /// Bytes starting at absolute offset `base`.
    buffer: VecDeque<u8>,

    /// Absolute offset of `buffer[0]`.
    base: usize,

    /// Absolute offset of the next unread byte. Always `>= base`.
    position: usize,

    line: u32,
    column: u32,

    /// Outstanding snapshots. Consumed bytes are retained while non-zero.
    pins: usize,

    /// Scratch space for a single `read` call.
    chunk: Vec<u8>,

    /// The reader returned end-of-file or failed.
    exhausted: bool,

    error: Option<io::Error>,
}

impl<R: Read> ReplayBuffer<R> {
    /// Creates a replay buffer reading 4 KiB at a time.
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_READ_CHUNK_SIZE)
    }

    /// Creates a replay buffer reading `chunk_size` bytes at a time.
    ///
    /// A zero chunk size is raised to one.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        Self {
            reader,
            buffer: VecDeque::new(),
            base: 0,
            position: 0,
            line: 1,
            column: 1,
            pins: 0,
            chunk: vec![0; chunk_size.max(1)],
            exhausted: false,
            error: None,
        }
    }

    /// Number of bytes currently held, consumed or not.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Reads until at least `len` bytes are buffered or the stream ends.
    fn fill(&mut self, len: usize) {
        while self.buffer.len() < len && !self.exhausted {
            match self.reader.read(&mut self.chunk) {
                Ok(0) => self.exhausted = true,
                Ok(n) => self.buffer.extend(&self.chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {},
                Err(e) => {
                    log::warn!(
                        "source read failed after {} bytes, treating as end of input: {}",
                        self.base + self.buffer.len(),
                        e
                    );
                    self.error = Some(e);
                    self.exhausted = true;
                },
            }
        }
    }

    /// Drops consumed bytes unless a snapshot still needs them.
    fn release(&mut self) {
        if self.pins == 0 {
            let consumed = self.position - self.base;
            self.buffer.drain(..consumed);
            self.base = self.position;
        }
    }
}

impl<R: Read> Source for ReplayBuffer<R> {
    fn peek_byte(&mut self, offset: usize) -> Option<u8> {
        let index = self.position - self.base + offset;
        self.fill(index + 1);
        self.buffer.get(index).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek_byte(0)?;
        self.position += 1;
        track(&mut self.line, &mut self.column, byte);
        self.release();
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
        self.pins += 1;
        SourceSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, snapshot: SourceSnapshot) {
        debug_assert!(snapshot.position >= self.base, "snapshot bytes were released");
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.pins = self.pins.saturating_sub(1);
        self.release();
    }

    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}
