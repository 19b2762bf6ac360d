use combinator_common::{Checkpoint, EndOfInput, ParseError, Position};
use std::sync::Arc;

/// A backtracking input stream over Unicode scalar values.
///
/// The source is decoded once into a shared scalar buffer; the only mutable
/// state is the read index and its tracked [`Position`]. Backtracking saves
/// and restores that index through a [`Checkpoint`].
#[derive(Debug, Clone)]
pub struct InputStream {
    buffer: Arc<[char]>,
    current: usize,
    position: Position,
}

impl InputStream {
    /// Creates a new stream from the input text.
    pub fn new<S: AsRef<str>>(input: S) -> Self {
        let buffer: Arc<[char]> = input.as_ref().chars().collect();
        Self::with_arc(buffer)
    }

    /// Creates a stream from an already decoded scalar buffer.
    pub fn with_arc(buffer: Arc<[char]>) -> Self {
        Self {
            buffer,
            current: 0,
            position: Position::new(),
        }
    }

    /// Decodes raw bytes into a stream.
    ///
    /// Invalid UTF-8 is a hard error carrying the byte offset of the first
    /// invalid sequence.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes).map_err(|err| ParseError::Decode {
            offset: err.valid_up_to(),
        })?;
        Ok(Self::new(text))
    }

    /// Total number of scalar values in the stream.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the stream holds no scalar values at all.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the current scalar index.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Number of scalar values left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.current
    }

    /// Returns true if the stream is at the end of the input.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next scalar value without advancing the stream.
    pub fn peek(&self) -> Result<char, EndOfInput> {
        self.buffer.get(self.current).copied().ok_or(EndOfInput)
    }

    /// Returns the next `n` scalar values as text without advancing.
    ///
    /// Fails with [`EndOfInput`] when fewer than `n` values remain.
    pub fn lookahead(&self, n: usize) -> Result<String, EndOfInput> {
        if n > self.remaining() {
            return Err(EndOfInput);
        }
        Ok(self.buffer[self.current..self.current + n].iter().collect())
    }

    /// Returns true if the upcoming scalar values spell out `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        let mut upcoming = self.buffer[self.current..].iter();
        text.chars().all(|ch| upcoming.next() == Some(&ch))
    }

    /// Advances the stream by one scalar value.
    fn bump(&mut self) -> Option<char> {
        let ch = self.buffer.get(self.current).copied()?;
        self.position.advance(ch);
        self.current += 1;
        Some(ch)
    }

    /// Advances the stream by `n` scalar values.
    ///
    /// Advancing past the end clamps to the end of the stream; the return
    /// value is the number of scalar values actually consumed.
    pub fn advance(&mut self, n: usize) -> usize {
        let mut count = 0;
        for _ in 0..n {
            if self.bump().is_none() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Consumes scalar values while the predicate returns true.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut consumed = String::new();
        while let Ok(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.bump();
            consumed.push(ch);
        }
        consumed
    }

    /// Returns the remaining input from the current position.
    pub fn rest(&self) -> String {
        self.buffer[self.current..].iter().collect()
    }

    /// Creates a checkpoint that can be restored later.
    pub fn mark(&self) -> Checkpoint {
        Checkpoint::new(self.current, self.position)
    }

    /// Restores the stream to a previous checkpoint.
    ///
    /// A checkpoint past the end of this stream (one taken from a longer
    /// stream, say) clamps to the end, with the position recomputed.
    pub fn reset(&mut self, checkpoint: Checkpoint) {
        if checkpoint.index() > self.buffer.len() {
            self.current = 0;
            self.position = Position::new();
            self.advance(self.buffer.len());
            return;
        }
        self.current = checkpoint.index();
        self.position = checkpoint.position();
    }
}

impl From<&str> for InputStream {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InputStream {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
