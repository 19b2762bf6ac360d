//! Error types shared by the stream and the combinator engine.

use crate::Position;
use thiserror::Error;

/// Hard errors that abort an entire parse composition.
///
/// A parser that merely fails to recognise its input reports a soft
/// "not matched" instead; these variants are reserved for faults no
/// alternative can recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A block comment was opened but the end marker never appeared.
    #[error("unterminated block comment starting at {start}")]
    UnterminatedComment { start: Position },

    /// The raw input is not valid UTF-8.
    #[error("invalid UTF-8 at byte offset {offset}")]
    Decode { offset: usize },
}

impl ParseError {
    /// Returns the source position the error refers to, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnterminatedComment { start } => Some(*start),
            ParseError::Decode { .. } => None,
        }
    }
}

/// Returned by stream queries that run past the last scalar value.
///
/// This is an ordinary condition, not a hard error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("end of input")]
pub struct EndOfInput;
