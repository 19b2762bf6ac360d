//! Combinator Common
//!
//! Shared building blocks for the input stream and the combinator engine:
//! source positions, backtracking checkpoints and the error taxonomy.

pub mod checkpoint;
pub mod error;
pub mod position;

pub use checkpoint::Checkpoint;
pub use error::{EndOfInput, ParseError};
pub use position::Position;
