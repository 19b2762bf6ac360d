use crate::Position;

/// A saved input stream location for backtracking.
///
/// Restoring a checkpoint rewinds both the scalar index and the tracked
/// line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// Scalar value index at this checkpoint.
    index: usize,
    /// The position in the source at this checkpoint.
    position: Position,
}

impl Checkpoint {
    /// Creates a new checkpoint with the given index and position.
    pub fn new(index: usize, position: Position) -> Self {
        Self { index, position }
    }

    /// Returns the scalar value index stored in this checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the position stored in this checkpoint.
    pub fn position(&self) -> Position {
        self.position
    }
}
