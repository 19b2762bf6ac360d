use crate::spec::Spec;
use combinator_common::Checkpoint;
use scalar_stream::InputStream;

/// The state threaded through every parser invocation.
///
/// Pairs the input stream of one parse session with the language
/// [`Spec`] that configures comment syntax. The exclusive borrow of the
/// stream keeps a session from being shared.
#[derive(Debug)]
pub struct ParseState<'a> {
    input: &'a mut InputStream,
    spec: &'a Spec,
}

impl<'a> ParseState<'a> {
    pub fn new(input: &'a mut InputStream, spec: &'a Spec) -> Self {
        Self { input, spec }
    }

    /// Returns a reference to the input stream.
    pub fn input(&self) -> &InputStream {
        &*self.input
    }

    /// Returns a mutable reference to the input stream.
    pub fn input_mut(&mut self) -> &mut InputStream {
        &mut *self.input
    }

    /// Returns the specification for this session.
    ///
    /// The reference outlives the borrow of `self`, so a parser taken from
    /// the spec can be run against this same state.
    pub fn spec(&self) -> &'a Spec {
        self.spec
    }

    /// Creates a checkpoint of the current input position.
    pub fn mark(&self) -> Checkpoint {
        self.input.mark()
    }

    /// Restores the input to a checkpoint.
    pub fn reset(&mut self, checkpoint: Checkpoint) {
        self.input.reset(checkpoint);
    }

    /// Returns true if the whole input has been consumed.
    pub fn is_eof(&self) -> bool {
        self.input.is_eof()
    }
}
