use crate::parser::{BoxedParser, Parser};
use std::fmt;

/// Per-language configuration consumed by the comment parsers.
///
/// A `Spec` is immutable once built and shared by reference for a whole
/// parse session. Leaving a marker out disables that comment form:
/// block comments need both a start and an end marker.
#[derive(Default)]
pub struct Spec {
    block_start: Option<String>,
    block_end: Option<String>,
    line_comment: Option<BoxedParser>,
}

impl Spec {
    /// Starts building a specification with every comment form disabled.
    pub fn builder() -> SpecBuilder {
        SpecBuilder::default()
    }

    /// Returns the `(start, end)` block comment markers when both are set.
    pub fn block_comment(&self) -> Option<(&str, &str)> {
        match (self.block_start.as_deref(), self.block_end.as_deref()) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some((start, end))
            }
            _ => None,
        }
    }

    /// Returns the parser recognising a line comment marker, if any.
    pub fn line_comment(&self) -> Option<&dyn Parser> {
        self.line_comment.as_deref()
    }
}

impl fmt::Debug for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spec")
            .field("block_start", &self.block_start)
            .field("block_end", &self.block_end)
            .field("line_comment", &self.line_comment.is_some())
            .finish()
    }
}

/// Builder for [`Spec`].
#[derive(Default)]
pub struct SpecBuilder {
    spec: Spec,
}

impl SpecBuilder {
    /// Sets the block comment start and end markers.
    pub fn block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.spec.block_start = Some(start.into());
        self.spec.block_end = Some(end.into());
        self
    }

    /// Sets only the block comment start marker.
    pub fn block_comment_start(mut self, start: impl Into<String>) -> Self {
        self.spec.block_start = Some(start.into());
        self
    }

    /// Sets only the block comment end marker.
    pub fn block_comment_end(mut self, end: impl Into<String>) -> Self {
        self.spec.block_end = Some(end.into());
        self
    }

    /// Sets the parser that recognises the start of a line comment.
    pub fn line_comment<P>(mut self, recognizer: P) -> Self
    where
        P: Parser + 'static,
    {
        self.spec.line_comment = Some(recognizer.boxed());
        self
    }

    pub fn build(self) -> Spec {
        self.spec
    }
}
