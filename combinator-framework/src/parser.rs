use crate::outcome::Outcome;
use crate::state::ParseState;

/// A unit of parsing behavior.
///
/// Given a [`ParseState`], a parser either matches and advances the input,
/// reports a soft `NotMatched` with the input untouched, or returns a hard
/// error. Every `Fn(&mut ParseState<'_>) -> Outcome` closure is a parser, so
/// combinators are ordinary functions returning closures.
pub trait Parser {
    /// Attempts to recognise input at the current position.
    fn parse(&self, state: &mut ParseState<'_>) -> Outcome;

    /// Erases the parser type so it can live in a heterogeneous list.
    fn boxed(self) -> BoxedParser
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased parser, as taken by [`all`](fn@crate::all) and [`any`](fn@crate::any).
pub type BoxedParser = Box<dyn Parser>;

impl Parser for BoxedParser {
    fn parse(&self, state: &mut ParseState<'_>) -> Outcome {
        (**self).parse(state)
    }
}

impl<F> Parser for F
where
    F: Fn(&mut ParseState<'_>) -> Outcome,
{
    fn parse(&self, state: &mut ParseState<'_>) -> Outcome {
        self(state)
    }
}

/// Builds a parser from a closure.
///
/// This only pins down the closure signature so that it is accepted for
/// every `ParseState` lifetime.
pub fn parser_fn<F>(f: F) -> F
where
    F: Fn(&mut ParseState<'_>) -> Outcome,
{
    f
}
