//! Primitive and compositional combinators.
//!
//! Every combinator honors the same contract: a soft failure leaves the
//! input exactly where it was found, and a hard error is handed back to the
//! caller untouched, without resetting the input.

use crate::outcome::Outcome;
use crate::parser::{parser_fn, BoxedParser, Parser};
use crate::value::Value;
use scalar_stream::InputStream;
use tracing::{debug, trace};

/// Consumes `text` if the input continues with it.
///
/// `width` is the length of `text` in scalar values.
pub(crate) fn match_literal(input: &mut InputStream, text: &str, width: usize) -> Option<String> {
    match input.lookahead(width) {
        Ok(ahead) if ahead == text => {
            input.advance(width);
            Some(ahead)
        }
        _ => None,
    }
}

/// Matches `text` exactly.
///
/// Running out of input is a soft failure here, never a hard error.
pub fn literal(text: &str) -> impl Parser {
    let text = text.to_string();
    let width = text.chars().count();
    parser_fn(move |state| match match_literal(state.input_mut(), &text, width) {
        Some(matched) => {
            trace!(literal = %text, offset = state.input().offset(), "literal matched");
            Outcome::Matched(Value::Text(matched))
        }
        None => Outcome::NotMatched,
    })
}

/// Runs every parser in order and keeps the result of the last one.
///
/// Intermediate results are dropped, which makes it easy to skip a prefix
/// and keep the payload. If any parser does not match, the input is rewound
/// to where the sequence started. An empty sequence matches with
/// [`Value::empty`].
pub fn all(parsers: Vec<BoxedParser>) -> impl Parser {
    parser_fn(move |state| {
        let checkpoint = state.mark();
        let mut last = Value::empty();
        for parser in &parsers {
            match parser.parse(state) {
                Outcome::Matched(value) => last = value,
                Outcome::NotMatched => {
                    trace!(offset = checkpoint.index(), "sequence backtracked");
                    state.reset(checkpoint);
                    return Outcome::NotMatched;
                }
                err @ Outcome::Error(_) => return err,
            }
        }
        Outcome::Matched(last)
    })
}

/// Like [`all`](fn@all), but keeps every result as a [`Value::Sequence`].
pub fn all_values(parsers: Vec<BoxedParser>) -> impl Parser {
    parser_fn(move |state| {
        let checkpoint = state.mark();
        let mut values = Vec::with_capacity(parsers.len());
        for parser in &parsers {
            match parser.parse(state) {
                Outcome::Matched(value) => values.push(value),
                Outcome::NotMatched => {
                    state.reset(checkpoint);
                    return Outcome::NotMatched;
                }
                err @ Outcome::Error(_) => return err,
            }
        }
        Outcome::Matched(Value::Sequence(values))
    })
}

/// Tries each parser in order; the first match wins.
///
/// Later alternatives are never invoked once one has matched. A hard error
/// from any alternative aborts the rest.
pub fn any(parsers: Vec<BoxedParser>) -> impl Parser {
    parser_fn(move |state| {
        let checkpoint = state.mark();
        for parser in &parsers {
            match parser.parse(state) {
                Outcome::NotMatched => state.reset(checkpoint),
                outcome => return outcome,
            }
        }
        Outcome::NotMatched
    })
}

/// Applies `parser` as many times as it matches, collecting the results.
///
/// Repetition is one-or-more: zero matches is `NotMatched`. Wrap it in
/// [`optional`] for zero-or-more.
///
/// A match that consumes no input ends the loop as if it had not matched,
/// so a parser that always matches cannot spin forever. It is collected
/// only when it is the first match, making the result a one-element
/// sequence.
pub fn many<P>(parser: P) -> impl Parser
where
    P: Parser,
{
    parser_fn(move |state| {
        let mut values = Vec::new();
        loop {
            let before = state.input().offset();
            match parser.parse(state) {
                Outcome::Matched(value) => {
                    if state.input().offset() == before {
                        debug!(offset = before, "repetition stopped on a zero-width match");
                        if values.is_empty() {
                            values.push(value);
                        }
                        break;
                    }
                    values.push(value);
                }
                Outcome::NotMatched => break,
                err @ Outcome::Error(_) => return err,
            }
        }
        if values.is_empty() {
            Outcome::NotMatched
        } else {
            Outcome::Matched(Value::Sequence(values))
        }
    })
}

/// Matches `parser` or nothing.
///
/// When `parser` does not match, this still matches with [`Value::empty`].
pub fn optional<P>(parser: P) -> impl Parser
where
    P: Parser,
{
    parser_fn(move |state| match parser.parse(state) {
        Outcome::NotMatched => Outcome::Matched(Value::empty()),
        outcome => outcome,
    })
}

/// Builds an [`all`](fn@all) sequence from parsers of any type.
#[macro_export]
macro_rules! all {
    ($($parser:expr),* $(,)?) => {
        $crate::combinators::all(vec![$($crate::Parser::boxed($parser)),*])
    };
}

/// Builds an [`any`](fn@any) alternation from parsers of any type.
#[macro_export]
macro_rules! any {
    ($($parser:expr),* $(,)?) => {
        $crate::combinators::any(vec![$($crate::Parser::boxed($parser)),*])
    };
}
