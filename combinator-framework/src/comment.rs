//! Comment recognition driven by the session's [`Spec`](crate::Spec).

use crate::combinators::{any, many, match_literal, optional};
use crate::outcome::Outcome;
use crate::parser::{parser_fn, Parser};
use crate::value::Value;
use combinator_common::ParseError;
use tracing::{trace, warn};

fn is_line_terminator(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Matches a line comment and returns its body.
///
/// The spec's line comment recognizer decides where a comment starts; the
/// body runs up to, but not including, the next line terminator or the end
/// of input. The marker itself is not part of the result. Without a
/// recognizer this never matches.
pub fn line_comment() -> impl Parser {
    parser_fn(|state| {
        let Some(recognizer) = state.spec().line_comment() else {
            return Outcome::NotMatched;
        };
        let checkpoint = state.mark();
        match recognizer.parse(state) {
            Outcome::Matched(_) => {}
            Outcome::NotMatched => {
                state.reset(checkpoint);
                return Outcome::NotMatched;
            }
            err @ Outcome::Error(_) => return err,
        }
        let body = state
            .input_mut()
            .consume_while(|ch| !is_line_terminator(ch));
        trace!(offset = checkpoint.index(), len = body.chars().count(), "line comment");
        Outcome::Matched(Value::Text(body))
    })
}

/// Matches a block comment and returns the text between its markers.
///
/// Once the start marker has matched the parse is committed: reaching the
/// end of input before the end marker is a hard
/// [`ParseError::UnterminatedComment`] rather than a soft failure. Block
/// comments may span lines and do not nest.
pub fn block_comment() -> impl Parser {
    parser_fn(|state| {
        let Some((start, end)) = state.spec().block_comment() else {
            return Outcome::NotMatched;
        };
        let opened_at = state.input().position();
        let input = state.input_mut();
        if match_literal(input, start, start.chars().count()).is_none() {
            return Outcome::NotMatched;
        }

        let end_width = end.chars().count();
        let mut body = String::new();
        loop {
            if input.starts_with(end) {
                input.advance(end_width);
                trace!(offset = opened_at.offset, "block comment closed");
                return Outcome::Matched(Value::Text(body));
            }
            match input.peek() {
                Ok(ch) => {
                    input.advance(1);
                    body.push(ch);
                }
                Err(_) => {
                    warn!(start = %opened_at, "unterminated block comment");
                    return Outcome::Error(ParseError::UnterminatedComment { start: opened_at });
                }
            }
        }
    })
}

/// Matches either a block comment or a line comment.
pub fn comment() -> impl Parser {
    any(vec![block_comment().boxed(), line_comment().boxed()])
}

/// Matches one or more whitespace scalar values.
pub fn whitespace() -> impl Parser {
    parser_fn(|state| {
        let consumed = state.input_mut().consume_while(char::is_whitespace);
        if consumed.is_empty() {
            Outcome::NotMatched
        } else {
            Outcome::Matched(Value::Text(consumed))
        }
    })
}

/// Skips any run of whitespace and comments.
///
/// Always matches unless a block comment is left open.
pub fn skip_trivia() -> impl Parser {
    optional(many(any(vec![whitespace().boxed(), comment().boxed()])))
}
