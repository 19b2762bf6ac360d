use crate::value::Value;
use combinator_common::ParseError;

/// The result of invoking a parser.
///
/// `NotMatched` is a soft failure: the input position is left exactly as it
/// was found and a caller may try something else. `Error` is a hard failure
/// that every combinator propagates unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The parser recognised its input and consumed it.
    Matched(Value),
    /// The parser did not recognise the input at the current position.
    NotMatched,
    /// An unrecoverable fault aborting the whole composition.
    Error(ParseError),
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched(_))
    }

    pub fn is_not_matched(&self) -> bool {
        matches!(self, Outcome::NotMatched)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Returns the matched value, discarding soft and hard failures alike.
    pub fn matched(self) -> Option<Value> {
        match self {
            Outcome::Matched(value) => Some(value),
            Outcome::NotMatched | Outcome::Error(_) => None,
        }
    }

    /// Converts into a `Result` so hard errors can be propagated with `?`.
    pub fn into_result(self) -> Result<Option<Value>, ParseError> {
        match self {
            Outcome::Matched(value) => Ok(Some(value)),
            Outcome::NotMatched => Ok(None),
            Outcome::Error(err) => Err(err),
        }
    }
}

impl From<ParseError> for Outcome {
    fn from(err: ParseError) -> Self {
        Outcome::Error(err)
    }
}
