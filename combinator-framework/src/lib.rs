//! Parser combinators over a backtracking Unicode scalar stream.
//!
//! Parsers are composed from a handful of primitives ([`literal`], [`all`](fn@all),
//! [`any`](fn@any), [`many`]) and run against a [`ParseState`] that pairs an
//! [`InputStream`] with a language [`Spec`] supplying comment syntax.
//!
//! ```
//! use combinator_framework::{all, line_comment, literal, InputStream, ParseState, Parser, Spec};
//!
//! let spec = Spec::builder().line_comment(literal("//")).build();
//! let mut input = InputStream::new("// hello\nrest");
//! let mut state = ParseState::new(&mut input, &spec);
//!
//! let comment = line_comment().parse(&mut state).matched().unwrap();
//! assert_eq!(comment, " hello");
//!
//! let rest = all![literal("\n"), literal("rest")].parse(&mut state);
//! assert!(rest.is_matched());
//! assert!(state.is_eof());
//! ```

pub mod combinators;
pub mod comment;
pub mod outcome;
pub mod parser;
pub mod spec;
pub mod state;
pub mod value;

pub use combinator_common::{Checkpoint, EndOfInput, ParseError, Position};
pub use combinators::{all, all_values, any, literal, many, optional};
pub use comment::{block_comment, comment, line_comment, skip_trivia, whitespace};
pub use outcome::Outcome;
pub use parser::{parser_fn, BoxedParser, Parser};
pub use scalar_stream::InputStream;
pub use spec::{Spec, SpecBuilder};
pub use state::ParseState;
pub use value::Value;
