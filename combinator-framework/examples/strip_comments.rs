//! Splits a small config-like source into values, skipping comments.
//!
//! Run with `RUST_LOG=trace` to watch the combinators work.

use combinator_framework::{
    all, any, literal, many, parser_fn, skip_trivia, InputStream, Outcome, ParseError,
    ParseState, Parser, Spec, Value,
};
use tracing_subscriber::EnvFilter;

/// Matches one or more ASCII alphanumeric scalar values.
fn word() -> impl Parser {
    parser_fn(|state| {
        let consumed = state
            .input_mut()
            .consume_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        if consumed.is_empty() {
            Outcome::NotMatched
        } else {
            Outcome::Matched(Value::Text(consumed))
        }
    })
}

fn main() -> Result<(), ParseError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let spec = Spec::builder()
        .block_comment("/*", "*/")
        .line_comment(any![literal("//"), literal("#")])
        .build();

    let source = "\
# settings
name = demo      // inline note
/* multi
   line */
mode = fast
";

    let entry = all![skip_trivia(), word(), skip_trivia(), literal("="), skip_trivia(), word()];
    let entries = many(entry);

    let mut input = InputStream::new(source);
    let mut state = ParseState::new(&mut input, &spec);

    match entries.parse(&mut state).into_result()? {
        Some(Value::Sequence(values)) => {
            for value in values {
                println!("value: {}", value.flatten());
            }
        }
        Some(other) => println!("unexpected result: {other:?}"),
        None => println!("no entries"),
    }
    skip_trivia().parse(&mut state).into_result()?;
    println!("fully consumed: {}", state.is_eof());

    Ok(())
}
