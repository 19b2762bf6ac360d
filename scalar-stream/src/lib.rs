pub mod stream;

pub use combinator_common::{Checkpoint, EndOfInput, ParseError, Position};
pub use stream::InputStream;
