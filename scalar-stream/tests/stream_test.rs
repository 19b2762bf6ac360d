use proptest::prelude::*;
use scalar_stream::{Checkpoint, EndOfInput, InputStream, ParseError, Position};

#[test]
fn test_stream_new() {
    let stream = InputStream::new("hello");
    assert_eq!(stream.offset(), 0);
    assert_eq!(stream.len(), 5);
    assert_eq!(stream.position(), Position::new());
    assert!(!stream.is_eof());
}

#[test]
fn test_stream_peek() {
    let stream = InputStream::new("hello");
    assert_eq!(stream.peek(), Ok('h'));
    assert_eq!(stream.offset(), 0); // Should not advance
}

#[test]
fn test_stream_empty_string() {
    let mut stream = InputStream::new("");
    assert!(stream.is_empty());
    assert!(stream.is_eof());
    assert_eq!(stream.peek(), Err(EndOfInput));
    assert_eq!(stream.lookahead(0), Ok(String::new()));
    assert_eq!(stream.lookahead(1), Err(EndOfInput));
    assert_eq!(stream.advance(1), 0);
}

#[test]
fn test_stream_round_trip_unicode() {
    let text = "tes†ing mitä";
    let mut stream = InputStream::new(text);
    let mut out = String::new();
    while let Ok(ch) = stream.peek() {
        stream.advance(1);
        out.push(ch);
    }
    assert_eq!(out, text);
    assert!(stream.is_eof());
}

#[test]
fn test_stream_lookahead_multibyte() {
    let mut stream = InputStream::new("tes†ing mitä");
    stream.advance(1);
    assert_eq!(stream.lookahead(5).as_deref(), Ok("es†in"));
}

#[test]
fn test_stream_lookahead_boundary() {
    let text = "tes†ing mitä";
    let stream = InputStream::new(text);
    assert_eq!(stream.len(), 12);
    assert_eq!(stream.lookahead(12).as_deref(), Ok(text));
    assert_eq!(stream.lookahead(13), Err(EndOfInput));
}

#[test]
fn test_stream_lookahead_does_not_advance() {
    let stream = InputStream::new("你好世界");
    assert_eq!(stream.lookahead(2).as_deref(), Ok("你好"));
    assert_eq!(stream.lookahead(2).as_deref(), Ok("你好"));
    assert_eq!(stream.offset(), 0);
}

#[test]
fn test_stream_advance_clamps_at_end() {
    let mut stream = InputStream::new("hi");
    assert_eq!(stream.advance(5), 2);
    assert!(stream.is_eof());
    assert_eq!(stream.offset(), 2);
    assert_eq!(stream.advance(1), 0);
}

#[test]
fn test_stream_position_tracking() {
    let mut stream = InputStream::new("a\nb\nc");

    assert_eq!(stream.position().line, 1);
    assert_eq!(stream.position().column, 1);
    stream.advance(1); // 'a'
    assert_eq!(stream.position().column, 2);

    stream.advance(1); // '\n'
    assert_eq!(stream.position().line, 2);
    assert_eq!(stream.position().column, 1);

    stream.advance(2); // 'b', '\n'
    assert_eq!(stream.position(), Position::at(3, 1, 4));
}

#[test]
fn test_stream_mark_reset() {
    let mut stream = InputStream::new("hello\nworld");
    stream.advance(2);
    let checkpoint = stream.mark();

    stream.advance(5);
    assert_eq!(stream.peek(), Ok('o'));
    assert_eq!(stream.position().line, 2);

    stream.reset(checkpoint);
    assert_eq!(stream.offset(), 2);
    assert_eq!(stream.position(), Position::at(1, 3, 2));
    assert_eq!(stream.peek(), Ok('l'));
}

#[test]
fn test_stream_reset_out_of_range_clamps() {
    let mut stream = InputStream::new("a\nb");
    stream.reset(Checkpoint::new(10, Position::new()));
    assert_eq!(stream.offset(), 3);
    assert_eq!(stream.remaining(), 0);
    assert!(stream.is_eof());
    assert_eq!(stream.position(), Position::at(2, 2, 3));
    assert_eq!(stream.lookahead(1), Err(EndOfInput));
    assert_eq!(stream.lookahead(0), Ok(String::new()));
}

#[test]
fn test_stream_consume_while() {
    let mut stream = InputStream::new("hello world");
    assert_eq!(stream.consume_while(|c| c.is_alphabetic()), "hello");
    assert_eq!(stream.peek(), Ok(' '));
    assert_eq!(stream.consume_while(|c| c.is_alphabetic()), "");
    assert_eq!(stream.rest(), " world");
    assert_eq!(stream.remaining(), 6);
}

#[test]
fn test_stream_from_utf8() {
    let stream = InputStream::from_utf8("mitä".as_bytes()).unwrap();
    assert_eq!(stream.len(), 4);

    let err = InputStream::from_utf8(&[b'a', b'b', 0xff, b'c']).unwrap_err();
    assert_eq!(err, ParseError::Decode { offset: 2 });
}

proptest! {
    #[test]
    fn round_trip_reproduces_input(text in any::<String>()) {
        let mut stream = InputStream::new(&text);
        let mut out = String::new();
        while let Ok(ch) = stream.peek() {
            prop_assert_eq!(stream.advance(1), 1);
            out.push(ch);
        }
        prop_assert_eq!(out, text);
    }

    #[test]
    fn lookahead_is_idempotent(text in any::<String>(), skip in 0..8usize, n in 0..8usize) {
        let mut stream = InputStream::new(&text);
        stream.advance(skip);
        let offset = stream.offset();
        prop_assert_eq!(stream.lookahead(n), stream.lookahead(n));
        prop_assert_eq!(stream.offset(), offset);
    }

    #[test]
    fn lookahead_whole_remaining(text in any::<String>()) {
        let stream = InputStream::new(&text);
        let len = text.chars().count();
        prop_assert_eq!(stream.lookahead(len), Ok(text.clone()));
        prop_assert_eq!(stream.lookahead(len + 1), Err(EndOfInput));
    }
}
