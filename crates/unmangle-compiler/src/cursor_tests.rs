use crate::cursor::ByteCursor;

#[test]
fn peek_and_next_advance_one_byte_at_a_time() {
    let mut cursor = ByteCursor::new(b"abc");
    assert_eq!(cursor.peek(), b'a');
    assert_eq!(cursor.next(), Some(b'a'));
    assert_eq!(cursor.next(), Some(b'b'));
    assert_eq!(cursor.remaining(), 1);
}

#[test]
fn next_if_only_consumes_on_match() {
    let mut cursor = ByteCursor::new(b"Sq");
    assert!(!cursor.next_if(b'x'));
    assert!(cursor.next_if(b'S'));
    assert_eq!(cursor.peek(), b'q');
}

#[test]
fn next_if_prefix_consumes_whole_prefix_atomically() {
    let mut cursor = ByteCursor::new(b"_TTS_T");
    assert!(!cursor.next_if_prefix(b"_TTo"));
    assert!(cursor.next_if_prefix(b"_TTS"));
    assert_eq!(cursor.take_rest(), b"_T");
}

#[test]
fn slice_and_advance_do_not_copy_but_move_the_cursor() {
    let mut cursor = ByteCursor::new(b"3foo3bar");
    let three = cursor.slice(1);
    assert_eq!(three, b"3");
    cursor.advance(1);
    assert_eq!(cursor.slice(3), b"foo");
    cursor.advance(3);
    assert_eq!(cursor.remaining(), 4);
}

#[test]
fn has_at_least_reports_truncation() {
    let cursor = ByteCursor::new(b"ab");
    assert!(cursor.has_at_least(2));
    assert!(!cursor.has_at_least(3));
}
