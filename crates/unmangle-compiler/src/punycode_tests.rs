use crate::punycode::decode;

#[test]
fn all_basic_ascii_round_trips_unchanged() {
    let decoded = decode(b"ab-").unwrap();
    assert_eq!(decoded, "ab");
}

#[test]
fn empty_input_decodes_to_empty_string() {
    assert_eq!(decode(b"").unwrap(), "");
}

#[test]
fn rejects_digits_outside_the_base36_alphabet() {
    assert!(decode(b"!!!").is_err());
}

#[test]
fn non_ascii_basic_prefix_is_rejected() {
    assert!(decode("caf\u{e9}-".as_bytes()).is_err());
}
