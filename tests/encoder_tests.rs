//! Encoder Tests
//!
//! Tests for request framing, reply encoding, and the reply value helpers
//! (accessors and rendering).

use wiredis::{encode_command, encode_value, Value};

// =============================================================================
// Request Frame Tests
// =============================================================================

#[test]
fn test_encode_get_command() {
    assert_eq!(
        encode_command(&["get", "a"]),
        b"*2\r\n$3\r\nget\r\n$1\r\na\r\n"
    );
}

#[test]
fn test_encode_single_word() {
    assert_eq!(encode_command(&["ping"]), b"*1\r\n$4\r\nping\r\n");
}

#[test]
fn test_encode_empty_argument() {
    assert_eq!(
        encode_command(&["set", "k", ""]),
        b"*3\r\n$3\r\nset\r\n$1\r\nk\r\n$0\r\n\r\n"
    );
}

#[test]
fn test_encode_length_counts_bytes() {
    // "héllo" is five characters but six bytes on the wire.
    assert_eq!(
        encode_command(&["héllo"]),
        "*1\r\n$6\r\nhéllo\r\n".as_bytes()
    );
}

#[test]
fn test_encode_embedded_terminator_passes_through() {
    // No escaping: the length prefix covers the embedded CRLF, and content
    // correctness stays with the caller.
    assert_eq!(encode_command(&["a\r\nb"]), b"*1\r\n$4\r\na\r\nb\r\n");
}

#[test]
fn test_encode_owned_strings() {
    let args = vec!["echo".to_string(), "hi".to_string()];
    assert_eq!(encode_command(&args), b"*2\r\n$4\r\necho\r\n$2\r\nhi\r\n");
}

// =============================================================================
// Reply Frame Tests
// =============================================================================

#[test]
fn test_encode_scalar_replies() {
    assert_eq!(encode_value(&Value::SimpleString("OK".into())), b"+OK\r\n");
    assert_eq!(encode_value(&Value::Error("ERR nope".into())), b"-ERR nope\r\n");
    assert_eq!(encode_value(&Value::Integer(-7)), b":-7\r\n");
    assert_eq!(
        encode_value(&Value::BulkString("foobar".into())),
        b"$6\r\nfoobar\r\n"
    );
    assert_eq!(encode_value(&Value::Null), b"$-1\r\n");
    assert_eq!(encode_value(&Value::NullArray), b"*-1\r\n");
}

#[test]
fn test_encode_empty_array_reply() {
    assert_eq!(encode_value(&Value::Array(vec![])), b"*0\r\n");
}

#[test]
fn test_encode_nested_array_reply() {
    let value = Value::Array(vec![
        Value::SimpleString("test begin".into()),
        Value::Array(vec![
            Value::BulkString("sub".into()),
            Value::BulkString("array".into()),
        ]),
        Value::Null,
        Value::Integer(521),
    ]);

    assert_eq!(
        encode_value(&value),
        b"*4\r\n+test begin\r\n*2\r\n$3\r\nsub\r\n$5\r\narray\r\n$-1\r\n:521\r\n"
    );
}

// =============================================================================
// Value Accessor Tests
// =============================================================================

#[test]
fn test_as_str_covers_both_string_kinds() {
    assert_eq!(Value::SimpleString("OK".into()).as_str(), Some("OK"));
    assert_eq!(Value::BulkString("payload".into()).as_str(), Some("payload"));
    assert_eq!(Value::Integer(3).as_str(), None);
    assert_eq!(Value::Null.as_str(), None);
    assert_eq!(Value::Array(vec![]).as_str(), None);
}

#[test]
fn test_as_integer() {
    assert_eq!(Value::Integer(-42).as_integer(), Some(-42));
    assert_eq!(Value::BulkString("42".into()).as_integer(), None);
    assert_eq!(Value::Null.as_integer(), None);
}

#[test]
fn test_as_array() {
    let value = Value::Array(vec![Value::Integer(1), Value::Null]);
    assert_eq!(value.as_array(), Some(&[Value::Integer(1), Value::Null][..]));

    assert_eq!(Value::NullArray.as_array(), None);
    assert_eq!(Value::SimpleString("list".into()).as_array(), None);
}

#[test]
fn test_is_null_only_for_null_variants() {
    assert!(Value::Null.is_null());
    assert!(Value::NullArray.is_null());
    assert!(!Value::BulkString(String::new()).is_null());
    assert!(!Value::Array(vec![]).is_null());
    assert!(!Value::Integer(0).is_null());
}

// =============================================================================
// Display Rendering Tests
// =============================================================================

#[test]
fn test_display_scalars() {
    assert_eq!(Value::SimpleString("OK".into()).to_string(), "OK");
    assert_eq!(Value::Integer(42).to_string(), "(integer) 42");
    assert_eq!(Value::BulkString("hi".into()).to_string(), "\"hi\"");
    assert_eq!(Value::Null.to_string(), "(nil)");
    assert_eq!(Value::NullArray.to_string(), "(nil)");
    assert_eq!(
        Value::Error("ERR nope".into()).to_string(),
        "(error) ERR nope"
    );
}

#[test]
fn test_display_arrays() {
    assert_eq!(Value::Array(vec![]).to_string(), "(empty array)");

    let value = Value::Array(vec![
        Value::Integer(1),
        Value::Array(vec![
            Value::BulkString("a".into()),
            Value::BulkString("b".into()),
        ]),
    ]);
    assert_eq!(value.to_string(), "1) (integer) 1\n2) 1) \"a\"\n   2) \"b\"");
}
