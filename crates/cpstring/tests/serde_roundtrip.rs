#![expect(missing_docs)]

mod common;

use cpstring::CodePointString;

use crate::common::{CAFES, OLYNTHIAC};

#[test]
fn text_serializes_as_string() {
    let s = CodePointString::new(CAFES);
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"caf\u{e9}s\"");

    let back: CodePointString = serde_json::from_str("\"caf\u{e9}s\"").unwrap();
    assert_eq!(back, s);
    assert_eq!(back.len(), 5);
}

#[test]
fn empty_serializes_as_empty_string() {
    let s = CodePointString::default();
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"\"");

    let back: CodePointString = serde_json::from_str("\"\"").unwrap();
    assert!(back.is_empty());
    assert_eq!(back.as_bytes(), None);
}

#[test]
fn invalid_utf8_serializes_as_bytes() {
    let s = CodePointString::new(b"a\xFF");
    assert_eq!(serde_json::to_string(&s).unwrap(), "[97,255]");

    let back: CodePointString = serde_json::from_str("[97,255]").unwrap();
    assert_eq!(back, s);
    assert_eq!(back.len(), 2);
}

#[test]
fn long_text_roundtrip() {
    let s = CodePointString::new(OLYNTHIAC);
    let json = serde_json::to_string(&s).unwrap();
    let back: CodePointString = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
    assert_eq!(back.len(), s.len());
}
