#![no_main]
use arbitrary::Arbitrary;
use cpstring::{CodePointString, DecodeOptions, InvalidUtf8Mode};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    // Low two bits pick the invalid UTF-8 policy.
    flags: u8,
    // Code point ranges to slice, interpreted modulo `len + 2`.
    ranges: Vec<(u16, Option<u16>)>,
    truncate_to: u16,
    text: Vec<u8>,
}

fn check(input: Input) {
    let mode = match input.flags & 3 {
        0 => InvalidUtf8Mode::ReplaceEachByte,
        1 => InvalidUtf8Mode::ReplaceMaximalSubpart,
        _ => InvalidUtf8Mode::Reject,
    };
    let options = DecodeOptions { invalid_utf8: mode };
    let mut s = match CodePointString::with_options(&input.text, options) {
        Ok(s) => s,
        Err(err) => {
            assert_eq!(mode, InvalidUtf8Mode::Reject);
            assert!(std::str::from_utf8(&input.text[..err.offset()]).is_ok());
            assert!(std::str::from_utf8(&input.text).is_err());
            return;
        }
    };
    s.assert_invariants();

    // Round trip and length agreement.
    match s.as_bytes() {
        Some(bytes) => assert_eq!(&**bytes, input.text.as_slice()),
        None => assert!(input.text.is_empty()),
    }
    if let Ok(text) = std::str::from_utf8(&input.text) {
        assert_eq!(s.len(), text.chars().count());
    }
    assert_eq!(s.chars().len(), s.len());

    let len = s.len();
    let bound = len + 2;
    for (start, end) in input.ranges {
        let start = usize::from(start) % bound;
        let end = end.map(|end| usize::from(end) % bound);
        match s.slice(start, end) {
            None => assert!(start >= len),
            Some(bytes) => {
                assert!(start < len);
                let resolved = end.map_or(len, |end| end.min(len));
                if resolved <= start {
                    assert!(bytes.is_empty());
                } else {
                    let from = s.byte_offset(start).unwrap();
                    let to = s.byte_offset(resolved).unwrap();
                    assert_eq!(&**bytes, &input.text[from..to]);
                }
            }
        }
        if start < len {
            assert_eq!(s.char_at(start), s.slice(start, Some(start + 1)));
        } else {
            assert_eq!(s.char_at(start), None);
        }
    }

    let keep = usize::from(input.truncate_to) % bound;
    let expected = s
        .slice(0, Some(keep))
        .map(|b| b.to_vec())
        .filter(|b| !b.is_empty());
    s.truncate(keep);
    s.assert_invariants();
    assert_eq!(s.len(), keep.min(len));
    assert_eq!(s.as_bytes().map(|b| b.to_vec()), expected);

    let snapshot = s.clone();
    s.truncate(keep);
    assert_eq!(s, snapshot);
}

fuzz_target!(|input: Input| check(input));
