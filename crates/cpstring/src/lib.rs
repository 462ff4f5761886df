//! A UTF-8 string that can be indexed, sliced and truncated by Unicode code
//! point instead of by byte.
//!
//! [`CodePointString`] decodes its input once, records the starting byte of
//! every code point, and afterwards answers every positional query with the
//! original encoded bytes. Out-of-range queries return `None` rather than
//! panicking, and an empty result (`Some("")`) is kept distinct from an absent
//! one.
//!
//! ```rust
//! use cpstring::{BStr, CodePointString};
//!
//! let mut s = CodePointString::new("caf\u{e9}s");
//! assert_eq!(s.len(), 5);
//! assert_eq!(s.char_at(3), Some(BStr::new("\u{e9}")));
//! assert_eq!(s.slice(0, Some(4)), Some(BStr::new("caf\u{e9}")));
//! assert_eq!(s.slice(4, None), Some(BStr::new("s")));
//! assert_eq!(s.char_at(5), None);
//!
//! s.truncate(3);
//! assert_eq!(s.as_bytes(), Some(BStr::new("caf")));
//! ```
//!
//! Code points are not grapheme clusters, and no normalization is applied:
//! `"cafe\u{301}s"` has six code points, the combining accent being one of
//! them.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod iter;
mod offsets;
mod options;
#[cfg(feature = "serde")]
mod serde_impl;
mod string;


pub use error::DecodeError;
pub use iter::Chars;
pub use options::{DecodeOptions, InvalidUtf8Mode};
pub use string::CodePointString;

pub use bstr::BStr;
