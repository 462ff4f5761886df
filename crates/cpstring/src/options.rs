/// Configuration for decoding the input of a [`CodePointString`].
///
/// The defaults match [`CodePointString::new`], which never fails.
///
/// # Examples
///
/// ```rust
/// use cpstring::{CodePointString, DecodeOptions, InvalidUtf8Mode};
///
/// let options = DecodeOptions {
///     invalid_utf8: InvalidUtf8Mode::Reject,
/// };
/// assert!(CodePointString::with_options(b"ok", options).is_ok());
/// assert!(CodePointString::with_options(b"\xFFno", options).is_err());
/// ```
///
/// [`CodePointString`]: crate::CodePointString
/// [`CodePointString::new`]: crate::CodePointString::new
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How byte sequences that are not valid UTF-8 are indexed.
    ///
    /// The buffer itself is never rewritten; this only decides how many bytes
    /// each invalid code point spans, or whether construction fails.
    ///
    /// # Default
    ///
    /// [`InvalidUtf8Mode::ReplaceEachByte`]
    pub invalid_utf8: InvalidUtf8Mode,
}

/// Policy for invalid UTF-8 found while building the offset table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InvalidUtf8Mode {
    /// Every byte that does not start a valid sequence is its own code point.
    ///
    /// `b"\xE2\x82"` (a truncated three-byte sequence) indexes as two code
    /// points.
    #[default]
    ReplaceEachByte,
    /// Each maximal invalid subpart is one code point, as in the WHATWG
    /// decoder and `bstr`.
    ///
    /// `b"\xE2\x82"` indexes as one code point spanning two bytes.
    ReplaceMaximalSubpart,
    /// The first invalid sequence fails construction with a
    /// [`DecodeError`](crate::DecodeError).
    Reject,
}
