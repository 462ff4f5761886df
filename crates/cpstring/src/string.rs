use alloc::{borrow::Cow, string::String, vec::Vec};
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, RangeBounds},
};

use bstr::{BStr, ByteSlice};

use crate::{Chars, DecodeError, DecodeOptions, offsets};

/// An owned UTF-8 string indexed by code point.
///
/// The input bytes are kept verbatim next to a table holding the starting
/// byte of every code point, so [`char_at`](Self::char_at),
/// [`slice`](Self::slice) and [`len`](Self::len) are O(1) and always return the
/// original encoding.
///
/// Absent and empty results are different things: an out-of-range query is
/// `None`, while an in-range empty slice is `Some("")`. An empty string has no
/// bytes at all, so [`as_bytes`](Self::as_bytes) returns `None` for it.
#[derive(Clone, Default)]
pub struct CodePointString {
    buffer: Vec<u8>,
    /// `offsets[i]` is the byte where code point `i` starts.
    offsets: Vec<usize>,
}

impl CodePointString {
    /// Decode `text` and build its offset table.
    ///
    /// Never fails: each byte that does not start a valid UTF-8 sequence is
    /// indexed as a code point of its own, and the buffer keeps it as is.
    #[must_use]
    pub fn new(text: impl AsRef<[u8]>) -> Self {
        Self::from_vec(text.as_ref().to_vec())
    }

    /// Like [`new`](Self::new), with an explicit invalid UTF-8 policy.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for the first invalid sequence when
    /// `options.invalid_utf8` is
    /// [`InvalidUtf8Mode::Reject`](crate::InvalidUtf8Mode::Reject). The other modes
    /// never fail.
    pub fn with_options(
        text: impl AsRef<[u8]>,
        options: DecodeOptions,
    ) -> Result<Self, DecodeError> {
        let buffer = text.as_ref().to_vec();
        let offsets = offsets::build(&buffer, options.invalid_utf8)?;
        Ok(Self { buffer, offsets })
    }

    fn from_vec(buffer: Vec<u8>) -> Self {
        let offsets = offsets::build_lossy(&buffer, false);
        Self { buffer, offsets }
    }

    /// Number of code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the string holds no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The whole buffer, or `None` if the string is empty.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&BStr> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.as_bstr())
        }
    }

    /// Consume the string and return its buffer, or `None` if it is empty.
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer)
        }
    }

    /// The encoded bytes of code point `index`, or `None` past the end.
    ///
    /// ```rust
    /// use cpstring::{BStr, CodePointString};
    ///
    /// let s = CodePointString::new("\u{FDFD}");
    /// assert_eq!(s.char_at(0), Some(BStr::new(&[239u8, 183, 189])));
    /// assert_eq!(s.char_at(1), None);
    /// ```
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<&BStr> {
        let start = *self.offsets.get(index)?;
        Some(self.buffer[start..self.byte_end(index + 1)].as_bstr())
    }

    /// The encoded bytes of code points `[start, end)`.
    ///
    /// `end = None` reads through the end of the string, and an `end` past
    /// the end is clamped to it.
    ///
    /// Returns `None` if `start` is not a valid index, even when the string
    /// is empty. An in-range `start` with `end <= start` returns `Some("")`.
    ///
    /// ```rust
    /// use cpstring::{BStr, CodePointString};
    ///
    /// let s = CodePointString::new("caf\u{e9}s");
    /// assert_eq!(s.slice(1, Some(3)), Some(BStr::new("af")));
    /// assert_eq!(s.slice(3, None), Some(BStr::new("\u{e9}s")));
    /// assert_eq!(s.slice(0, Some(13)), s.as_bytes());
    /// assert_eq!(s.slice(2, Some(2)), Some(BStr::new("")));
    /// assert_eq!(s.slice(6, None), None);
    /// ```
    #[must_use]
    pub fn slice(&self, start: usize, end: Option<usize>) -> Option<&BStr> {
        let from = *self.offsets.get(start)?;
        let end = end.map_or(self.len(), |end| end.min(self.len()));
        if end <= start {
            return Some(self.buffer[from..from].as_bstr());
        }
        Some(self.buffer[from..self.byte_end(end)].as_bstr())
    }

    /// Range-syntax form of [`slice`](Self::slice).
    ///
    /// ```rust
    /// use cpstring::{BStr, CodePointString};
    ///
    /// let s = CodePointString::new("αβγδ");
    /// assert_eq!(s.get(1..3), Some(BStr::new("βγ")));
    /// assert_eq!(s.get(2..), Some(BStr::new("γδ")));
    /// assert_eq!(s.get(..=0), Some(BStr::new("α")));
    /// assert_eq!(s.get(4..), None);
    /// ```
    #[must_use]
    pub fn get<R: RangeBounds<usize>>(&self, range: R) -> Option<&BStr> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.checked_add(1)?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => Some(end.saturating_add(1)),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => None,
        };
        self.slice(start, end)
    }

    /// Byte position where code point `index` starts.
    ///
    /// `index == len()` gives the buffer length, so the result can close a
    /// byte range. Anything larger is `None`.
    #[must_use]
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        match index.cmp(&self.len()) {
            core::cmp::Ordering::Less => Some(self.offsets[index]),
            core::cmp::Ordering::Equal => Some(self.buffer.len()),
            core::cmp::Ordering::Greater => None,
        }
    }

    /// Keep only the first `len` code points.
    ///
    /// A `len` at or past the current length leaves the string unchanged.
    /// Truncating to zero releases both allocations and leaves the same state
    /// as `CodePointString::new("")`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        if len == 0 {
            self.buffer = Vec::new();
            self.offsets = Vec::new();
            return;
        }
        self.buffer.truncate(self.offsets[len]);
        self.offsets.truncate(len);
    }

    /// Iterate over the encoded bytes of each code point.
    pub fn chars(&self) -> Chars<'_> {
        Chars::new(&self.buffer, &self.offsets)
    }

    /// The text with invalid sequences replaced by U+FFFD.
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        self.buffer.to_str_lossy()
    }

    /// End byte of the code points before `index`.
    fn byte_end(&self, index: usize) -> usize {
        self.offsets.get(index).copied().unwrap_or(self.buffer.len())
    }

    /// Panic if the offset table disagrees with the buffer.
    #[cfg(any(test, feature = "fuzzing"))]
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        assert_eq!(self.buffer.is_empty(), self.offsets.is_empty());
        if let Some(&first) = self.offsets.first() {
            assert_eq!(first, 0);
        }
        assert!(self.offsets.windows(2).all(|w| w[0] < w[1]));
        assert!(self.offsets.iter().all(|&o| o < self.buffer.len()));
    }
}

impl fmt::Debug for CodePointString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodePointString")
            .field("text", &self.buffer.as_bstr())
            .field("len", &self.len())
            .finish()
    }
}

impl fmt::Display for CodePointString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.buffer.as_bstr(), f)
    }
}

// Offsets are derived from the buffer, so the buffer alone decides identity.
impl PartialEq for CodePointString {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Eq for CodePointString {}

impl Hash for CodePointString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}

impl PartialEq<str> for CodePointString {
    fn eq(&self, other: &str) -> bool {
        self.buffer == other.as_bytes()
    }
}

impl PartialEq<&str> for CodePointString {
    fn eq(&self, other: &&str) -> bool {
        self.buffer == other.as_bytes()
    }
}

impl PartialEq<[u8]> for CodePointString {
    fn eq(&self, other: &[u8]) -> bool {
        self.buffer == other
    }
}

impl From<&str> for CodePointString {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CodePointString {
    fn from(text: String) -> Self {
        Self::from_vec(text.into_bytes())
    }
}

impl From<&[u8]> for CodePointString {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for CodePointString {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl<'a> IntoIterator for &'a CodePointString {
    type Item = &'a BStr;
    type IntoIter = Chars<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars()
    }
}
