use thiserror::Error;

/// Invalid UTF-8 found under [`InvalidUtf8Mode::Reject`].
///
/// [`InvalidUtf8Mode::Reject`]: crate::InvalidUtf8Mode::Reject
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid UTF-8 sequence of {len} byte(s) at byte {offset} (code point {index})")]
pub struct DecodeError {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) index: usize,
}

impl DecodeError {
    /// Byte offset of the first invalid sequence, which is also the length of
    /// the prefix that decoded cleanly.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes of the maximal invalid subpart starting at
    /// [`offset`](Self::offset).
    #[must_use]
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// Number of valid code points preceding the invalid sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}
