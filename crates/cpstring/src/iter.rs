use core::iter::FusedIterator;

use bstr::{BStr, ByteSlice};

/// Iterator over the code points of a [`CodePointString`], yielding each one
/// as its original encoded bytes.
///
/// Created by [`CodePointString::chars`].
///
/// [`CodePointString`]: crate::CodePointString
/// [`CodePointString::chars`]: crate::CodePointString::chars
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chars<'a> {
    buffer: &'a [u8],
    offsets: &'a [usize],
    /// Code point indices `[front, back)` not yet yielded.
    front: usize,
    back: usize,
}

impl<'a> Chars<'a> {
    pub(crate) fn new(buffer: &'a [u8], offsets: &'a [usize]) -> Self {
        Self {
            buffer,
            offsets,
            front: 0,
            back: offsets.len(),
        }
    }

    fn char_at(&self, index: usize) -> &'a BStr {
        let start = self.offsets[index];
        let end = self
            .offsets
            .get(index + 1)
            .copied()
            .unwrap_or(self.buffer.len());
        self.buffer[start..end].as_bstr()
    }
}

impl<'a> Iterator for Chars<'a> {
    type Item = &'a BStr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let ch = self.char_at(self.front);
        self.front += 1;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.char_at(self.back))
    }
}

impl ExactSizeIterator for Chars<'_> {}

impl FusedIterator for Chars<'_> {}
