//! Offset table construction.
//!
//! One forward pass over the input records the starting byte of every code
//! point. ASCII bytes are stepped over directly; anything else goes through
//! [`bstr::decode_utf8`], which reports either a scalar and its width or the
//! length of the maximal invalid subpart.
//!
//! Invariants of the returned table
//! - Strictly increasing, starting at 0 for non-empty input.
//! - Every entry is `< bytes.len()`; the last code point ends at
//!   `bytes.len()`.
//! - Empty input yields an empty, unallocated table.

use alloc::vec::Vec;

use crate::{DecodeError, InvalidUtf8Mode};

/// Build the code point offset table for `bytes` under `mode`.
///
/// Only [`InvalidUtf8Mode::Reject`] can return an error.
pub(crate) fn build(bytes: &[u8], mode: InvalidUtf8Mode) -> Result<Vec<usize>, DecodeError> {
    match mode {
        InvalidUtf8Mode::ReplaceEachByte => Ok(build_lossy(bytes, false)),
        InvalidUtf8Mode::ReplaceMaximalSubpart => Ok(build_lossy(bytes, true)),
        InvalidUtf8Mode::Reject => build_strict(bytes),
    }
}

/// Build the table with replacement decoding. An invalid sequence spans one
/// byte, or its whole maximal subpart when `group_subparts` is set.
pub(crate) fn build_lossy(bytes: &[u8], group_subparts: bool) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        offsets.push(pos);
        pos += match decode(bytes, pos) {
            Ok(width) => width,
            Err(len) => {
                #[cfg(feature = "log")]
                log::debug!("invalid UTF-8 sequence of {len} byte(s) at byte {pos}");

                if group_subparts { len } else { 1 }
            }
        };
    }

    trace_built(&offsets, bytes);
    offsets
}

/// Build the table, failing on the first invalid sequence.
fn build_strict(bytes: &[u8]) -> Result<Vec<usize>, DecodeError> {
    let mut offsets = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        match decode(bytes, pos) {
            Ok(width) => {
                offsets.push(pos);
                pos += width;
            }
            Err(len) => {
                return Err(DecodeError {
                    offset: pos,
                    len,
                    index: offsets.len(),
                });
            }
        }
    }

    trace_built(&offsets, bytes);
    Ok(offsets)
}

/// `Ok(width)` of the scalar starting at `pos`, or `Err(len)` of the maximal
/// invalid subpart there.
fn decode(bytes: &[u8], pos: usize) -> Result<usize, usize> {
    if bytes[pos].is_ascii() {
        return Ok(1);
    }

    match bstr::decode_utf8(&bytes[pos..]) {
        (Some(_), width) => Ok(width),
        (None, len) => Err(len),
    }
}

#[cfg_attr(not(feature = "log"), allow(unused_variables))]
fn trace_built(offsets: &[usize], bytes: &[u8]) {
    #[cfg(feature = "log")]
    log::trace!(
        "indexed {} code points over {} bytes",
        offsets.len(),
        bytes.len()
    );
}
