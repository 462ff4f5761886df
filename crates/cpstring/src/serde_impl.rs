//! Serialized as a string when the buffer is valid UTF-8, as bytes otherwise.

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::ByteSlice;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::CodePointString;

impl Serialize for CodePointString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let bytes = self.as_bytes().map_or(&[][..], |b| b.as_bytes());
        match bytes.to_str() {
            Ok(text) => serializer.serialize_str(text),
            Err(_) => serializer.serialize_bytes(bytes),
        }
    }
}

impl<'de> Deserialize<'de> for CodePointString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CodePointStringVisitor)
    }
}

/// Upper bound on the buffer reserved from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

struct CodePointStringVisitor;

impl<'de> Visitor<'de> for CodePointStringVisitor {
    type Value = CodePointString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a byte sequence")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(CodePointString::new(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(CodePointString::from(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(CodePointString::new(v))
    }

    fn visit_byte_buf<E: de::Error>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(CodePointString::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // The hint comes from the input; don't let it size the allocation.
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOC));
        while let Some(b) = seq.next_element::<u8>()? {
            bytes.push(b);
        }
        Ok(CodePointString::from(bytes))
    }
}
