//! Tagged 16-byte inline buffer.
//!
//! Holds one primitive in its first 4-byte window and a tag naming which
//! primitive that is. The remaining bytes are reserved and kept zeroed by every
//! operation that changes the kind.
//!
//! # Raw image
//!
//! ```text
//! ┌─────┬──────────────────────────────────────────────┐
//! │ tag │ bytes[0..16]                                 │
//! └─────┴──────────────────────────────────────────────┘
//!    1                       16
//! ```
//!
//! The window inside `bytes` is written in the codec's wire order, so images
//! produced on hosts with different byte orders are not interchangeable unless
//! both sides use codecs built for the same [`bytecast_codec::Endianness`].

use std::ops::Range;

use bytecast_codec::{Codec, WORD_SIZE};
use serde::{Deserialize, Serialize};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::{
    errors::{Result, ValueError},
    value::{Primitive, Value, ValueKind},
};

/// Size of the inline byte buffer.
pub const INLINE_CAPACITY: usize = 16;

/// Window that carries the primitive.
pub const WINDOW: Range<usize> = 0..WORD_SIZE;

/// Size of the raw image: tag byte plus the inline buffer.
pub const IMAGE_SIZE: usize = size_of::<RawTaggedBytes>();

#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct RawTaggedBytes {
    tag: u8,
    bytes: [u8; INLINE_CAPACITY],
}

/// Fixed inline buffer plus the kind of value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TaggedBytes {
    kind: ValueKind,
    bytes: [u8; INLINE_CAPACITY],
}

impl TaggedBytes {
    /// Zeroed buffer of the given kind.
    pub const fn new(kind: ValueKind) -> Self {
        Self { kind, bytes: [0; INLINE_CAPACITY] }
    }

    /// Buffer holding `value`, encoded with `codec`.
    pub fn from_value(codec: &Codec, value: Value) -> Self {
        let mut tagged = Self::new(value.kind());
        tagged.write(codec, value);
        tagged
    }

    /// Kind of the stored value.
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Raw inline bytes.
    pub const fn bytes(&self) -> &[u8; INLINE_CAPACITY] {
        &self.bytes
    }

    /// Change the stored kind.
    ///
    /// A real change zeroes the whole buffer so no bytes of the old kind are
    /// reinterpreted as the new one. Returns whether the kind changed.
    pub fn set_kind(&mut self, kind: ValueKind) -> bool {
        if self.kind == kind {
            return false;
        }

        tracing::trace!(from = ?self.kind, to = ?kind, "value kind changed, clearing buffer");
        self.kind = kind;
        self.bytes = [0; INLINE_CAPACITY];
        true
    }

    /// Decode the stored value according to its kind.
    pub fn read(&self, codec: &Codec) -> Value {
        match self.kind {
            ValueKind::Int => Value::Int(i32::decode(codec, &self.bytes[WINDOW])),
            ValueKind::Float => Value::Float(f32::decode(codec, &self.bytes[WINDOW])),
        }
    }

    /// Store `value`, switching kind first if needed.
    pub fn write(&mut self, codec: &Codec, value: Value) {
        match value {
            Value::Int(v) => self.set(codec, v),
            Value::Float(v) => self.set(codec, v),
        }
    }

    /// Decode the window as `T`, or `None` if the buffer holds another kind.
    pub fn get<T: Primitive>(&self, codec: &Codec) -> Option<T> {
        (self.kind == T::KIND).then(|| T::decode(codec, &self.bytes[WINDOW]))
    }

    /// Store a primitive, switching kind first if needed.
    pub fn set<T: Primitive>(&mut self, codec: &Codec, value: T) {
        self.set_kind(T::KIND);
        value.encode(codec, &mut self.bytes[WINDOW]);
    }

    /// Raw image: tag byte followed by the inline buffer.
    pub fn to_bytes(&self) -> [u8; IMAGE_SIZE] {
        let raw = RawTaggedBytes { tag: self.kind.to_u8(), bytes: self.bytes };
        let mut image = [0u8; IMAGE_SIZE];
        image.copy_from_slice(raw.as_bytes());
        image
    }

    /// Parse a raw image produced by [`TaggedBytes::to_bytes`].
    pub fn from_bytes(image: &[u8]) -> Result<Self> {
        let raw = RawTaggedBytes::read_from_bytes(image).map_err(|_| {
            tracing::warn!(actual = image.len(), "rejected tagged image with wrong length");
            ValueError::InvalidLength { expected: IMAGE_SIZE, actual: image.len() }
        })?;

        let kind = ValueKind::try_from(raw.tag).inspect_err(|_| {
            tracing::warn!(tag = raw.tag, "rejected tagged image with unknown kind");
        })?;

        Ok(Self { kind, bytes: raw.bytes })
    }

    /// Persist as CBOR.
    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        ciborium::ser::into_writer(self, &mut out)
            .map_err(|e| ValueError::Cbor(e.to_string()))?;
        Ok(out)
    }

    /// Load from CBOR produced by [`TaggedBytes::to_cbor`].
    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        ciborium::de::from_reader(bytes).map_err(|e| ValueError::Cbor(e.to_string()))
    }
}
