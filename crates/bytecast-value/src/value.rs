//! Value kinds and the primitives stored in a window.

use bytecast_codec::Codec;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::ValueError;

/// Which primitive a tagged buffer holds.
///
/// Serialized as its `u8` discriminant, which is also the tag byte of the raw
/// image.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
pub enum ValueKind {
    /// Signed 32-bit integer
    #[default]
    Int = 0,
    /// IEEE-754 single precision float
    Float = 1,
}

impl ValueKind {
    /// Tag byte of this kind.
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = ValueError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Int),
            1 => Ok(Self::Float),
            other => Err(ValueError::UnknownKind(other)),
        }
    }
}

/// A decoded primitive together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Integer payload
    Int(i32),
    /// Float payload
    Float(f32),
}

impl Value {
    /// Kind tag for this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

/// A primitive that occupies one codec window.
pub trait Primitive: Copy {
    /// Kind tag stored next to this primitive.
    const KIND: ValueKind;

    /// Read from a 4-byte window.
    fn decode(codec: &Codec, window: &[u8]) -> Self;

    /// Write into a 4-byte window.
    fn encode(self, codec: &Codec, window: &mut [u8]);
}

impl Primitive for i32 {
    const KIND: ValueKind = ValueKind::Int;

    fn decode(codec: &Codec, window: &[u8]) -> Self {
        codec.decode_int(window)
    }

    fn encode(self, codec: &Codec, window: &mut [u8]) {
        codec.encode_int(self, window);
    }
}

impl Primitive for f32 {
    const KIND: ValueKind = ValueKind::Float;

    fn decode(codec: &Codec, window: &[u8]) -> Self {
        codec.decode_float(window)
    }

    fn encode(self, codec: &Codec, window: &mut [u8]) {
        codec.encode_float(self, window);
    }
}
