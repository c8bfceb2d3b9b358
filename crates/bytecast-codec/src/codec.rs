//! Host-aware entry points.
//!
//! [`Codec`] carries the host byte order it was built for, so callers can
//! exercise both byte orders on any machine. The canonical wire order is
//! little-endian: a codec configured for a big-endian host reads and writes
//! windows most significant byte first and moves floats through the
//! definitional path.

use serde::{Deserialize, Serialize};

use crate::{
    endian::{Endianness, FloatPath},
    float::{decode_float_by_definition, encode_float_by_definition},
    int::{get_int_big_endian, get_int_little_endian, set_int_big_endian, set_int_little_endian},
};

/// i32/f32 codec bound to a host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codec {
    endianness: Endianness,
    float_path: FloatPath,
}

impl Codec {
    /// Codec for a host with the given byte order.
    ///
    /// The float path is derived from the byte order; see
    /// [`FloatPath::for_host`].
    pub const fn new(endianness: Endianness) -> Self {
        Self { endianness, float_path: FloatPath::for_host(endianness) }
    }

    /// Codec for the compile target.
    pub fn host() -> Self {
        let codec = Self::new(Endianness::HOST);
        tracing::debug!(
            endianness = ?codec.endianness,
            float_path = ?codec.float_path,
            "host codec constructed"
        );
        codec
    }

    /// Force a float path regardless of byte order.
    #[must_use]
    pub const fn with_float_path(mut self, float_path: FloatPath) -> Self {
        self.float_path = float_path;
        self
    }

    /// Host byte order this codec was built for.
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Float strategy in use.
    pub const fn float_path(&self) -> FloatPath {
        self.float_path
    }

    /// Read an i32 from a 4-byte window.
    ///
    /// # Panics
    ///
    /// If `slice` is not exactly 4 bytes long.
    pub fn decode_int(&self, slice: &[u8]) -> i32 {
        if self.endianness.flips_bytes() {
            get_int_big_endian(slice)
        } else {
            get_int_little_endian(slice)
        }
    }

    /// Write an i32 into a 4-byte window.
    ///
    /// # Panics
    ///
    /// If `slice` is not exactly 4 bytes long.
    pub fn encode_int(&self, value: i32, slice: &mut [u8]) {
        if self.endianness.flips_bytes() {
            set_int_big_endian(value, slice);
        } else {
            set_int_little_endian(value, slice);
        }
    }

    /// Read an f32 from a 4-byte window.
    ///
    /// # Panics
    ///
    /// If `slice` is not exactly 4 bytes long.
    pub fn decode_float(&self, slice: &[u8]) -> f32 {
        let bits = self.decode_int(slice) as u32;
        match self.float_path {
            FloatPath::Direct => f32::from_bits(bits),
            FloatPath::Definitional => decode_float_by_definition(bits),
        }
    }

    /// Write an f32 into a 4-byte window.
    ///
    /// # Panics
    ///
    /// If `slice` is not exactly 4 bytes long.
    pub fn encode_float(&self, value: f32, slice: &mut [u8]) {
        let bits = match self.float_path {
            FloatPath::Direct => value.to_bits(),
            FloatPath::Definitional => encode_float_by_definition(value),
        };
        self.encode_int(bits as i32, slice);
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::host()
    }
}
