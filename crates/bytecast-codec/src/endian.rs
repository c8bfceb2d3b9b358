//! Byte order and float strategy selection.

use serde::{Deserialize, Serialize};

/// Integer byte order of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Byte order of the compile target.
    pub const HOST: Self = if cfg!(target_endian = "little") { Self::Little } else { Self::Big };

    /// True for [`Endianness::Little`].
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    /// Whether the default integer entry points must switch to big-endian
    /// access on a host with this byte order.
    pub const fn flips_bytes(self) -> bool {
        !self.is_little()
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Self::HOST
    }
}

/// How floats are turned into bit patterns and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatPath {
    /// Reinterpret the float's bits with `f32::to_bits` / `f32::from_bits`.
    Direct,
    /// Rebuild the value from sign, exponent and significand arithmetic.
    Definitional,
}

impl FloatPath {
    /// Path for a host with the given byte order.
    ///
    /// Float layout is assumed to track integer byte order, so only a
    /// little-endian host may take the direct path.
    pub const fn for_host(endianness: Endianness) -> Self {
        if endianness.flips_bytes() { Self::Definitional } else { Self::Direct }
    }
}
