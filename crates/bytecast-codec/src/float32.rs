//! IEEE-754 single-precision bit-field model.
//!
//! A 32-bit pattern splits into three fields, most significant first:
//!
//! ```text
//!  31 30        23 22                                0
//! ┌──┬────────────┬───────────────────────────────────┐
//! │ S│  exponent  │            significand            │
//! └──┴────────────┴───────────────────────────────────┘
//!  1      8                       23
//! ```
//!
//! Everything here is plain integer arithmetic. Nothing reinterprets memory,
//! so the model is valid on any host.

use serde::{Deserialize, Serialize};

/// Width of the sign field in bits.
pub const SIGN_BITS: u32 = 1;

/// Width of the exponent field in bits.
pub const EXPONENT_BITS: u32 = 8;

/// Width of the significand field in bits.
pub const SIGNIFICAND_BITS: u32 = 23;

/// Total width of a single-precision pattern.
pub const TOTAL_BITS: u32 = 32;

/// Shift that moves the sign field into bit 0.
pub const SIGN_SHIFT: u32 = TOTAL_BITS - SIGN_BITS;

/// Shift that moves the exponent field into bit 0.
pub const EXPONENT_SHIFT: u32 = SIGNIFICAND_BITS;

/// Shift that moves the significand field into bit 0.
pub const SIGNIFICAND_SHIFT: u32 = 0;

/// Sign field mask before shifting into place.
pub const SIGN_UNSHIFTED_MASK: u32 = (1 << SIGN_BITS) - 1;

/// Exponent field mask before shifting into place. Also the all-ones
/// exponent that marks infinities and NaNs.
pub const EXPONENT_UNSHIFTED_MASK: u32 = (1 << EXPONENT_BITS) - 1;

/// Significand field mask before shifting into place.
pub const SIGNIFICAND_UNSHIFTED_MASK: u32 = (1 << SIGNIFICAND_BITS) - 1;

/// Sign field mask in its slot.
pub const SIGN_MASK: u32 = SIGN_UNSHIFTED_MASK << SIGN_SHIFT;

/// Exponent field mask in its slot.
pub const EXPONENT_MASK: u32 = EXPONENT_UNSHIFTED_MASK << EXPONENT_SHIFT;

/// Significand field mask in its slot.
pub const SIGNIFICAND_MASK: u32 = SIGNIFICAND_UNSHIFTED_MASK << SIGNIFICAND_SHIFT;

/// Exponent bias: half of the all-ones exponent, rounded down (127).
pub const EXPONENT_BIAS: i32 = (EXPONENT_UNSHIFTED_MASK >> 1) as i32;

/// Decomposed single-precision pattern.
///
/// Fields are unsigned magnitudes. `from_bits` always yields fields that fit
/// their widths; `to_bits` masks anything wider, the same way a hardware bit
/// field would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Float32Parts {
    /// 0 for positive, 1 for negative.
    pub sign: u32,
    /// Biased exponent, 0..=255.
    pub exponent: u32,
    /// Fraction bits without the implicit leading 1, 0..2^23.
    pub significand: u32,
}

impl Float32Parts {
    /// Create parts from raw field values.
    pub const fn new(sign: u32, exponent: u32, significand: u32) -> Self {
        Self { sign, exponent, significand }
    }

    /// Split a 32-bit pattern into its fields.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            sign: (bits & SIGN_MASK) >> SIGN_SHIFT,
            exponent: (bits & EXPONENT_MASK) >> EXPONENT_SHIFT,
            significand: (bits & SIGNIFICAND_MASK) >> SIGNIFICAND_SHIFT,
        }
    }

    /// Reassemble the 32-bit pattern.
    pub const fn to_bits(self) -> u32 {
        ((self.sign << SIGN_SHIFT) & SIGN_MASK)
            | ((self.exponent << EXPONENT_SHIFT) & EXPONENT_MASK)
            | ((self.significand << SIGNIFICAND_SHIFT) & SIGNIFICAND_MASK)
    }

    /// True when the sign field is set.
    pub const fn is_negative(self) -> bool {
        self.sign != 0
    }

    /// True when the exponent is all ones (infinity or NaN).
    pub const fn has_max_exponent(self) -> bool {
        self.exponent == EXPONENT_UNSHIFTED_MASK
    }

    /// Exponent with the bias removed.
    pub const fn unbiased_exponent(self) -> i32 {
        self.exponent as i32 - EXPONENT_BIAS
    }
}

impl From<u32> for Float32Parts {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Float32Parts> for u32 {
    fn from(parts: Float32Parts) -> Self {
        parts.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(EXPONENT_BIAS, 127);
        assert_eq!(SIGN_MASK, 0x8000_0000);
        assert_eq!(EXPONENT_MASK, 0x7F80_0000);
        assert_eq!(SIGNIFICAND_MASK, 0x007F_FFFF);
        assert_eq!(SIGN_MASK | EXPONENT_MASK | SIGNIFICAND_MASK, u32::MAX);
        assert_eq!(SIGN_MASK & EXPONENT_MASK, 0);
        assert_eq!(EXPONENT_MASK & SIGNIFICAND_MASK, 0);
    }

    #[test]
    fn parts_of_negative_one_and_three_quarters() {
        let parts = Float32Parts::from_bits((-1.75f32).to_bits());
        assert_eq!(parts, Float32Parts::new(1, 127, 0b110_0000_0000_0000_0000_0000));
        assert!(parts.is_negative());
        assert_eq!(parts.unbiased_exponent(), 0);
    }

    #[test]
    fn parts_of_infinities() {
        let pos = Float32Parts::from_bits(f32::INFINITY.to_bits());
        assert_eq!(pos, Float32Parts::new(0, 255, 0));
        assert!(pos.has_max_exponent());

        let neg = Float32Parts::from_bits(f32::NEG_INFINITY.to_bits());
        assert_eq!(neg, Float32Parts::new(1, 255, 0));
    }

    #[test]
    fn parts_of_zero() {
        assert_eq!(Float32Parts::from_bits(0.0f32.to_bits()), Float32Parts::default());
    }

    #[test]
    fn oversized_fields_are_truncated() {
        let parts = Float32Parts::new(0b11, 0x1FF, 0xFFFF_FFFF);
        assert_eq!(parts.to_bits(), u32::MAX);

        let parts = Float32Parts::new(2, 256, 1 << 23);
        assert_eq!(parts.to_bits(), 0);
    }

    #[test]
    fn conversions_match_methods() {
        let bits = 0x4049_0FDB;
        let parts = Float32Parts::from(bits);
        assert_eq!(u32::from(parts), bits);
    }
}
