//! Definitional f32 encoding.
//!
//! These functions produce and consume IEEE-754 single-precision patterns
//! through sign, exponent and significand arithmetic alone. They never look at
//! how the host lays a float out in memory, which makes them usable on hosts
//! whose float byte order is unknown.
//!
//! # Simplifications
//!
//! - Signed zero collapses to `+0.0`: `-0.0` encodes to `0`.
//! - NaN sign and payload are dropped. Every NaN encodes to [`NAN_PATTERN`]
//!   and every NaN pattern decodes to [`f32::NAN`].
//! - There is no subnormal branch, and subnormals do not survive a round
//!   trip. Decode reads a zero exponent field through the normal-number
//!   formula, so `0x8000_0000` decodes to `-2^-127` rather than `-0.0`.
//!   Encode lets the exponent counter drop to zero or below and the bit-field
//!   mask keeps only its low 8 bits: `2^-127` encodes to `0`, `-2^-127` to
//!   `0x8000_0000`, and the smallest subnormal `2^-149` wraps to exponent 234
//!   (`0x7500_0000`), which decodes to `2^107`.

use crate::float32::{EXPONENT_BIAS, EXPONENT_UNSHIFTED_MASK, Float32Parts, SIGNIFICAND_BITS};

/// Pattern the encoder emits for any NaN input.
///
/// All ones: exponent all ones with a nonzero significand, so it decodes back
/// to NaN.
pub const NAN_PATTERN: u32 = u32::MAX;

/// Rebuild an `f32` from its bit pattern.
pub fn decode_float_by_definition(bits: u32) -> f32 {
    // The formula below assumes an implicit leading 1 and cannot produce zero.
    if bits == 0 {
        return 0.0;
    }

    let parts = Float32Parts::from_bits(bits);

    if parts.has_max_exponent() {
        if parts.significand == 0 {
            return if parts.is_negative() { f32::NEG_INFINITY } else { f32::INFINITY };
        }
        return f32::NAN;
    }

    let scale = 2.0f32.powi(parts.unbiased_exponent());
    let fraction = parts.significand as f32 * 2.0f32.powi(-(SIGNIFICAND_BITS as i32)) + 1.0;
    let magnitude = scale * fraction;

    if parts.is_negative() { -magnitude } else { magnitude }
}

/// Produce the bit pattern of an `f32`.
///
/// Normalisation is iterative: one halving or doubling per unit of distance
/// between the value's exponent and zero, so at most a few hundred steps.
pub fn encode_float_by_definition(value: f32) -> u32 {
    if value == 0.0 {
        return 0;
    }

    let (sign, mut magnitude) = if value < 0.0 { (1, -value) } else { (0, value) };

    if magnitude.is_infinite() {
        return Float32Parts::new(sign, EXPONENT_UNSHIFTED_MASK, 0).to_bits();
    }
    if magnitude.is_nan() {
        return NAN_PATTERN;
    }

    let mut exponent = EXPONENT_BIAS;
    while magnitude >= 2.0 {
        magnitude /= 2.0;
        exponent += 1;
    }
    while magnitude < 1.0 {
        magnitude *= 2.0;
        exponent -= 1;
    }

    // magnitude is in [1, 2); drop the implicit 1 and truncate the rest.
    let significand = ((magnitude - 1.0) * 2.0f32.powi(SIGNIFICAND_BITS as i32)) as u32;

    Float32Parts::new(sign, exponent as u32, significand).to_bits()
}
