//! Endianness-independent codec for 4-byte windows.
//!
//! Converts `i32` and IEEE-754 `f32` values to and from 4-byte slices. The
//! canonical wire order is little-endian; a [`Codec`] is built for a specific
//! host byte order and flips to big-endian access only when that host is not
//! little-endian.
//!
//! Floats take one of two paths:
//!
//! - **Direct**: `f32::to_bits` / `f32::from_bits` through the integer codec.
//!   Exact bit for bit, used on little-endian hosts.
//! - **Definitional**: sign, exponent and significand arithmetic over the
//!   [`float32`] bit-field model. Used when the host's float layout cannot be
//!   assumed to match the wire layout.
//!
//! # Preconditions
//!
//! Every window must be exactly [`WORD_SIZE`] bytes. A different length is a
//! programming error and panics; there is no recoverable error type here.
//!
//! # Components
//!
//! - [`float32`]: bit widths, shifts, masks and [`Float32Parts`]
//! - [`int`]: explicit little/big-endian i32 access
//! - [`float`]: definitional f32 encode/decode
//! - [`endian`]: host byte order and float path selection
//! - [`codec`]: the host-aware [`Codec`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod endian;
pub mod float;
pub mod float32;
pub mod int;

pub use codec::Codec;
pub use endian::{Endianness, FloatPath};
pub use float::{NAN_PATTERN, decode_float_by_definition, encode_float_by_definition};
pub use float32::Float32Parts;
pub use int::{
    WORD_SIZE, flip_byte_order_32, get_int_big_endian, get_int_little_endian, set_int_big_endian,
    set_int_little_endian,
};
