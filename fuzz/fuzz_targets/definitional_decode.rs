//! Fuzz the definitional float path.
//!
//! Any 4 bytes must decode and re-encode without panicking, and patterns with
//! a normal exponent field must come back bit for bit.

#![no_main]

use bytecast_codec::{
    Codec, Endianness, Float32Parts, decode_float_by_definition, encode_float_by_definition,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 4]| {
    let codec = Codec::new(Endianness::Big);
    let bits = codec.decode_int(&data) as u32;

    let value = decode_float_by_definition(bits);
    let reencoded = encode_float_by_definition(value);

    let exponent = Float32Parts::from_bits(bits).exponent;
    if (1..=254).contains(&exponent) {
        assert_eq!(reencoded, bits);
        assert_eq!(codec.decode_float(&data).to_bits(), value.to_bits());
    }
});
