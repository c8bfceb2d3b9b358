//! Fuzz raw tagged image parsing.
//!
//! Arbitrary input must never panic; accepted images must serialize back to
//! the same bytes and decode through either codec.

#![no_main]

use bytecast_codec::{Codec, Endianness};
use bytecast_value::TaggedBytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tagged) = TaggedBytes::from_bytes(data) {
        assert_eq!(tagged.to_bytes().as_slice(), data);

        for codec in [Codec::new(Endianness::Little), Codec::new(Endianness::Big)] {
            let _ = tagged.read(&codec);
        }
    }
});
