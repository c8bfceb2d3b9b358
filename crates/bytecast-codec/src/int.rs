//! Explicit-order i32 access on 4-byte windows.
//!
//! Every function here asserts that the window is exactly [`WORD_SIZE`] bytes.
//! A wrong length is a caller bug, so it panics rather than returning an error.

/// Size in bytes of every window this crate reads or writes.
pub const WORD_SIZE: usize = 4;

#[inline]
fn word(slice: &[u8]) -> [u8; WORD_SIZE] {
    assert_eq!(slice.len(), WORD_SIZE, "codec window must be exactly {WORD_SIZE} bytes");
    [slice[0], slice[1], slice[2], slice[3]]
}

#[inline]
fn put_word(bytes: [u8; WORD_SIZE], slice: &mut [u8]) {
    assert_eq!(slice.len(), WORD_SIZE, "codec window must be exactly {WORD_SIZE} bytes");
    slice.copy_from_slice(&bytes);
}

/// Read an i32 with byte 0 least significant.
pub fn get_int_little_endian(slice: &[u8]) -> i32 {
    i32::from_le_bytes(word(slice))
}

/// Read an i32 with byte 0 most significant.
pub fn get_int_big_endian(slice: &[u8]) -> i32 {
    i32::from_be_bytes(word(slice))
}

/// Write an i32 with byte 0 least significant.
pub fn set_int_little_endian(value: i32, slice: &mut [u8]) {
    put_word(value.to_le_bytes(), slice);
}

/// Write an i32 with byte 0 most significant.
pub fn set_int_big_endian(value: i32, slice: &mut [u8]) {
    put_word(value.to_be_bytes(), slice);
}

/// Reverse the byte order of a 32-bit word.
pub const fn flip_byte_order_32(value: u32) -> u32 {
    value.swap_bytes()
}
