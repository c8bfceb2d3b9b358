//! Tagged buffer integration tests.
//!
//! Covers the editing flow a host performs on a stored value:
//! - pick a kind (clearing the buffer on change)
//! - read the current value through a codec
//! - write an edited value back
//! - persist and reload the buffer

use bytecast_codec::{Codec, Endianness, Float32Parts};
use bytecast_value::{IMAGE_SIZE, TaggedBytes, Value, ValueError, ValueKind, WINDOW};
use proptest::prelude::*;

const LITTLE: Codec = Codec::new(Endianness::Little);
const BIG: Codec = Codec::new(Endianness::Big);

fn value_strategy() -> impl Strategy<Value = Value> {
    let normal = (0u32..=1, 1u32..=254, 0u32..(1 << 23)).prop_map(|(s, e, m)| {
        Value::Float(f32::from_bits(Float32Parts::new(s, e, m).to_bits()))
    });
    prop_oneof![any::<i32>().prop_map(Value::Int), normal]
}

#[test]
fn edit_session() {
    let codec = Codec::host();
    let mut stored = TaggedBytes::default();

    // Host starts on Int and edits the value.
    let Value::Int(current) = stored.read(&codec) else {
        unreachable!("default kind is Int");
    };
    stored.write(&codec, Value::Int(current + 5));
    assert_eq!(stored.read(&codec), Value::Int(5));

    // Switching to Float discards the integer bytes.
    assert!(stored.set_kind(ValueKind::Float));
    assert_eq!(stored.read(&codec), Value::Float(0.0));

    stored.write(&codec, Value::Float(0.1));
    let reloaded = TaggedBytes::from_bytes(&stored.to_bytes()).unwrap();
    assert_eq!(reloaded.read(&codec), Value::Float(0.1));
}

#[test]
fn reserved_bytes_stay_zero() {
    let mut stored = TaggedBytes::new(ValueKind::Int);
    stored.write(&BIG, Value::Int(-1));
    stored.write(&BIG, Value::Float(-2.0));
    assert!(stored.bytes()[WINDOW.end..].iter().all(|&b| b == 0));
}

#[test]
fn truncated_image_is_rejected() {
    let image = TaggedBytes::new(ValueKind::Float).to_bytes();
    assert_eq!(
        TaggedBytes::from_bytes(&image[..IMAGE_SIZE - 1]),
        Err(ValueError::InvalidLength { expected: IMAGE_SIZE, actual: IMAGE_SIZE - 1 })
    );
}

#[test]
fn error_messages() {
    assert_eq!(ValueError::UnknownKind(7).to_string(), "unknown value kind: 7");
    assert_eq!(
        ValueError::InvalidLength { expected: 17, actual: 3 }.to_string(),
        "invalid image length: expected 17 bytes, got 3"
    );
}

proptest! {
    #[test]
    fn prop_write_then_read(value in value_strategy()) {
        for codec in [LITTLE, BIG] {
            let stored = TaggedBytes::from_value(&codec, value);
            prop_assert_eq!(stored.kind(), value.kind());
            prop_assert_eq!(stored.read(&codec), value);
        }
    }

    #[test]
    fn prop_raw_image_round_trip(value in value_strategy()) {
        let stored = TaggedBytes::from_value(&LITTLE, value);
        let image = stored.to_bytes();
        prop_assert_eq!(TaggedBytes::from_bytes(&image), Ok(stored));
    }

    #[test]
    fn prop_cbor_round_trip(value in value_strategy()) {
        let stored = TaggedBytes::from_value(&BIG, value);
        let cbor = stored.to_cbor().unwrap();
        prop_assert_eq!(TaggedBytes::from_cbor(&cbor).unwrap(), stored);
    }

    #[test]
    fn prop_windows_differ_only_in_order(value in value_strategy()) {
        let mut little = TaggedBytes::from_value(&LITTLE, value).bytes()[WINDOW].to_vec();
        let big = TaggedBytes::from_value(&BIG, value).bytes()[WINDOW].to_vec();
        little.reverse();
        prop_assert_eq!(little, big);
    }

    #[test]
    fn prop_from_bytes_never_panics(image in prop::collection::vec(any::<u8>(), 0..40)) {
        if let Ok(stored) = TaggedBytes::from_bytes(&image) {
            let reserialized = stored.to_bytes();
            prop_assert_eq!(reserialized.as_slice(), image.as_slice());
        }
    }
}
