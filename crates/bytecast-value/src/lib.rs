//! Tagged inline values.
//!
//! A [`TaggedBytes`] is a fixed 16-byte buffer plus a [`ValueKind`] tag. The
//! primitive lives in the first 4-byte window and is read and written through
//! a [`bytecast_codec::Codec`], so the stored bytes follow the codec's wire
//! order rather than the host's.
//!
//! Kinds form a closed set. Callers match on [`Value`] instead of looking up
//! fields by name, and the [`Primitive`] trait is the single seam between a
//! Rust type and its codec entry points.
//!
//! # Persistence
//!
//! - Raw image: 17 bytes (tag + buffer), layout checked at compile time by
//!   `zerocopy`.
//! - CBOR via `ciborium`.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod tagged;
pub mod value;

pub use errors::{Result, ValueError};
pub use tagged::{IMAGE_SIZE, INLINE_CAPACITY, TaggedBytes, WINDOW};
pub use value::{Primitive, Value, ValueKind};
