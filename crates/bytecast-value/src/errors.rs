//! Error types for tagged inline values.

use thiserror::Error;

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ValueError>;

/// Failures when loading a tagged buffer from untrusted bytes.
///
/// Codec windows themselves never fail: their only precondition is the window
/// length, which this crate always satisfies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Raw image has the wrong size.
    #[error("invalid image length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required image size
        expected: usize,
        /// Size actually supplied
        actual: usize,
    },

    /// Tag byte does not name a known value kind.
    #[error("unknown value kind: {0}")]
    UnknownKind(u8),

    /// CBOR encoding or decoding failed.
    #[error("CBOR error: {0}")]
    Cbor(String),
}
