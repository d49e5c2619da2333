//! Error variants for SSZ serialization, deserialization and Merkleization.

use thiserror::Error;

/// Every failure mode a codec or Merkleization operation can report.
///
/// All variants are recoverable by the caller: a failed `serialize`,
/// `deserialize` or `hash_tree_root` call never mutates caller-visible
/// state and never yields a partially-populated value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SSZError {
    #[error("not enough bytes: expected at least {expected}, got {got}")]
    NotEnoughBytes { expected: usize, got: usize },

    #[error("extra bytes: expected exactly {expected}, got {got}")]
    ExtraBytes { expected: usize, got: usize },

    #[error("invalid byte {byte:#04x} for boolean deserialization")]
    InvalidBool { byte: u8 },

    #[error("malformed offset: {reason}")]
    MalformedOffset { reason: &'static str },

    #[error("offset {offset} out of bounds for input of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("bitlist length {got} exceeds limit {limit}")]
    BitlistTooLarge { limit: usize, got: usize },

    #[error("bitlist is missing its sentinel bit")]
    NoBitlistSentinel,

    #[error("list length {got} exceeds limit {limit}")]
    ListTooLarge { limit: usize, got: usize },

    #[error("merkleization chunk count {count} exceeds limit {limit}")]
    LimitExceeded { limit: usize, count: usize },
}
