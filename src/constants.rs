//! Constants shared by the codec and the Merkleization engine.

/// Number of bytes per Merkle chunk.
pub const BYTES_PER_CHUNK: usize = 32;
/// Number of bytes in a container/list/vector offset word.
pub const BYTES_PER_LENGTH_OFFSET: usize = 4;
/// Number of bits per byte (used by the bitvector/bitlist codecs).
pub const BITS_PER_BYTE: usize = 8;
/// Byte width of a 256-bit integer.
pub const BYTES_PER_U256: usize = 32;
/// Ceiling on Merkle tree depth; covers every type this crate can express
/// (2^42 chunks is far beyond any realistic consensus-layer collection).
pub const ZERO_HASH_DEPTH: usize = 42;
