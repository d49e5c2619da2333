//! Core SSZ traits: the seams C2/C3/C4 dispatch against and C1 classifies.
//!
//! Every SSZ-typed value implements three independent traits rather than one
//! monolithic one, so that a type which is only ever merkleized (e.g. an
//! internal helper) doesn't have to carry codec machinery, and vice versa.

use crate::error::SSZError;
use alloc::vec::Vec;
use alloy_primitives::B256;

/// Compile-time classification of an SSZ type (C1 of the design).
///
/// `is_fixed_size` and `fixed_size` must agree: a type is fixed-size iff
/// `fixed_size()` returns `Some`. Implementations are generated by
/// [`crate::ssz_container!`] for containers, recursively from field types.
pub trait SszTypeInfo {
    /// Whether every value of this type encodes to the same byte length.
    fn is_fixed_size() -> bool;

    /// The encoded byte length shared by every value of this type, or
    /// `None` if the type is variable-size. For containers this is the
    /// sum of field widths, with each variable-size field contributing a
    /// 4-byte offset placeholder.
    fn fixed_size() -> Option<usize>;

    /// Whether this is one of the basic scalar types (uint*, bool) that
    /// pack directly into Merkle chunks rather than each producing its
    /// own chunk.
    fn is_basic_type() -> bool {
        false
    }

    /// The complement of [`SszTypeInfo::is_fixed_size`].
    fn is_variable_size() -> bool {
        !Self::is_fixed_size()
    }
}

/// Serializes a value into a caller-supplied output cursor (C2/C3/C4).
///
/// Implementations append to `buffer` rather than returning a fresh
/// `Vec`, so that a container serializing several fields writes into one
/// shared allocation instead of one per field.
pub trait SimpleSerialize {
    /// Appends the SSZ encoding of `self` to `buffer`, returning the
    /// number of bytes written.
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError>;

    /// The encoded byte length of this value. Equal to `fixed_size()` for
    /// fixed-size types; computed directly for variable-size ones.
    fn value_size(&self) -> Result<usize, SSZError>
    where
        Self: Sized,
    {
        let mut scratch = Vec::new();
        self.serialize(&mut scratch)
    }
}

/// Deserializes a value from a byte slice (C2/C3/C4).
///
/// Implementations consume the entire slice for collections and
/// containers; a short or long slice is a decode error, never a silent
/// truncation.
pub trait SimpleDeserialize: Sized {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError>;
}

/// Computes the 32-byte Merkle commitment of a value (C5).
pub trait Merkleize {
    fn hash_tree_root(&self) -> Result<B256, SSZError>;

    /// The Merkleization limit (tree-depth exponent's base) for this
    /// type, per §4.5. Basic scalars are a single chunk; collections and
    /// containers override this with their declared limit.
    fn chunk_count() -> usize
    where
        Self: Sized,
    {
        1
    }
}
