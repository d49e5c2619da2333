//! The `Bitvector<N>` composite type (C3): a fixed-length sequence of
//! exactly `N` bits, packed LSB-first into `ceil(N/8)` bytes.

use alloc::vec;
use alloc::vec::Vec;
use alloy_primitives::B256;

use crate::{
    Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
    merkleization::{merkleize, pack},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitvector<const N: usize> {
    bits: Vec<bool>,
}

impl<const N: usize> Default for Bitvector<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Bitvector<N> {
    pub fn new() -> Self {
        Self {
            bits: vec![false; N],
        }
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), SSZError> {
        if index >= N {
            return Err(SSZError::NotEnoughBytes {
                expected: index + 1,
                got: N,
            });
        }
        self.bits[index] = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    fn pack_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; N.div_ceil(8)];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                bytes[i / 8] |= 1 << (i % 8);
            }
        }
        bytes
    }
}

impl<const N: usize> SszTypeInfo for Bitvector<N> {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(N.div_ceil(8))
    }
}

impl<const N: usize> SimpleSerialize for Bitvector<N> {
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        let bytes = self.pack_bytes();
        buffer.extend_from_slice(&bytes);
        Ok(bytes.len())
    }
}

impl<const N: usize> SimpleDeserialize for Bitvector<N> {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let expected_bytes = N.div_ceil(8);
        if data.len() != expected_bytes {
            return Err(SSZError::NotEnoughBytes {
                expected: expected_bytes,
                got: data.len(),
            });
        }

        // Bits beyond N in the final byte must be zero; the caller has
        // no other way to tell "padding" from "trailing logical bits".
        let used_bits_in_last_byte = N - (expected_bytes - 1) * 8;
        if used_bits_in_last_byte < 8 {
            let last = data[expected_bytes - 1];
            if last >> used_bits_in_last_byte != 0 {
                return Err(SSZError::ExtraBytes {
                    expected: expected_bytes,
                    got: data.len(),
                });
            }
        }

        let mut bv = Self::new();
        for i in 0..N {
            let byte = data[i / 8];
            bv.bits[i] = (byte >> (i % 8)) & 1 == 1;
        }
        Ok(bv)
    }
}

impl<const N: usize> Merkleize for Bitvector<N> {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let chunks = pack(&self.pack_bytes());
        merkleize(&chunks, Some(Self::chunk_count()))
    }

    fn chunk_count() -> usize {
        N.div_ceil(256)
    }
}
