//! The `Bitlist<N>` composite type (C3): a variable-length sequence of
//! at most `N` bits, terminated by a sentinel bit rather than a length
//! prefix.

use alloc::vec;
use alloc::vec::Vec;
use alloy_primitives::B256;

use crate::{
    Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo,
    merkleization::{merkleize, mix_in_length, pack},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitlist<const N: usize> {
    bits: Vec<bool>,
}

impl<const N: usize> Default for Bitlist<N> {
    fn default() -> Self {
        Self { bits: Vec::new() }
    }
}

impl<const N: usize> TryFrom<&[bool]> for Bitlist<N> {
    type Error = SSZError;

    fn try_from(slice: &[bool]) -> Result<Self, Self::Error> {
        Bitlist::from_vec(slice.to_vec())
    }
}

impl<const N: usize> Bitlist<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vec(bits: Vec<bool>) -> Result<Self, SSZError> {
        if bits.len() > N {
            return Err(SSZError::BitlistTooLarge {
                limit: N,
                got: bits.len(),
            });
        }
        Ok(Self { bits })
    }

    pub fn push(&mut self, bit: bool) -> Result<(), SSZError> {
        if self.bits.len() >= N {
            return Err(SSZError::BitlistTooLarge {
                limit: N,
                got: self.bits.len() + 1,
            });
        }
        self.bits.push(bit);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    fn pack_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.bits.len().div_ceil(8)];
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                bytes[i / 8] |= 1 << (i % 8);
            }
        }
        bytes
    }
}

impl<const N: usize> SszTypeInfo for Bitlist<N> {
    fn is_fixed_size() -> bool {
        false
    }

    fn fixed_size() -> Option<usize> {
        None
    }
}

impl<const N: usize> SimpleSerialize for Bitlist<N> {
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        let k = self.bits.len();
        if k > N {
            return Err(SSZError::BitlistTooLarge { limit: N, got: k });
        }

        let start_len = buffer.len();
        let mut bytes = self.pack_bytes();
        // The sentinel bit lives at logical position k: the first free
        // bit after the payload, possibly requiring one extra byte.
        if k % 8 == 0 {
            bytes.push(1);
        } else {
            let last = bytes.len() - 1;
            bytes[last] |= 1 << (k % 8);
        }
        buffer.extend_from_slice(&bytes);
        Ok(buffer.len() - start_len)
    }
}

impl<const N: usize> SimpleDeserialize for Bitlist<N> {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let last = *data.last().ok_or(SSZError::NoBitlistSentinel)?;
        if last == 0 {
            return Err(SSZError::NoBitlistSentinel);
        }

        let sentinel_bit = 7 - last.leading_zeros() as usize;
        let k = (data.len() - 1) * 8 + sentinel_bit;
        if k > N {
            return Err(SSZError::BitlistTooLarge { limit: N, got: k });
        }

        let mut bits = Vec::with_capacity(k);
        for i in 0..k {
            let byte = data[i / 8];
            bits.push((byte >> (i % 8)) & 1 == 1);
        }
        Ok(Self { bits })
    }
}

impl<const N: usize> Merkleize for Bitlist<N> {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let chunks = pack(&self.pack_bytes());
        let root = merkleize(&chunks, Some(Self::chunk_count()))?;
        Ok(mix_in_length(root, self.bits.len()))
    }

    fn chunk_count() -> usize {
        N.div_ceil(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_empty_is_just_the_sentinel() {
        let empty: Bitlist<32> = Bitlist::default();
        let mut buffer = vec![];
        empty.serialize(&mut buffer).unwrap();
        assert_eq!(buffer, vec![1u8]);
    }

    #[test]
    fn serialize_matches_spec_example() {
        // S-bitlist: bits [F,F,F,T,T,F,F,F] -> payload 0b0001_1000, sentinel at bit 8
        let mut list = Bitlist::<32>::default();
        for bit in [false, false, false, true, true, false, false, false] {
            list.push(bit).unwrap();
        }
        let mut buffer = vec![];
        list.serialize(&mut buffer).unwrap();
        assert_eq!(buffer, vec![24u8, 1u8]);
    }

    #[test]
    fn deserialize_reads_sentinel_from_last_byte() {
        let decoded = Bitlist::<32>::deserialize(&[1]).unwrap();
        assert_eq!(decoded, Bitlist::default());

        let decoded = Bitlist::<32>::deserialize(&[24u8, 1u8]).unwrap();
        let expected = Bitlist::try_from(
            [false, false, false, true, true, false, false, false].as_ref(),
        )
        .unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn deserialize_rejects_zero_last_byte() {
        assert_eq!(
            Bitlist::<32>::deserialize(&[24u8, 0u8]),
            Err(SSZError::NoBitlistSentinel)
        );
    }

    #[test]
    fn deserialize_rejects_empty_input() {
        assert_eq!(
            Bitlist::<32>::deserialize(&[]),
            Err(SSZError::NoBitlistSentinel)
        );
    }

    #[test]
    fn round_trips_across_byte_boundary() {
        let bits: Vec<bool> = (0..32).map(|i| i % 5 == 0).collect();
        let list = Bitlist::<32>::from_vec(bits.clone()).unwrap();
        let mut buffer = vec![];
        list.serialize(&mut buffer).unwrap();
        let recovered = Bitlist::<32>::deserialize(&buffer).unwrap();
        assert_eq!(recovered.bits, bits);
    }

    #[test]
    fn rejects_construction_beyond_limit() {
        assert_eq!(
            Bitlist::<3>::from_vec(vec![true; 4]),
            Err(SSZError::BitlistTooLarge { limit: 3, got: 4 })
        );
    }

    #[test]
    fn empty_and_nonempty_roots_differ() {
        let empty: Bitlist<32> = Bitlist::default();
        let mut single = Bitlist::<32>::default();
        single.push(true).unwrap();
        assert_ne!(
            empty.hash_tree_root().unwrap(),
            single.hash_tree_root().unwrap()
        );
    }

    #[test]
    fn chunk_count_matches_limit() {
        assert_eq!(Bitlist::<256>::chunk_count(), 1);
        assert_eq!(Bitlist::<257>::chunk_count(), 2);
        assert_eq!(Bitlist::<513>::chunk_count(), 3);
    }
}
