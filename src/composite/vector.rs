//! The `Vector<T, N>` composite type (C3): a fixed-length homogeneous
//! sequence, realized directly as `[T; N]` rather than a wrapper type.

use crate::composite::seq;
use crate::merkleization::{SSZType, chunk_count, merkleize, pack};
use crate::{Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use alloc::vec::Vec;
use alloy_primitives::B256;

impl<T, const N: usize> SszTypeInfo for [T; N]
where
    T: SszTypeInfo,
{
    fn is_fixed_size() -> bool {
        T::is_fixed_size()
    }

    fn fixed_size() -> Option<usize> {
        T::fixed_size().map(|size| size * N)
    }
}

impl<T, const N: usize> SimpleSerialize for [T; N]
where
    T: SimpleSerialize + SszTypeInfo,
{
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        seq::serialize(self.as_slice(), buffer)
    }
}

impl<T, const N: usize> SimpleDeserialize for [T; N]
where
    T: SimpleDeserialize + SszTypeInfo,
{
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let items = seq::deserialize::<T>(data)?;
        let got = items.len();
        items.try_into().map_err(|_| SSZError::NotEnoughBytes {
            expected: N,
            got,
        })
    }
}

impl<T, const N: usize> Merkleize for [T; N]
where
    T: SimpleSerialize + SszTypeInfo + Merkleize,
{
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let chunks = if T::is_basic_type() {
            let mut serialized = Vec::new();
            self.serialize(&mut serialized)?;
            pack(&serialized)
        } else {
            self.iter()
                .map(|element| element.hash_tree_root().map(|root| root.0))
                .collect::<Result<Vec<_>, _>>()?
        };
        merkleize(&chunks, Some(Self::chunk_count()))
    }

    fn chunk_count() -> usize {
        if T::is_basic_type() {
            chunk_count(SSZType::VectorBasic {
                elem_size: T::fixed_size().expect("basic types are fixed-size"),
                count: N,
            })
        } else {
            chunk_count(SSZType::VectorComposite { count: N })
        }
    }
}
