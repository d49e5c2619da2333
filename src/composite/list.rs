//! The `List<T, N>` composite type (C3): a variable-length homogeneous
//! sequence bounded by a compile-time capacity `N`.

use crate::composite::seq;
use crate::merkleization::{SSZType, chunk_count, merkleize, mix_in_length, pack};
use crate::{Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use alloc::vec::Vec;
use alloy_primitives::B256;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T, const N: usize> {
    elements: Vec<T>,
    _capacity: PhantomData<[T; N]>,
}

impl<T, const N: usize> List<T, N> {
    pub fn new(elements: Vec<T>) -> Result<Self, SSZError> {
        if elements.len() > N {
            return Err(SSZError::ListTooLarge {
                limit: N,
                got: elements.len(),
            });
        }
        Ok(Self {
            elements,
            _capacity: PhantomData,
        })
    }

    pub fn into_inner(self) -> Vec<T> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, item: T) -> Result<(), SSZError> {
        if self.elements.len() >= N {
            return Err(SSZError::ListTooLarge {
                limit: N,
                got: self.elements.len() + 1,
            });
        }
        self.elements.push(item);
        Ok(())
    }
}

impl<T, const N: usize> Deref for List<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, const N: usize> DerefMut for List<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.elements
    }
}

impl<T, const N: usize> SszTypeInfo for List<T, N>
where
    T: SszTypeInfo,
{
    fn is_fixed_size() -> bool {
        false
    }

    fn fixed_size() -> Option<usize> {
        None
    }
}

impl<T, const N: usize> SimpleSerialize for List<T, N>
where
    T: SimpleSerialize + SszTypeInfo,
{
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        if self.elements.len() > N {
            return Err(SSZError::ListTooLarge {
                limit: N,
                got: self.elements.len(),
            });
        }
        seq::serialize(&self.elements, buffer)
    }
}

impl<T, const N: usize> SimpleDeserialize for List<T, N>
where
    T: SimpleDeserialize + SszTypeInfo,
{
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        let elements = seq::deserialize::<T>(data)?;
        List::new(elements)
    }
}

impl<T, const N: usize> Merkleize for List<T, N>
where
    T: SimpleSerialize + SszTypeInfo + Merkleize,
{
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let chunks = if T::is_basic_type() {
            let mut serialized = Vec::new();
            self.serialize(&mut serialized)?;
            pack(&serialized)
        } else {
            self.elements
                .iter()
                .map(|element| element.hash_tree_root().map(|root| root.0))
                .collect::<Result<Vec<_>, _>>()?
        };
        let root = merkleize(&chunks, Some(Self::chunk_count()))?;
        Ok(mix_in_length(root, self.elements.len()))
    }

    fn chunk_count() -> usize {
        if T::is_basic_type() {
            chunk_count(SSZType::ListBasic {
                elem_size: T::fixed_size().expect("basic types are fixed-size"),
                limit: N,
            })
        } else {
            chunk_count(SSZType::ListComposite { limit: N })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::List;
    use crate::{Merkleize, SSZError, SimpleDeserialize, SimpleSerialize};
    use alloc::vec;

    #[test]
    fn round_trips_fixed_size_elements() {
        let list = List::<u64, 3>::new(vec![10, 20, 30]).unwrap();
        let mut buffer = vec![];
        list.serialize(&mut buffer).unwrap();
        assert_eq!(List::<u64, 3>::deserialize(&buffer).unwrap(), list);
    }

    #[test]
    fn rejects_construction_beyond_capacity() {
        let result = List::<u8, 4>::new(vec![1u8; 5]);
        assert_eq!(result, Err(SSZError::ListTooLarge { limit: 4, got: 5 }));
    }

    #[test]
    fn empty_and_nonempty_roots_differ_by_length() {
        // S9
        let empty = List::<u8, 10>::new(vec![]).unwrap();
        let three = List::<u8, 10>::new(vec![1, 2, 3]).unwrap();
        assert_ne!(
            empty.hash_tree_root().unwrap(),
            three.hash_tree_root().unwrap()
        );
    }

    #[test]
    fn merkleize_limit_is_derived_from_capacity_not_chunk_len() {
        // regression: a naive `merkleize(&chunks, None)` would let two
        // lists with different N but the same contents hash identically.
        let a = List::<u64, 4>::new(vec![1, 2]).unwrap();
        let b = List::<u64, 200>::new(vec![1, 2]).unwrap();
        assert_ne!(a.hash_tree_root().unwrap(), b.hash_tree_root().unwrap());
    }
}
