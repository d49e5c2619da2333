//! Serialization, deserialization and Merkleization for `bool`.

use alloc::vec::Vec;
use alloy_primitives::B256;

use crate::{Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};

impl SimpleSerialize for bool {
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        buffer.push(if *self { 1 } else { 0 });
        Ok(1)
    }
}

impl SimpleDeserialize for bool {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        if data.len() != 1 {
            return Err(SSZError::NotEnoughBytes {
                expected: 1,
                got: data.len(),
            });
        }
        match data[0] {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(SSZError::InvalidBool { byte }),
        }
    }
}

impl SszTypeInfo for bool {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(1)
    }

    fn is_basic_type() -> bool {
        true
    }
}

impl Merkleize for bool {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let mut chunk = [0u8; 32];
        if *self {
            chunk[0] = 1;
        }
        Ok(B256::from(chunk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn serialize_is_one_byte() {
        let mut buffer = vec![];
        true.serialize(&mut buffer).unwrap();
        assert_eq!(buffer, vec![1]);

        let mut buffer = vec![];
        false.serialize(&mut buffer).unwrap();
        assert_eq!(buffer, vec![0]);
    }

    #[test]
    fn deserialize_rejects_non_canonical_byte() {
        assert_eq!(bool::deserialize(&[1]), Ok(true));
        assert_eq!(bool::deserialize(&[0]), Ok(false));
        assert_eq!(
            bool::deserialize(&[2]),
            Err(SSZError::InvalidBool { byte: 2 })
        );
    }

    #[test]
    fn deserialize_rejects_wrong_length() {
        assert_eq!(
            bool::deserialize(&[]),
            Err(SSZError::NotEnoughBytes {
                expected: 1,
                got: 0
            })
        );
        assert_eq!(
            bool::deserialize(&[1, 0]),
            Err(SSZError::NotEnoughBytes {
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn hash_tree_root_matches_spec_examples() {
        // S8
        assert_eq!(false.hash_tree_root().unwrap(), B256::ZERO);
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(true.hash_tree_root().unwrap(), B256::from(expected));
    }
}
