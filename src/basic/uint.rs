//! Serialization, deserialization and Merkleization for unsigned integers.

use crate::constants::BYTES_PER_U256;
use crate::{Merkleize, SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use alloc::vec::Vec;
use alloy_primitives::{B256, U256};

macro_rules! impl_uint {
    ($type:ty, $bytes:expr) => {
        impl SimpleSerialize for $type {
            /// Little-endian, exactly `$bytes` bytes.
            fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
                let bytes: [u8; $bytes] = self.to_le_bytes();
                buffer.extend_from_slice(&bytes);
                Ok(bytes.len())
            }
        }

        impl SimpleDeserialize for $type {
            fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
                if data.len() != $bytes {
                    return Err(SSZError::NotEnoughBytes {
                        expected: $bytes,
                        got: data.len(),
                    });
                }
                let mut bytes = [0u8; $bytes];
                bytes.copy_from_slice(data);
                Ok(Self::from_le_bytes(bytes))
            }
        }

        impl SszTypeInfo for $type {
            fn is_fixed_size() -> bool {
                true
            }

            fn fixed_size() -> Option<usize> {
                Some($bytes)
            }

            fn is_basic_type() -> bool {
                true
            }
        }

        impl Merkleize for $type {
            fn hash_tree_root(&self) -> Result<B256, SSZError> {
                let bytes = self.to_le_bytes();
                let mut buf = [0u8; 32];
                buf[..$bytes].copy_from_slice(&bytes);
                Ok(B256::from(buf))
            }
        }
    };
}

impl_uint!(u8, 1);
impl_uint!(u16, 2);
impl_uint!(u32, 4);
impl_uint!(u64, 8);
impl_uint!(u128, 16);

impl SimpleSerialize for U256 {
    fn serialize(&self, buffer: &mut Vec<u8>) -> Result<usize, SSZError> {
        let bytes: [u8; BYTES_PER_U256] = self.to_le_bytes();
        buffer.extend_from_slice(&bytes);
        Ok(bytes.len())
    }
}

impl SimpleDeserialize for U256 {
    fn deserialize(data: &[u8]) -> Result<Self, SSZError> {
        if data.len() != BYTES_PER_U256 {
            return Err(SSZError::NotEnoughBytes {
                expected: BYTES_PER_U256,
                got: data.len(),
            });
        }
        let mut bytes = [0u8; BYTES_PER_U256];
        bytes.copy_from_slice(data);
        Ok(U256::from_le_bytes(bytes))
    }
}

impl SszTypeInfo for U256 {
    fn is_fixed_size() -> bool {
        true
    }

    fn fixed_size() -> Option<usize> {
        Some(BYTES_PER_U256)
    }

    fn is_basic_type() -> bool {
        true
    }
}

impl Merkleize for U256 {
    fn hash_tree_root(&self) -> Result<B256, SSZError> {
        let bytes: [u8; BYTES_PER_U256] = self.to_le_bytes();
        Ok(B256::from(bytes))
    }
}
