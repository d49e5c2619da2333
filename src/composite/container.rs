//! The `Container` composite type (C4): an ordered record of named,
//! heterogeneously-typed fields, encoded with the two-cursor head/tail
//! layout described in §4.4.
//!
//! Real schemas (blocks, states, attestations, ...) are external
//! collaborators; this module only supplies [`ssz_container!`], the
//! declarative macro that turns a struct definition into the four core
//! trait impls. There is no proc-macro dependency in this stack, so the
//! macro works purely by repeating the field list the caller already
//! wrote, rather than parsing arbitrary Rust via `syn`.

/// Declares a plain struct and implements [`crate::SszTypeInfo`],
/// [`crate::SimpleSerialize`], [`crate::SimpleDeserialize`] and
/// [`crate::Merkleize`] for it per §4.4.
///
/// ```ignore
/// ssz_container! {
///     pub struct Checkpoint {
///         pub epoch: u64,
///         pub root: alloy_primitives::B256,
///     }
/// }
/// ```
#[macro_export]
macro_rules! ssz_container {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($fvis:vis $field:ident : $ftype:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $($fvis $field : $ftype),*
        }

        impl $crate::SszTypeInfo for $name {
            fn is_fixed_size() -> bool {
                $(<$ftype as $crate::SszTypeInfo>::is_fixed_size() &&)* true
            }

            fn fixed_size() -> Option<usize> {
                if <$name as $crate::SszTypeInfo>::is_fixed_size() {
                    let mut total = 0usize;
                    $(
                        total += <$ftype as $crate::SszTypeInfo>::fixed_size()
                            .unwrap_or($crate::constants::BYTES_PER_LENGTH_OFFSET);
                    )*
                    Some(total)
                } else {
                    None
                }
            }
        }

        impl $crate::SimpleSerialize for $name {
            fn serialize(
                &self,
                buffer: &mut alloc::vec::Vec<u8>,
            ) -> Result<usize, $crate::SSZError> {
                let start_len = buffer.len();

                let mut fixed_width = 0usize;
                $(
                    fixed_width += if <$ftype as $crate::SszTypeInfo>::is_fixed_size() {
                        <$ftype as $crate::SszTypeInfo>::fixed_size().unwrap()
                    } else {
                        $crate::constants::BYTES_PER_LENGTH_OFFSET
                    };
                )*

                let mut tail = alloc::vec::Vec::new();
                $(
                    if <$ftype as $crate::SszTypeInfo>::is_fixed_size() {
                        self.$field.serialize(buffer)?;
                    } else {
                        let offset = (fixed_width + tail.len()) as u32;
                        buffer.extend_from_slice(&offset.to_le_bytes());
                        self.$field.serialize(&mut tail)?;
                    }
                )*
                buffer.extend_from_slice(&tail);

                Ok(buffer.len() - start_len)
            }
        }

        impl $crate::SimpleDeserialize for $name {
            fn deserialize(data: &[u8]) -> Result<Self, $crate::SSZError> {
                let mut cursor = 0usize;
                let mut offsets: alloc::vec::Vec<usize> = alloc::vec::Vec::new();

                $(
                    let mut $field: Option<$ftype> = None;
                )*

                // Pass 1: decode fixed-size fields in place; remember
                // each variable-size field's offset without decoding it
                // yet (its slice boundary depends on the *next* offset).
                $(
                    if <$ftype as $crate::SszTypeInfo>::is_fixed_size() {
                        let width = <$ftype as $crate::SszTypeInfo>::fixed_size().unwrap();
                        let end = cursor + width;
                        if end > data.len() {
                            return Err($crate::SSZError::NotEnoughBytes {
                                expected: end,
                                got: data.len(),
                            });
                        }
                        $field = Some(<$ftype as $crate::SimpleDeserialize>::deserialize(
                            &data[cursor..end],
                        )?);
                        cursor = end;
                    } else {
                        const OFFSET_WIDTH: usize = $crate::constants::BYTES_PER_LENGTH_OFFSET;
                        let end = cursor + OFFSET_WIDTH;
                        if end > data.len() {
                            return Err($crate::SSZError::NotEnoughBytes {
                                expected: end,
                                got: data.len(),
                            });
                        }
                        let mut raw = [0u8; OFFSET_WIDTH];
                        raw.copy_from_slice(&data[cursor..end]);
                        offsets.push(u32::from_le_bytes(raw) as usize);
                        cursor = end;
                    }
                )*

                let fixed_width = cursor;
                if offsets.is_empty() && cursor != data.len() {
                    return Err($crate::SSZError::ExtraBytes {
                        expected: cursor,
                        got: data.len(),
                    });
                }

                let mut prev_offset = fixed_width;
                for &offset in &offsets {
                    if offset < prev_offset || offset > data.len() {
                        return Err($crate::SSZError::MalformedOffset {
                            reason: "container offset is out of range or non-monotonic",
                        });
                    }
                    prev_offset = offset;
                }

                // Pass 2: decode variable-size fields from the slices
                // the recorded offsets partition the tail into.
                let mut offset_index = 0usize;
                $(
                    if !<$ftype as $crate::SszTypeInfo>::is_fixed_size() {
                        let start = offsets[offset_index];
                        let slice_end = if offset_index + 1 < offsets.len() {
                            offsets[offset_index + 1]
                        } else {
                            data.len()
                        };
                        $field = Some(<$ftype as $crate::SimpleDeserialize>::deserialize(
                            &data[start..slice_end],
                        )?);
                        offset_index += 1;
                    }
                )*

                Ok($name {
                    $($field: $field.expect("decoded in one of the two passes above")),*
                })
            }
        }

        impl $crate::Merkleize for $name {
            fn hash_tree_root(&self) -> Result<alloy_primitives::B256, $crate::SSZError> {
                let mut roots: alloc::vec::Vec<[u8; 32]> = alloc::vec::Vec::new();
                $(
                    roots.push(self.$field.hash_tree_root()?.0);
                )*
                $crate::merkleization::merkleize(&roots, Some(roots.len()))
            }

            fn chunk_count() -> usize {
                let mut count = 0usize;
                $(
                    let _ = stringify!($field);
                    count += 1;
                )*
                count
            }
        }
    };
}
