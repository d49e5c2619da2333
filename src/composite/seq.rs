//! Shared head/tail encoding for homogeneous element sequences (C3).
//!
//! [`Vector<T, N>`](super::vector) and [`List<T, N>`](super::list) differ
//! only in whether a length check against `N` happens before or after
//! decoding; the two-cursor fixed/variable layout itself is identical,
//! so it lives here once instead of twice.

use crate::constants::BYTES_PER_LENGTH_OFFSET;
use crate::{SSZError, SimpleDeserialize, SimpleSerialize, SszTypeInfo};
use alloc::vec::Vec;

/// Appends the SSZ encoding of `items` to `buffer`.
///
/// Fixed-size elements are concatenated directly. Variable-size elements
/// are preceded by one 4-byte offset per element (the "head"), each
/// pointing into the concatenated element encodings that follow (the
/// "tail").
pub(crate) fn serialize<T: SimpleSerialize + SszTypeInfo>(
    items: &[T],
    buffer: &mut Vec<u8>,
) -> Result<usize, SSZError> {
    let start_len = buffer.len();

    if T::is_fixed_size() {
        for item in items {
            item.serialize(buffer)?;
        }
    } else {
        let head_len = items.len() * BYTES_PER_LENGTH_OFFSET;
        let mut tails = Vec::with_capacity(items.len());
        for item in items {
            let mut tail = Vec::new();
            item.serialize(&mut tail)?;
            tails.push(tail);
        }

        let mut offset = head_len;
        for tail in &tails {
            buffer.extend_from_slice(&(offset as u32).to_le_bytes());
            offset += tail.len();
        }
        for tail in tails {
            buffer.extend_from_slice(&tail);
        }
    }

    Ok(buffer.len() - start_len)
}

fn read_offset(data: &[u8], at: usize) -> Result<usize, SSZError> {
    let end = at + BYTES_PER_LENGTH_OFFSET;
    if end > data.len() {
        return Err(SSZError::NotEnoughBytes {
            expected: end,
            got: data.len(),
        });
    }
    let mut bytes = [0u8; BYTES_PER_LENGTH_OFFSET];
    bytes.copy_from_slice(&data[at..end]);
    let offset = u32::from_le_bytes(bytes) as usize;
    if offset > data.len() {
        return Err(SSZError::OffsetOutOfBounds {
            offset,
            len: data.len(),
        });
    }
    Ok(offset)
}

/// Decodes `data` as a sequence of `T`, inferring the element count from
/// the layout itself: `data.len() / fixed_size` for fixed-size elements,
/// or `first_offset / BYTES_PER_LENGTH_OFFSET` for variable-size ones.
///
/// Callers (`Vector<T, N>`, `List<T, N>`) are responsible for checking
/// the returned length against `N`.
pub(crate) fn deserialize<T: SimpleDeserialize + SszTypeInfo>(
    data: &[u8],
) -> Result<Vec<T>, SSZError> {
    if T::is_fixed_size() {
        let size = T::fixed_size().expect("fixed-size type reports a concrete width");
        if size == 0 {
            return if data.is_empty() {
                Ok(Vec::new())
            } else {
                Err(SSZError::ExtraBytes {
                    expected: 0,
                    got: data.len(),
                })
            };
        }
        if data.len() % size != 0 {
            return Err(SSZError::NotEnoughBytes {
                expected: data.len().div_ceil(size) * size,
                got: data.len(),
            });
        }
        let count = data.len() / size;
        let mut out = Vec::with_capacity(count);
        for i in 0..count {
            out.push(T::deserialize(&data[i * size..(i + 1) * size])?);
        }
        return Ok(out);
    }

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let first_offset = read_offset(data, 0)?;
    if first_offset % BYTES_PER_LENGTH_OFFSET != 0 {
        return Err(SSZError::MalformedOffset {
            reason: "first offset is not a multiple of the offset width",
        });
    }
    let count = first_offset / BYTES_PER_LENGTH_OFFSET;
    if first_offset > data.len() {
        return Err(SSZError::OffsetOutOfBounds {
            offset: first_offset,
            len: data.len(),
        });
    }

    let mut offsets = Vec::with_capacity(count);
    offsets.push(first_offset);
    for i in 1..count {
        offsets.push(read_offset(data, i * BYTES_PER_LENGTH_OFFSET)?);
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let start = offsets[i];
        let end = if i + 1 < count {
            offsets[i + 1]
        } else {
            data.len()
        };
        if start > end {
            return Err(SSZError::MalformedOffset {
                reason: "offsets are not monotonically non-decreasing",
            });
        }
        out.push(T::deserialize(&data[start..end])?);
    }
    Ok(out)
}
