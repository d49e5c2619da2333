//! SSZ Merkleization engine (C5): chunking, padding, tree-hashing, the
//! zero-hash table, and length mixing.

use crate::SSZError;
use crate::constants::{BITS_PER_BYTE, BYTES_PER_CHUNK, ZERO_HASH_DEPTH};
use alloc::boxed::Box;
use alloc::vec::Vec;
use alloy_primitives::B256;
use once_cell::race::OnceBox;
use sha2::{Digest, Sha256};

/// Below this many chunks, splitting the work across the pool costs more
/// in task-spawn overhead than it saves; sequential wins.
#[cfg(feature = "parallel")]
const PARALLEL_CHUNK_THRESHOLD: usize = 1024;

/// Type-level metadata `chunk_count` needs to compute a Merkleization
/// limit (§4.5 "Limit (tree depth)"). Mirrors the SSZ type taxonomy; the
/// core never stores one of these, callers build one on the fly.
pub enum SSZType {
    Basic { size: usize },
    BitList { limit: usize },
    BitVector { len: usize },
    ListBasic { elem_size: usize, limit: usize },
    VectorBasic { elem_size: usize, count: usize },
    ListComposite { limit: usize },
    VectorComposite { count: usize },
    Container { field_count: usize },
}

/// Returns the Merkleization limit (in chunks) for a given SSZ type shape.
pub fn chunk_count(ty: SSZType) -> usize {
    match ty {
        SSZType::Basic { .. } => 1,
        SSZType::BitList { limit } => limit.div_ceil(BITS_PER_BYTE * BYTES_PER_CHUNK),
        SSZType::BitVector { len } => len.div_ceil(BITS_PER_BYTE * BYTES_PER_CHUNK),
        SSZType::ListBasic { elem_size, limit } => (limit * elem_size).div_ceil(BYTES_PER_CHUNK),
        SSZType::VectorBasic { elem_size, count } => (count * elem_size).div_ceil(BYTES_PER_CHUNK),
        SSZType::ListComposite { limit } => limit,
        SSZType::VectorComposite { count } => count,
        SSZType::Container { field_count } => field_count,
    }
}

/// Returns the smallest power of two `>= i` (0 and 1 both map to 1).
pub fn next_pow_of_two(i: usize) -> usize {
    if i <= 1 {
        1
    } else {
        1 << (usize::BITS - (i - 1).leading_zeros())
    }
}

/// `ceil(log2(max(n, 1)))` — the tree depth for a Merkleization limit of
/// `n` chunks.
fn depth_for(n: usize) -> usize {
    next_pow_of_two(n).trailing_zeros() as usize
}

/// The minimal buffer size, in chunks, needed to hold a sparse Merkle
/// tree of `chunk_count` leaves hashed to `depth` — cheaper to compute by
/// looping than to allocate the full `2 * chunk_count` worst case.
pub fn compute_tree_size(mut chunk_count: usize, depth: usize) -> usize {
    let mut total = 0usize;
    for _ in 0..depth {
        if chunk_count % 2 == 1 {
            chunk_count += 1;
        }
        chunk_count /= 2;
        total += chunk_count;
    }
    total
}

fn hash_pair(left: &[u8; BYTES_PER_CHUNK], right: &[u8; BYTES_PER_CHUNK]) -> [u8; BYTES_PER_CHUNK] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let digest = hasher.finalize();
    let mut out = [0u8; BYTES_PER_CHUNK];
    out.copy_from_slice(&digest);
    out
}

/// The process-wide table of zero-subtree roots: `zero_hash[0] == [0; 32]`
/// and `zero_hash[d] == H(zero_hash[d-1] || zero_hash[d-1])`. Built once,
/// on first use, behind a lock-free cell safe for concurrent readers.
fn zero_hashes() -> &'static [[u8; BYTES_PER_CHUNK]; ZERO_HASH_DEPTH + 1] {
    static TABLE: OnceBox<[[u8; BYTES_PER_CHUNK]; ZERO_HASH_DEPTH + 1]> = OnceBox::new();
    TABLE.get_or_init(|| {
        let mut table = [[0u8; BYTES_PER_CHUNK]; ZERO_HASH_DEPTH + 1];
        for i in 1..=ZERO_HASH_DEPTH {
            table[i] = hash_pair(&table[i - 1], &table[i - 1]);
        }
        Box::new(table)
    })
}

/// The root of an all-zero subtree of the given depth.
pub fn zero_hash(depth: usize) -> [u8; BYTES_PER_CHUNK] {
    zero_hashes()[depth.min(ZERO_HASH_DEPTH)]
}

/// Packs a little-endian byte encoding into 32-byte chunks, zero-padding
/// the final chunk. Used for basic-type vectors/lists and, with the
/// sentinel bit already cleared by the caller, for bitvectors/bitlists.
pub fn pack(bytes: &[u8]) -> Vec<[u8; BYTES_PER_CHUNK]> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(bytes.len().div_ceil(BYTES_PER_CHUNK));
    for chunk in bytes.chunks(BYTES_PER_CHUNK) {
        let mut buf = [0u8; BYTES_PER_CHUNK];
        buf[..chunk.len()].copy_from_slice(chunk);
        out.push(buf);
    }
    out
}

/// [`pack`], guaranteeing at least one (zero) chunk — an empty basic
/// vector/list still hashes against the single-chunk case rather than
/// the "no chunks at all" case.
pub fn pack_basic_elements(serialized: &[u8]) -> Vec<[u8; BYTES_PER_CHUNK]> {
    let mut chunks = pack(serialized);
    if chunks.is_empty() {
        chunks.push([0u8; BYTES_PER_CHUNK]);
    }
    chunks
}

fn chunk_at(buf: &[u8], index: usize) -> [u8; BYTES_PER_CHUNK] {
    let mut out = [0u8; BYTES_PER_CHUNK];
    out.copy_from_slice(&buf[index * BYTES_PER_CHUNK..(index + 1) * BYTES_PER_CHUNK]);
    out
}

/// Hashes one level of the tree, writing the (shorter) output back into
/// the front of `buf` in place. Safe because the output index never
/// overtakes the input index it reads from.
fn hash_level(buf: &mut Vec<u8>, level_len: usize, level: usize) -> usize {
    let pairs = level_len.div_ceil(2);
    for p in 0..pairs {
        let left = chunk_at(buf, 2 * p);
        let right_index = 2 * p + 1;
        let right = if right_index < level_len {
            chunk_at(buf, right_index)
        } else {
            zero_hash(level)
        };
        let hashed = hash_pair(&left, &right);
        buf[p * BYTES_PER_CHUNK..(p + 1) * BYTES_PER_CHUNK].copy_from_slice(&hashed);
    }
    buf.truncate(pairs * BYTES_PER_CHUNK);
    pairs
}

/// Tree-hashes `chunks` to the given `depth` sequentially, on the calling
/// thread. Implements §4.5 steps 1-4 plus the in-place layering from the
/// "Layout optimizations" subsection.
fn merkleize_sequential(chunks: &[[u8; BYTES_PER_CHUNK]], depth: usize) -> [u8; BYTES_PER_CHUNK] {
    if depth == 0 {
        return chunks.first().copied().unwrap_or([0u8; BYTES_PER_CHUNK]);
    }
    if chunks.is_empty() {
        return zero_hash(depth);
    }

    let mut buf = Vec::with_capacity(chunks.len() * BYTES_PER_CHUNK);
    for c in chunks {
        buf.extend_from_slice(c);
    }

    let mut level_len = chunks.len();
    for level in 0..depth {
        level_len = hash_level(&mut buf, level_len, level);
    }
    chunk_at(&buf, 0)
}

#[cfg(feature = "parallel")]
fn merkleize_dispatch(chunks: &[[u8; BYTES_PER_CHUNK]], depth: usize, workers: usize) -> [u8; BYTES_PER_CHUNK] {
    if chunks.is_empty() {
        return if depth == 0 {
            [0u8; BYTES_PER_CHUNK]
        } else {
            zero_hash(depth)
        };
    }
    if workers <= 1 || depth == 0 || chunks.len() < PARALLEL_CHUNK_THRESHOLD {
        return merkleize_sequential(chunks, depth);
    }

    let half_size = (next_pow_of_two(chunks.len()) / 2).clamp(1, chunks.len());
    if half_size >= chunks.len() {
        return merkleize_sequential(chunks, depth);
    }

    let (first, second) = chunks.split_at(half_size);
    let sub_depth = depth_for(half_size);
    let next_workers = (workers / 2).max(1);

    // The split boundary is a fixed function of `chunks.len()`, not of
    // scheduling, so the combined root is identical regardless of worker
    // count (§5 "Ordering").
    let (left_root, right_root) = rayon::join(
        || merkleize_dispatch(first, sub_depth, next_workers),
        || merkleize_dispatch(second, sub_depth, next_workers),
    );

    let mut combined = hash_pair(&left_root, &right_root);
    for level in (sub_depth + 1)..depth {
        combined = hash_pair(&combined, &zero_hash(level));
    }
    combined
}

/// Tree-hashes a chunk sequence to `depth`, bit-identically whether or
/// not the `parallel` feature is enabled.
fn merkleize_to_depth(chunks: &[[u8; BYTES_PER_CHUNK]], depth: usize) -> [u8; BYTES_PER_CHUNK] {
    #[cfg(feature = "parallel")]
    {
        merkleize_dispatch(chunks, depth, rayon::current_num_threads())
    }
    #[cfg(not(feature = "parallel"))]
    {
        merkleize_sequential(chunks, depth)
    }
}

/// Merkleizes a chunk sequence, optionally enforcing a Merkleization
/// `limit` (in chunks). Returns [`SSZError::LimitExceeded`] if the chunk
/// count overruns the limit — a caller bug per §4.5 "Failure semantics".
pub fn merkleize(chunks: &[[u8; BYTES_PER_CHUNK]], limit: Option<usize>) -> Result<B256, SSZError> {
    if let Some(limit) = limit {
        if chunks.len() > limit {
            return Err(SSZError::LimitExceeded {
                limit,
                count: chunks.len(),
            });
        }
    }
    let limit_chunks = limit.unwrap_or(chunks.len());
    let depth = depth_for(limit_chunks.max(1));
    Ok(B256::from(merkleize_to_depth(chunks, depth)))
}

/// Mixes a logical length into a Merkle root (lists and bitlists).
pub fn mix_in_length(root: B256, len: usize) -> B256 {
    let mut len_chunk = [0u8; BYTES_PER_CHUNK];
    len_chunk[..8].copy_from_slice(&(len as u64).to_le_bytes());
    B256::from(hash_pair(root.as_ref(), &len_chunk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_pow_of_two_matches_spec_examples() {
        assert_eq!(next_pow_of_two(0), 1);
        assert_eq!(next_pow_of_two(1), 1);
        assert_eq!(next_pow_of_two(2), 2);
        assert_eq!(next_pow_of_two(3), 4);
        assert_eq!(next_pow_of_two(20 * 8 / 32), 8);
    }

    #[test]
    fn zero_hash_one_is_hash_of_two_zero_chunks() {
        // S8: zero_hash[1] == H(zero_hash[0] || zero_hash[0])
        let expected = hash_pair(&[0u8; 32], &[0u8; 32]);
        assert_eq!(zero_hash(1), expected);
        assert_eq!(zero_hash(0), [0u8; 32]);
    }

    #[test]
    fn hash_tree_root_of_zero_u64_is_all_zero_chunk() {
        // S8: hash_tree_root(0_u64) = 32 zero bytes
        let chunks = pack_basic_elements(&0u64.to_le_bytes());
        let root = merkleize(&chunks, Some(1)).unwrap();
        assert_eq!(root, B256::ZERO);
    }

    #[test]
    fn merkleize_empty_list_mixes_in_zero_length() {
        // S9: hash_tree_root(List<u64,20>[]) == H(zero_hash[log2(20*8/32)] || u256_le(0))
        let limit = chunk_count(SSZType::ListBasic {
            elem_size: 8,
            limit: 20,
        });
        let depth = depth_for(limit);
        let root = merkleize(&[], Some(limit)).unwrap();
        assert_eq!(root, B256::from(zero_hash(depth)));

        let mixed = mix_in_length(root, 0);
        let expected = B256::from(hash_pair(&zero_hash(depth), &[0u8; 32]));
        assert_eq!(mixed, expected);
    }

    #[test]
    fn limit_exceeded_is_reported() {
        let chunks = alloc::vec![[1u8; 32]; 5];
        let err = merkleize(&chunks, Some(4)).unwrap_err();
        assert_eq!(err, SSZError::LimitExceeded { limit: 4, count: 5 });
    }

    #[test]
    fn odd_level_pairs_with_zero_hash_not_self_copy() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        let c = [3u8; 32];
        let root = merkleize(&[a, b, c], None).unwrap();

        let ab = hash_pair(&a, &b);
        let c_zero = hash_pair(&c, &zero_hash(0));
        let expected = hash_pair(&ab, &c_zero);
        assert_eq!(root, B256::from(expected));
    }

    #[test]
    fn compute_tree_size_is_positive_for_nonempty_input() {
        let depth = depth_for(9);
        assert!(compute_tree_size(9, depth) > 0);
        let root = merkleize(&alloc::vec![[7u8; 32]; 9], None).unwrap();
        assert_ne!(root, B256::ZERO);
    }
}
