//! Exercises the reference-vector harness surface: a snappy-compressed
//! encoding blob alongside a human-readable YAML value, the shape
//! consensus-spec-tests ships its fixtures in. This crate does not
//! implement the fixture loader itself (schema/network-specific,
//! genuinely out of scope) — only the decode path a loader would drive.

use serde::Deserialize;
use ssz_core::composite::list::List;
use ssz_core::{Merkleize, SimpleDeserialize, SimpleSerialize};

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct CheckpointValue {
    epoch: u64,
}

fn compress(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = snap::raw::Encoder::new();
    encoder.compress_vec(bytes).expect("snappy compression never fails on valid input")
}

fn decompress(compressed: &[u8]) -> Vec<u8> {
    let mut decoder = snap::raw::Decoder::new();
    decoder
        .decompress_vec(compressed)
        .expect("well-formed snappy frame")
}

#[test]
fn decodes_snappy_compressed_ssz_blob() {
    let epoch: u64 = 123_456;
    let mut serialized = Vec::new();
    epoch.serialize(&mut serialized).unwrap();

    let compressed = compress(&serialized);
    let recovered_bytes = decompress(&compressed);
    assert_eq!(recovered_bytes, serialized);

    let recovered = u64::deserialize(&recovered_bytes).unwrap();
    assert_eq!(recovered, epoch);
}

#[test]
fn cross_checks_against_a_human_readable_value_document() {
    let yaml = "epoch: 123456\n";
    let expected: CheckpointValue = serde_yaml::from_str(yaml).unwrap();

    let mut serialized = Vec::new();
    expected.epoch.serialize(&mut serialized).unwrap();
    let decoded = u64::deserialize(&serialized).unwrap();

    assert_eq!(decoded, expected.epoch);
}

#[test]
fn decodes_a_compressed_list_and_checks_its_root() {
    let values: List<u64, 16> = List::new(vec![1, 2, 3, 4, 5]).unwrap();
    let mut serialized = Vec::new();
    values.serialize(&mut serialized).unwrap();

    let compressed = compress(&serialized);
    let recovered_bytes = decompress(&compressed);

    let recovered = List::<u64, 16>::deserialize(&recovered_bytes).unwrap();
    assert_eq!(recovered, values);
    assert_eq!(
        recovered.hash_tree_root().unwrap(),
        values.hash_tree_root().unwrap()
    );
}
