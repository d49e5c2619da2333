//! Throughput of the Merkleization engine across collection sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ssz_core::composite::list::List;
use ssz_core::Merkleize;

fn bench_list_merkleize(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_hash_tree_root");
    for size in [32usize, 1_024, 65_536] {
        let data: List<u64, 65_536> = List::new((0..size as u64).collect()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| data.hash_tree_root().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_list_merkleize);
criterion_main!(benches);
