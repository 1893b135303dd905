use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use redblacktree::RedBlackTree;
use std::collections::BTreeSet;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn shuffled_keys(size: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(0xbee5);
    let mut keys: Vec<u64> = (0..size as u64).collect();
    keys.shuffle(&mut rng);
    keys
}

fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_shuffled");

    for &size in &SIZES {
        let keys = shuffled_keys(size);

        group.bench_with_input(BenchmarkId::new("redblacktree", size), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for &key in keys {
                    let _ = tree.insert(key);
                }
                black_box(tree)
            })
        });

        group.bench_with_input(BenchmarkId::new("btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                let mut set = BTreeSet::new();
                for &key in keys {
                    set.insert(key);
                }
                black_box(set)
            })
        });
    }

    group.finish();
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_hits");

    for &size in &SIZES {
        let keys = shuffled_keys(size);
        let tree: RedBlackTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("redblacktree", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys.iter().take(1_000) {
                    black_box(tree.contains(key));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("btreeset", size), &keys, |b, keys| {
            b.iter(|| {
                for key in keys.iter().take(1_000) {
                    black_box(set.contains(key));
                }
            })
        });
    }

    group.finish();
}

fn delete_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_all_shuffled");

    for &size in &SIZES[..2] {
        let keys = shuffled_keys(size);
        let tree: RedBlackTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(BenchmarkId::new("redblacktree", size), &keys, |b, keys| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for key in keys.iter().rev() {
                        let _ = tree.delete(key);
                    }
                    tree
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("btreeset", size), &keys, |b, keys| {
            b.iter_batched(
                || set.clone(),
                |mut set| {
                    for key in keys.iter().rev() {
                        set.remove(key);
                    }
                    set
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn iteration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_iteration");

    for &size in &SIZES {
        let keys = shuffled_keys(size);
        let tree: RedBlackTree<u64> = keys.iter().copied().collect();
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("redblacktree", size), |b| {
            b.iter(|| black_box(tree.iter().sum::<u64>()))
        });
        group.bench_function(BenchmarkId::new("btreeset", size), |b| {
            b.iter(|| black_box(set.iter().sum::<u64>()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    insert_benchmark,
    lookup_benchmark,
    delete_benchmark,
    iteration_benchmark
);
criterion_main!(benches);
