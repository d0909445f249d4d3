//! Weighted trie benchmarks
//!
//! Benchmarks for parsing, writing, union, path compression and leaf
//! iteration, using the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, SamplingMode,
    Throughput,
};
use std::time::Duration;

use weighted_trie::format::{parse_str, to_text};
use weighted_trie::{NodeId, Trie};

/// Builds a complete trie with `fanout` children per node down to `depth`.
fn build_trie(fanout: i64, depth: usize, offset: f64) -> Trie<i64> {
    fn grow(trie: &mut Trie<i64>, parent: NodeId, fanout: i64, depth: usize, offset: f64) {
        for label in 0..fanout {
            if depth == 1 {
                let weight = offset + label as f64 * 0.5;
                trie.insert_child(parent, label, weight)
                    .expect("labels are distinct");
            } else {
                let child = trie
                    .insert_child(parent, label, 0.0)
                    .expect("labels are distinct");
                grow(trie, child, fanout, depth - 1, offset);
            }
        }
    }

    let mut trie = Trie::new();
    let root = trie.root_id();
    grow(&mut trie, root, fanout, depth, offset);
    trie
}

/// Builds a trie of `count` single-child chains of the given length.
fn build_chains(count: i64, length: usize) -> Trie<i64> {
    let mut trie = Trie::new();
    let root = trie.root_id();
    for start in 0..count {
        let mut node = trie
            .insert_child(root, start * 1000, 0.0)
            .expect("labels are distinct");
        for step in 1..length {
            let weight = if step + 1 == length { 1.0 } else { 0.0 };
            node = trie
                .insert_child(node, step as i64, weight)
                .expect("single child");
        }
    }
    trie
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for depth in [2usize, 4, 6].iter() {
        let trie = build_trie(4, *depth, 1.0);
        let text = to_text(&trie);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", depth), &text, |b, text| {
            b.iter(|| {
                let parsed: Trie<i64> = parse_str(black_box(text)).expect("valid text");
                parsed
            });
        });

        group.bench_with_input(BenchmarkId::new("write", depth), &trie, |b, trie| {
            b.iter(|| to_text(black_box(trie)));
        });
    }

    group.finish();
}

fn bench_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("union");
    group.sample_size(50);

    for depth in [2usize, 4, 6].iter() {
        let left = build_trie(4, *depth, 1.0);
        let right = build_trie(4, *depth, 2.0);
        group.throughput(Throughput::Elements(left.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("overlapping", depth),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| black_box(left) + black_box(right));
            },
        );
    }

    let leaf = Trie::leaf(0.5);
    let wide = build_trie(8, 4, 1.0);
    group.bench_function("broadcast_leaf", |b| {
        b.iter_batched(
            || wide.clone(),
            |mut trie| {
                trie += &leaf;
                trie
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    group.sample_size(50);

    for length in [2usize, 8, 32].iter() {
        let chains = build_chains(64, *length);
        group.throughput(Throughput::Elements(chains.len() as u64));
        group.bench_with_input(BenchmarkId::new("chains", length), &chains, |b, trie| {
            b.iter(|| black_box(trie).compressed().expect("no collisions"));
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for depth in [2usize, 4, 6].iter() {
        let trie = build_trie(4, *depth, 1.0);
        group.throughput(Throughput::Elements(trie.leaf_count() as u64));

        group.bench_with_input(BenchmarkId::new("leaves", depth), &trie, |b, trie| {
            b.iter(|| black_box(trie).leaves().map(|leaf| leaf.weight()).sum::<f64>());
        });

        group.bench_with_input(BenchmarkId::new("max_leaf", depth), &trie, |b, trie| {
            b.iter(|| black_box(trie).max_leaf().map(|leaf| leaf.id()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_format,
    bench_union,
    bench_compress,
    bench_traversal
);
criterion_main!(benches);
