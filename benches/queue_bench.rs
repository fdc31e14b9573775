//! Criterion benchmarks for the binomial queue
//!
//! Compares [`PriorityQueue`] against the [`IndexedBinaryHeap`] baseline on
//! three workloads:
//! - `fill_drain`: insert n ids, then extract them all
//! - `decrease_key`: insert n ids, lower every priority, drain
//! - `dijkstra`: single-source shortest paths on a grid graph
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_bench
//!
//! # Only the decrease-key workload
//! cargo bench --bench queue_bench -- decrease_key
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_binomial_heap::shortest_path::dijkstra;
use indexed_binomial_heap::simple_binary::IndexedBinaryHeap;
use indexed_binomial_heap::{IndexedHeap, PriorityQueue};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, 1 << 16];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_priorities(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next_u64() % 1_000_000).collect()
}

fn fill_drain<H: IndexedHeap<u64>>(priorities: &[u64]) -> usize {
    let mut heap = H::with_universe(priorities.len());
    for (element, &priority) in priorities.iter().enumerate() {
        let _ = heap.insert(element, priority);
    }
    let mut count = 0;
    while heap.extract_min().is_some() {
        count += 1;
    }
    count
}

fn decrease_all<H: IndexedHeap<u64>>(priorities: &[u64]) -> usize {
    let mut heap = H::with_universe(priorities.len());
    for (element, &priority) in priorities.iter().enumerate() {
        let _ = heap.insert(element, priority + 1_000_000);
    }
    for (element, &priority) in priorities.iter().enumerate() {
        let _ = heap.insert(element, priority);
    }
    let mut count = 0;
    while heap.extract_min().is_some() {
        count += 1;
    }
    count
}

fn grid_graph(side: usize, seed: u64) -> Vec<Vec<(usize, u64)>> {
    let mut rng = Lcg::new(seed);
    let mut adjacency = vec![Vec::new(); side * side];
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            if x + 1 < side {
                adjacency[id].push((id + 1, 1 + rng.next_u64() % 100));
                adjacency[id + 1].push((id, 1 + rng.next_u64() % 100));
            }
            if y + 1 < side {
                adjacency[id].push((id + side, 1 + rng.next_u64() % 100));
                adjacency[id + side].push((id, 1 + rng.next_u64() % 100));
            }
        }
    }
    adjacency
}

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");
    for &n in &SIZES {
        let priorities = random_priorities(n, 0x5eed);
        group.bench_with_input(BenchmarkId::new("binomial", n), &priorities, |b, p| {
            b.iter(|| fill_drain::<PriorityQueue<u64>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("binary", n), &priorities, |b, p| {
            b.iter(|| fill_drain::<IndexedBinaryHeap<u64>>(black_box(p)))
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for &n in &SIZES {
        let priorities = random_priorities(n, 0xdec);
        group.bench_with_input(BenchmarkId::new("binomial", n), &priorities, |b, p| {
            b.iter(|| decrease_all::<PriorityQueue<u64>>(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("binary", n), &priorities, |b, p| {
            b.iter(|| decrease_all::<IndexedBinaryHeap<u64>>(black_box(p)))
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for side in [16usize, 64, 256] {
        let graph = grid_graph(side, 0x9a9);
        group.bench_with_input(BenchmarkId::new("binomial", side * side), &graph, |b, g| {
            b.iter(|| dijkstra::<u64, PriorityQueue<u64>>(black_box(g), 0))
        });
        group.bench_with_input(BenchmarkId::new("binary", side * side), &graph, |b, g| {
            b.iter(|| dijkstra::<u64, IndexedBinaryHeap<u64>>(black_box(g), 0))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fill_drain,
    bench_decrease_key,
    bench_dijkstra
);
criterion_main!(benches);
