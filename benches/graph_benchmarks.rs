use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::{props, Graph, MultiGraph};

fn ring(size: u64) -> Graph<u64> {
    let mut g = Graph::new();
    for i in 0..size {
        g.add_edge(i, (i + 1) % size, props! { "weight" => (i % 10) as i64 })
            .unwrap();
    }
    g
}

/// Benchmark edge insertion throughput
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100u64, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| criterion::black_box(ring(size)));
        });
    }
    group.finish();
}

/// Benchmark parallel edge insertion, which probes for a free key each time
fn bench_multigraph_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("multigraph_keys");

    for parallel in [10u64, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(parallel), parallel, |b, &parallel| {
            b.iter(|| {
                let mut m = MultiGraph::new();
                for _ in 0..parallel {
                    m.add_edge(0u64, 1u64, None, props! {}).unwrap();
                }
                criterion::black_box(m.number_of_edges());
            });
        });
    }
    group.finish();
}

/// Benchmark weighted degree over every node
fn bench_degrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_degrees");

    for size in [100u64, 1000, 10_000].iter() {
        let mut g = ring(*size);
        for i in (0..*size).step_by(7) {
            g.add_edge(i, i, props! { "weight" => 1i64 }).unwrap();
        }
        let g = Graph::from_multigraph(&MultiGraph::from_graph(&g));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let total: f64 = g.nodes().filter_map(|n| g.degree_with(n, Some("weight"))).sum();
                criterion::black_box(total);
            });
        });
    }
    group.finish();
}

/// Benchmark deep-copying conversions
fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");
    let g = ring(10_000);

    group.bench_function("copy", |b| b.iter(|| criterion::black_box(g.copy())));
    group.bench_function("to_directed", |b| b.iter(|| criterion::black_box(g.to_directed())));
    group.bench_function("to_multigraph", |b| {
        b.iter(|| criterion::black_box(MultiGraph::from_graph(&g)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_multigraph_keys,
    bench_degrees,
    bench_conversions
);
criterion_main!(benches);
