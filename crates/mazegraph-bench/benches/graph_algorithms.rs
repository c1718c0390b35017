//! Graph benchmarks (construction, `find_minimum_spanning_tree`,
//! `find_shortest_path_between`).
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazegraph_bench::{GridFixture, GridGraph, SizeTier, generate_grid};

struct Setup {
    fixture: GridFixture,
    graph: GridGraph,
}

fn setup(tier: SizeTier) -> Setup {
    let fixture = generate_grid(&tier.config(42));
    let graph = fixture.build().expect("builds");
    Setup { fixture, graph }
}

const TIERS: [(&str, SizeTier); 4] = [
    ("S", SizeTier::Small),
    ("M", SizeTier::Medium),
    ("L", SizeTier::Large),
    ("XL", SizeTier::XLarge),
];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for (name, tier) in TIERS {
        let fixture = generate_grid(&tier.config(42));
        group.bench_function(BenchmarkId::new("grid", name), |b| {
            b.iter(|| fixture.build().expect("builds"));
        });
    }
    group.finish();
}

fn bench_spanning_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimum_spanning_tree");
    group.sample_size(20);
    for (name, tier) in TIERS {
        let s = setup(tier);
        group.bench_function(BenchmarkId::new("grid", name), |b| {
            b.iter(|| s.graph.find_minimum_spanning_tree());
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    group.sample_size(20);
    for (name, tier) in TIERS {
        let s = setup(tier);
        let start = s.fixture.first_cell();
        let end = s.fixture.last_cell();

        group.bench_function(BenchmarkId::new("corner_to_corner", name), |b| {
            b.iter(|| {
                s.graph
                    .find_shortest_path_between(&start, &end)
                    .expect("grid is connected")
            });
        });

        // A maze carved from the spanning tree has exactly one route.
        let tree = s.graph.find_minimum_spanning_tree();
        let maze = GridGraph::new(s.fixture.cells.iter().copied(), tree).expect("builds");
        group.bench_function(BenchmarkId::new("carved_maze", name), |b| {
            b.iter(|| {
                maze.find_shortest_path_between(&start, &end)
                    .expect("maze is connected")
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_spanning_tree,
    bench_shortest_path
);
criterion_main!(benches);
