//! Benchmark cost search performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use urja_path::{BLOCKED, CostGrid, CostSearch};

/// Deterministic grid with scattered blocks that never seal the goal.
fn patterned_grid(size: usize) -> CostGrid {
    let cells = (0..size * size)
        .map(|i| {
            let (r, c) = (i / size, i % size);
            if r % 7 == 3 && c % 5 == 2 && r + 1 < size {
                BLOCKED
            } else {
                ((r * 31 + c * 17) % 9) as i32
            }
        })
        .collect();
    CostGrid::from_cells(size, size, cells).expect("valid grid")
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_search");

    for size in [16, 64, 256] {
        let grid = patterned_grid(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| CostSearch::with_defaults(black_box(grid)).search())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
