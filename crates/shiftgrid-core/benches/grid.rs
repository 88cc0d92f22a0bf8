//! Micro-benchmarks for grid rotations and the solved check.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench grid
//! ```

use std::{hint, num::NonZero};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use shiftgrid_core::{Direction, Grid};

fn grids() -> [(&'static str, Grid); 3] {
    let square = |n: u16| NonZero::new(n).unwrap();
    [
        ("5x7", Grid::default()),
        ("16x16", Grid::new(square(16), square(16))),
        ("64x64", Grid::new(square(64), square(64))),
    ]
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");
    for (param, grid) in grids() {
        // The last tile sits at the far end of the row-major scan.
        let tile = u32::try_from(grid.tiles().len()).unwrap();
        for direction in Direction::ALL {
            group.bench_with_input(
                BenchmarkId::new(direction.to_string(), param),
                &grid,
                |b, grid| {
                    b.iter_batched_ref(
                        || grid.clone(),
                        |grid| grid.shift(hint::black_box(direction), hint::black_box(tile)),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_is_solved(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_solved");
    for (param, grid) in grids() {
        group.bench_with_input(BenchmarkId::from_parameter(param), &grid, |b, grid| {
            b.iter(|| hint::black_box(grid).is_solved());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shift, bench_is_solved);
criterion_main!(benches);
