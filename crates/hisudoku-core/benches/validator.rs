//! Benchmarks for board parsing and validation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench validator
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hisudoku_core::{Grid, is_board_valid, is_sudoku_string_valid_board, is_well_formed};

const BOARDS: [(&str, &str); 3] = [
    (
        "puzzle",
        "530.070.000;600.195.000;098.000.060;800.060.003;400.803.001;700.020.006;060.000.280;000.419.005;000.080.079;",
    ),
    (
        "solution",
        "534.678.912;672.195.348;198.342.567;859.761.423;426.853.791;713.924.856;961.537.284;287.419.635;345.286.179;",
    ),
    (
        "empty",
        "000.000.000;000.000.000;000.000.000;000.000.000;000.000.000;000.000.000;000.000.000;000.000.000;000.000.000;",
    ),
];

fn bench_is_well_formed(c: &mut Criterion) {
    for (param, text) in BOARDS {
        c.bench_with_input(BenchmarkId::new("is_well_formed", param), &text, |b, text| {
            b.iter(|| is_well_formed(hint::black_box(text)));
        });
    }
}

fn bench_is_sudoku_string_valid_board(c: &mut Criterion) {
    for (param, text) in BOARDS {
        c.bench_with_input(
            BenchmarkId::new("is_sudoku_string_valid_board", param),
            &text,
            |b, text| {
                b.iter(|| is_sudoku_string_valid_board(hint::black_box(text)));
            },
        );
    }
}

fn bench_is_board_valid(c: &mut Criterion) {
    for (param, text) in BOARDS {
        let grid = text.parse::<Grid>().unwrap();
        c.bench_with_input(BenchmarkId::new("is_board_valid", param), &grid, |b, grid| {
            b.iter(|| is_board_valid(hint::black_box(grid)));
        });
    }
}

criterion_group!(
    benches,
    bench_is_well_formed,
    bench_is_sudoku_string_valid_board,
    bench_is_board_valid
);
criterion_main!(benches);
