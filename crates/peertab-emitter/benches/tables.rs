//! Benchmarks for table building and serialization.
//!
//! # Benchmarks
//!
//! - **`build_index`**: Resolves the peers of all 81 cells into an `IndexTable`.
//! - **`build_mask`**: Builds the padded `MaskTable` for each layout below.
//! - **`emit`**: Builds and serializes all tables as C source.
//!
//! Each benchmark runs in both `Serial` and `Parallel` build modes, so the
//! rayon overhead on such a small workload stays visible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench tables
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use peertab_emitter::{BuildMode, Emitter, Format, IndexTable, MaskLayout, MaskTable};

const MODES: [(&str, BuildMode); 2] = [
    ("serial", BuildMode::Serial),
    ("parallel", BuildMode::Parallel),
];

fn bench_build_index(c: &mut Criterion) {
    for (name, mode) in MODES {
        c.bench_with_input(BenchmarkId::new("build_index", name), &mode, |b, &mode| {
            b.iter(|| IndexTable::build(hint::black_box(mode)));
        });
    }
}

fn bench_build_mask(c: &mut Criterion) {
    let layouts = [
        ("sse", MaskLayout::new(8, 16).unwrap()),
        ("avx2", MaskLayout::AVX2),
        ("avx512", MaskLayout::new(32, 64).unwrap()),
    ];
    for (layout_name, layout) in layouts {
        for (mode_name, mode) in MODES {
            c.bench_with_input(
                BenchmarkId::new("build_mask", format!("{layout_name}_{mode_name}")),
                &(layout, mode),
                |b, &(layout, mode)| {
                    b.iter(|| MaskTable::build(hint::black_box(layout), mode));
                },
            );
        }
    }
}

fn bench_emit(c: &mut Criterion) {
    for (name, mode) in MODES {
        let emitter = Emitter::new(Format::C).with_mode(mode);
        c.bench_with_input(BenchmarkId::new("emit", name), &emitter, |b, emitter| {
            b.iter(|| hint::black_box(emitter).emit_to_vec().unwrap());
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_build_index,
        bench_build_mask,
        bench_emit
);
criterion_main!(benches);
