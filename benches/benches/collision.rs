// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use dragover_session::{Coordinator, DropKind};
use kurbo::{Rect, Vec2};

/// One draggable plus `targets` any-drop targets laid out on a grid.
fn grid_surface(targets: usize) -> Coordinator<u32> {
    let mut dnd = Coordinator::new();
    dnd.register_drag(0, Rect::new(0.0, 0.0, 50.0, 50.0));
    for i in 0..targets {
        let col = (i % 32) as f64;
        let row = (i / 32) as f64;
        dnd.register_drop(
            1 + i as u32,
            Rect::new(
                col * 60.0,
                row * 60.0,
                col * 60.0 + 50.0,
                row * 60.0 + 50.0,
            ),
            DropKind::Any,
        );
    }
    dnd
}

fn bench_report_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/report_drag");

    // Every sample scans the whole any-registry, so the interesting axis is
    // the number of registered targets.
    for targets in [16usize, 64, 256, 1024] {
        group.throughput(Throughput::Elements(targets as u64));

        group.bench_with_input(
            BenchmarkId::new("moving", targets),
            &targets,
            |b, &targets| {
                b.iter_batched(
                    || grid_surface(targets),
                    |mut dnd| {
                        // Alternate offsets so every sample changes the session.
                        dnd.report_drag(0, Vec2::new(10.0, 10.0));
                        dnd.report_drag(0, Vec2::new(70.0, 10.0));
                        black_box(dnd);
                    },
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("settled", targets),
            &targets,
            |b, &targets| {
                b.iter_batched(
                    || {
                        let mut dnd = grid_surface(targets);
                        dnd.report_drag(0, Vec2::new(10.0, 10.0));
                        dnd
                    },
                    |mut dnd| {
                        // Identical sample: resolution still runs, only the
                        // revision bump is skipped.
                        dnd.report_drag(0, Vec2::new(10.0, 10.0));
                        black_box(dnd);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_full_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/full_gesture");

    // A 16-sample swipe across the grid plus the finalize at the end, at a
    // fixed surface size.
    group.throughput(Throughput::Elements(16));
    group.bench_function("swipe_256_targets", |b| {
        b.iter_batched(
            || grid_surface(256),
            |mut dnd| {
                for step in 0..16 {
                    dnd.report_drag(0, Vec2::new(f64::from(step) * 12.0, 10.0));
                }
                black_box(dnd.finalize_drop(&0).copied());
                black_box(dnd);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_report_drag, bench_full_gesture);
criterion_main!(benches);
