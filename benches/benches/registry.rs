// Copyright 2025 the Dragover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use dragover_registry::Registry;

fn bench_mount_unmount(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/mount_unmount");

    // Hypothesis: adds append in O(1) amortized while each removal pays a
    // linear scan, so an n-entry mount/unmount wave is O(n^2) worst case.
    // Fine at UI element counts; this pins down where it stops being fine.
    for len in [64usize, 256, 1024] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("wave", len), &len, |b, &len| {
            b.iter_batched(
                Registry::<u32, u64>::new,
                |mut reg| {
                    for id in 0..(len as u32) {
                        reg.add(id, u64::from(id));
                    }
                    for id in 0..(len as u32) {
                        reg.remove(&id);
                    }
                    black_box(reg);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/update");

    // Geometry callbacks update one entry per layout pass; model the median
    // lookup cost with a key in the middle of the registry.
    for len in [64usize, 256, 1024] {
        let mid = (len / 2) as u32;

        group.bench_with_input(BenchmarkId::new("mid_key", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let mut reg = Registry::new();
                    for id in 0..(len as u32) {
                        reg.add(id, 0_u64);
                    }
                    reg
                },
                |mut reg| {
                    reg.update(&mid, 7);
                    black_box(reg);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mount_unmount, bench_update);
criterion_main!(benches);
