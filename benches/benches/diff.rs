// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Insets;
use scrimshaw_config::{CornerRadius, ModalConfig, OverlayStyle, SizeClass};
use scrimshaw_diff::{Diff, ModelCell};

fn bench_config_diff(c: &mut Criterion) {
    let base = ModalConfig::new();
    let restyled = base.clone().with_overlay_style(OverlayStyle::Blurred);
    let resized = base
        .clone()
        .with_size_class(SizeClass::Large)
        .with_content_paddings(Insets::uniform(24.0));

    let mut group = c.benchmark_group("config_diff");
    group.bench_function("equal", |b| {
        b.iter(|| ModalConfig::invalidation(black_box(&base), black_box(&base.clone())));
    });
    group.bench_function("restyle", |b| {
        b.iter(|| ModalConfig::invalidation(black_box(&base), black_box(&restyled)));
    });
    group.bench_function("resize", |b| {
        b.iter(|| ModalConfig::invalidation(black_box(&base), black_box(&resized)));
    });
    group.finish();
}

fn bench_cell_churn(c: &mut Criterion) {
    let radii = [
        CornerRadius::None,
        CornerRadius::Small,
        CornerRadius::Medium,
        CornerRadius::Large,
    ];
    c.bench_function("cell_set_alternating_radius", |b| {
        let mut cell = ModelCell::new(ModalConfig::new());
        let mut i = 0_usize;
        b.iter(|| {
            i = (i + 1) % radii.len();
            let next = cell.get().clone().with_corner_radius(radii[i]);
            black_box(cell.set(next))
        });
    });
}

criterion_group!(benches, bench_config_diff, bench_cell_churn);
criterion_main!(benches);
