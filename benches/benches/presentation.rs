// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use scrimshaw_compose::{Anchor, ComposerModel, Content, ContentComposer};
use scrimshaw_config::{ModalConfig, ModalTheme, Placement, SheetOptions};
use scrimshaw_presentation::{Sections, present};

struct Paragraph(f64);

impl Content for Paragraph {
    fn measure(&self, width: f64) -> f64 {
        (self.0 / width.max(1.0)).ceil()
    }
}

fn composer() -> ContentComposer {
    let model = ComposerModel {
        preferred_width: 480.0,
        ..ComposerModel::new(Size::new(400.0, 800.0), Anchor::Center)
    };
    ContentComposer::new(
        model,
        Some(Box::new(Paragraph(12_000.0))),
        Box::new(Paragraph(90_000.0)),
        Some(Box::new(Paragraph(16_000.0))),
    )
    .unwrap()
}

fn bench_composer(c: &mut Criterion) {
    let mut group = c.benchmark_group("composer");
    group.bench_function("viewport_resize", |b| {
        let mut composer = composer();
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let width = if wide { 1024.0 } else { 400.0 };
            let model = ComposerModel {
                viewport: Size::new(width, 800.0),
                ..composer.model().clone()
            };
            black_box(composer.update(model).unwrap())
        });
    });
    group.bench_function("unchanged_model", |b| {
        let mut composer = composer();
        b.iter(|| {
            let model = composer.model().clone();
            black_box(composer.update(model).unwrap())
        });
    });
    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    let theme = ModalTheme::default();
    let config = ModalConfig::new().with_placement(Placement::Bottom(SheetOptions {
        is_draggable: true,
        hides_on_swap: true,
    }));
    c.bench_function("sheet_round_trip_60hz", |b| {
        b.iter_batched(
            || config.clone(),
            |config| {
                let mut sheet = present(
                    config,
                    &theme,
                    Size::new(400.0, 800.0),
                    Sections::new(|_| Paragraph(40_000.0)),
                )
                .unwrap();
                while sheet.tick(Duration::from_millis(16)) {
                    black_box(sheet.frame());
                }
                sheet.dismiss(true);
                while sheet.tick(Duration::from_millis(16)) {
                    black_box(sheet.frame());
                }
                sheet.state()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_composer, bench_lifecycle);
criterion_main!(benches);
