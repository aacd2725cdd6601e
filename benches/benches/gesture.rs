// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use scrimshaw_gesture::{
    Axis, DismissGestureInterpreter, DragTracker, GestureSample, SheetDragPolicy, rubber_band,
};

fn bench_rubber_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("rubber_band");
    group.bench_function("sweep_1k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1_000 {
                acc += rubber_band(black_box(f64::from(i) * 0.5));
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_session");
    for (name, hides_on_swap) in [("swipe", true), ("rubber_band", false)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut tracker = DragTracker::default();
                let mut interpreter = DismissGestureInterpreter::new(SheetDragPolicy {
                    is_draggable: true,
                    hides_on_swap,
                });
                tracker.start(Point::new(200.0, 400.0), 0);
                // One pointer move per 60 Hz frame for one second.
                for frame in 1..=60_u32 {
                    let y = 400.0 + f64::from(frame) * 3.0;
                    tracker.update(Point::new(200.0, y), u64::from(frame) * 16);
                    if let Some(sample) = tracker.sample(Axis::Vertical) {
                        black_box(interpreter.update(sample));
                    }
                }
                let sample = tracker
                    .sample(Axis::Vertical)
                    .unwrap_or(GestureSample::new(0.0, 0.0));
                black_box(interpreter.release(sample, 400.0))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rubber_band, bench_drag_session);
criterion_main!(benches);
