// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a retained backend from controller frames.

use std::time::Duration;

use kurbo::Size;
use scrimshaw_compose::Content;
use scrimshaw_config::{ModalConfig, ModalTheme, Placement, SheetOptions};
use scrimshaw_diff::Invalidation;
use scrimshaw_presentation::{RetainedRenderer, RetainedSurface, Sections, SheetFrame, present};

struct Block(f64);

impl Content for Block {
    fn measure(&self, _width: f64) -> f64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Log {
    restyles: usize,
    layouts: usize,
    last_alpha: f64,
}

impl RetainedSurface for Log {
    fn restyle(&mut self, frame: &SheetFrame) {
        self.restyles += 1;
        self.last_alpha = frame.content_alpha;
    }

    fn relayout(&mut self, _frame: &SheetFrame) {
        self.layouts += 1;
    }
}

#[test]
fn settled_presentation_renders_nothing() {
    let mut controller = present(
        ModalConfig::new().with_transition_seconds(0.0),
        &ModalTheme::default(),
        Size::new(400.0, 800.0),
        Sections::new(|_| Block(100.0)),
    )
    .unwrap();
    let mut renderer = RetainedRenderer::new(Log::default());

    assert_eq!(renderer.render(controller.frame()), Invalidation::all());
    for _ in 0..10 {
        controller.tick(Duration::from_millis(16));
        assert!(renderer.render(controller.frame()).is_empty());
    }
    let log = renderer.surface();
    assert_eq!((log.restyles, log.layouts), (1, 1));
    assert_eq!(log.last_alpha, 1.0);
}

#[test]
fn slide_in_only_restyles() {
    let config = ModalConfig::new().with_placement(Placement::Bottom(SheetOptions::default()));
    let mut controller = present(
        config,
        &ModalTheme::default(),
        Size::new(400.0, 800.0),
        Sections::new(|_| Block(100.0)),
    )
    .unwrap();
    let mut renderer = RetainedRenderer::new(Log::default());
    renderer.render(controller.frame());

    let mut frames = 0;
    while controller.tick(Duration::from_millis(16)) {
        let work = renderer.render(controller.frame());
        assert_eq!(work, Invalidation::RESTYLE);
        frames += 1;
    }
    // Final frame reaches rest and flips the state to presented.
    assert_eq!(renderer.render(controller.frame()), Invalidation::RESTYLE);
    let log = renderer.into_surface();
    assert_eq!(log.layouts, 1);
    assert_eq!(log.restyles, frames + 2);
}

#[test]
fn viewport_change_relayouts_surface() {
    let mut controller = present(
        ModalConfig::new().with_transition_seconds(0.0),
        &ModalTheme::default(),
        Size::new(400.0, 800.0),
        Sections::new(|_| Block(100.0)),
    )
    .unwrap();
    let mut renderer = RetainedRenderer::new(Log::default());
    renderer.render(controller.frame());

    controller.set_viewport(Size::new(800.0, 600.0)).unwrap();
    let work = renderer.render(controller.frame());
    assert!(work.contains(Invalidation::LAYOUT));
    assert_eq!(renderer.surface().layouts, 2);
}
