// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-neutral frame description and the retained-mode adapter.
//!
//! A declarative backend reads a [`SheetFrame`] every frame and rebuilds its
//! view description from it. A retained backend instead implements
//! [`RetainedSurface`] and lets a [`RetainedRenderer`] diff successive frames,
//! so an unchanged frame costs nothing and a moving sheet only restyles.

use kurbo::{Affine, Rect, RoundedRectRadii};
use scrimshaw_diff::{Diff, Invalidation, ModelCell, ModelView, Rule};
use scrimshaw_overlay::ScrimFill;

use crate::PresentationState;

/// Everything a backend needs to draw one frame of a presentation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetFrame {
    /// Lifecycle state at the time of the frame.
    pub state: PresentationState,
    /// Scrim fill for this frame.
    pub scrim: ScrimFill,
    /// Area covered by the scrim.
    pub scrim_bounds: Rect,
    /// Container rectangle at rest, before [`transform`](Self::transform).
    pub container: Rect,
    /// Header rectangle at rest, if present.
    pub header: Option<Rect>,
    /// Visible body rectangle at rest.
    pub body: Rect,
    /// Footer rectangle at rest, if present.
    pub footer: Option<Rect>,
    /// Whether the body content overflows and should scroll.
    pub body_scrolls: bool,
    /// Transform applied to the container and its sections.
    pub transform: Affine,
    /// Opacity of the container and its sections.
    pub content_alpha: f64,
    /// Container corner radii.
    pub corner_radii: RoundedRectRadii,
}

impl SheetFrame {
    /// Axis-aligned bounds of the transformed container.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.container)
    }
}

const GEOMETRY: Invalidation = Invalidation::SIZE.union(Invalidation::LAYOUT);

impl Diff for SheetFrame {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("state", |o, n| o.state != n.state, Invalidation::RESTYLE),
        Rule::new("scrim", |o, n| o.scrim != n.scrim, Invalidation::RESTYLE),
        Rule::new(
            "content_paint",
            |o, n| {
                o.transform != n.transform
                    || o.content_alpha != n.content_alpha
                    || o.corner_radii != n.corner_radii
            },
            Invalidation::RESTYLE,
        ),
        Rule::new(
            "scrim_bounds",
            |o, n| o.scrim_bounds != n.scrim_bounds,
            Invalidation::LAYOUT,
        ),
        Rule::new(
            "sections",
            |o, n| {
                o.container != n.container
                    || o.header != n.header
                    || o.body != n.body
                    || o.footer != n.footer
                    || o.body_scrolls != n.body_scrolls
            },
            GEOMETRY,
        ),
    ];
}

/// A persistent, imperatively mutated view tree showing a presentation.
pub trait RetainedSurface {
    /// Re-applies paint-level properties: scrim fill, content transform,
    /// opacity, and corner radii.
    fn restyle(&mut self, frame: &SheetFrame);

    /// Discards cached section measurements.
    fn invalidate_size(&mut self, frame: &SheetFrame) {
        let _ = frame;
    }

    /// Repositions the scrim and the section views.
    fn relayout(&mut self, frame: &SheetFrame);
}

struct Apply<'a, S>(&'a mut S);

impl<S: RetainedSurface> ModelView<SheetFrame> for Apply<'_, S> {
    fn restyle(&mut self, frame: &SheetFrame) {
        self.0.restyle(frame);
    }

    fn invalidate_size(&mut self, frame: &SheetFrame) {
        self.0.invalidate_size(frame);
    }

    fn relayout(&mut self, frame: &SheetFrame) {
        self.0.relayout(frame);
    }
}

/// Drives a [`RetainedSurface`] from successive [`SheetFrame`]s.
#[derive(Debug)]
pub struct RetainedRenderer<S> {
    surface: S,
    frame: Option<ModelCell<SheetFrame>>,
}

impl<S: RetainedSurface> RetainedRenderer<S> {
    /// Wraps `surface`. Nothing is applied until the first [`render`](Self::render).
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            frame: None,
        }
    }

    /// Applies `frame`, performing only the work that differs from the last one.
    ///
    /// The first frame performs all work. Returns the work performed.
    pub fn render(&mut self, frame: SheetFrame) -> Invalidation {
        match &mut self.frame {
            Some(cell) => cell.apply(frame, &mut Apply(&mut self.surface)),
            None => {
                self.frame = Some(ModelCell::mount(frame, &mut Apply(&mut self.surface)));
                Invalidation::all()
            }
        }
    }

    /// The last applied frame.
    #[must_use]
    pub fn frame(&self) -> Option<&SheetFrame> {
        self.frame.as_ref().map(ModelCell::get)
    }

    /// The wrapped surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Unwraps the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
