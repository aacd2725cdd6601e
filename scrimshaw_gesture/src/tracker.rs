// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking from raw pointer positions.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragTracker::start`] on pointer down.
//! 2) On each move, call [`DragTracker::update`] to get the delta since the last move.
//! 3) Call [`DragTracker::sample`] to get a [`GestureSample`] along an [`Axis`],
//!    with velocity estimated over the last [`VELOCITY_WINDOW_MS`].
//! 4) End tracking with [`DragTracker::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use scrimshaw_gesture::{Axis, DragTracker};
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0), 0);
//! drag.update(Point::new(10.0, 60.0), 50);
//!
//! let sample = drag.sample(Axis::Vertical).unwrap();
//! assert_eq!(sample.translation, 40.0);
//! // 40 units in 50 ms.
//! assert_eq!(sample.velocity, 800.0);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::GestureSample;

/// Only movement within this many milliseconds before the latest update
/// contributes to the velocity estimate.
pub const VELOCITY_WINDOW_MS: u64 = 100;

/// Drag axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right is positive.
    Horizontal,
    /// Top to bottom is positive.
    #[default]
    Vertical,
}

impl Axis {
    fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Stamp {
    pos: Point,
    time_ms: u64,
}

/// Tracks one drag sequence.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    /// Start position of the drag operation.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the drag.
    pub last_pos: Option<Point>,
    history: SmallVec<[Stamp; 8]>,
}

impl DragTracker {
    /// Starts tracking a new drag at `pos`, discarding any previous one.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.history.clear();
        self.history.push(Stamp { pos, time_ms });
    }

    /// Records a move, returning the delta since the last position.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        self.history.push(Stamp { pos, time_ms });
        self.prune(time_ms);
        delta
    }

    /// Offset from the drag start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Velocity in units per second, estimated over the recent window.
    ///
    /// Zero when fewer than two samples are available or no time elapsed.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let (Some(first), Some(last)) = (self.history.first(), self.history.last()) else {
            return Vec2::ZERO;
        };
        let elapsed_ms = last.time_ms.saturating_sub(first.time_ms);
        if elapsed_ms == 0 {
            return Vec2::ZERO;
        }
        (last.pos - first.pos) * 1000.0 / elapsed_ms as f64
    }

    /// Current translation and velocity along `axis`, if dragging.
    #[must_use]
    pub fn sample(&self, axis: Axis) -> Option<GestureSample> {
        let offset = self.total_offset(self.last_pos?)?;
        Some(GestureSample::new(
            axis.component(offset),
            axis.component(self.velocity()),
        ))
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.history.clear();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    fn prune(&mut self, now_ms: u64) {
        let cutoff = now_ms.saturating_sub(VELOCITY_WINDOW_MS);
        // Keep one stamp at or before the cutoff so the window stays anchored.
        let keep_from = self
            .history
            .iter()
            .rposition(|s| s.time_ms <= cutoff)
            .unwrap_or(0);
        if keep_from > 0 {
            self.history.drain(..keep_from);
        }
    }
}
