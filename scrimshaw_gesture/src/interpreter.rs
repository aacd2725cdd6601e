// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live offset and release decision for drag-to-dismiss.
//!
//! ## Usage
//!
//! 1) Create a [`DismissGestureInterpreter`] with the sheet's [`SheetDragPolicy`].
//! 2) On every drag sample, call [`DismissGestureInterpreter::update`] and apply
//!    the returned offset as a vertical translation of the sheet.
//! 3) On release, call [`DismissGestureInterpreter::release`]. On cancellation,
//!    call [`DismissGestureInterpreter::cancel`], which always rebounds.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::rubber_band;

/// Downward release velocity (units per second) above which a drag commits.
pub const COMMIT_VELOCITY: f64 = 250.0;

/// Duration of the spring back to rest after a drag that did not commit.
pub const REBOUND_DURATION: Duration = Duration::from_millis(300);

/// One drag observation along the drag axis.
///
/// Positive values point down (towards dismissal).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GestureSample {
    /// Distance from where the drag started.
    pub translation: f64,
    /// Instantaneous velocity in units per second.
    pub velocity: f64,
}

impl GestureSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(translation: f64, velocity: f64) -> Self {
        Self {
            translation,
            velocity,
        }
    }
}

/// Which kinds of drag feedback a sheet allows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SheetDragPolicy {
    /// Whether dragging moves the sheet at all (resisted).
    pub is_draggable: bool,
    /// Whether a downward drag tracks the finger and may dismiss.
    pub hides_on_swap: bool,
}

impl SheetDragPolicy {
    /// Returns `true` if drags should be tracked.
    #[must_use]
    pub const fn tracks_drags(self) -> bool {
        self.is_draggable || self.hides_on_swap
    }
}

/// Outcome of a finished drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReleaseDecision {
    /// Dismiss the sheet, continuing from the live offset.
    Commit,
    /// Animate back to rest over [`REBOUND_DURATION`].
    Rebound,
}

/// Interprets drag samples for a bottom sheet.
///
/// Holds only the offset computed for the current frame; nothing carries over
/// between gestures once [`reset`](Self::reset) is called.
#[derive(Clone, Debug, Default)]
pub struct DismissGestureInterpreter {
    policy: SheetDragPolicy,
    offset: f64,
}

impl DismissGestureInterpreter {
    /// Creates an interpreter at rest.
    #[must_use]
    pub fn new(policy: SheetDragPolicy) -> Self {
        Self {
            policy,
            offset: 0.0,
        }
    }

    /// The policy this interpreter applies.
    #[must_use]
    pub fn policy(&self) -> SheetDragPolicy {
        self.policy
    }

    /// The offset computed for the most recent sample.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset for a raw `translation`, without updating state.
    ///
    /// - Downward (`> 0`): unresisted when the policy hides on swap, otherwise
    ///   rubber-banded when draggable, otherwise zero.
    /// - Upward (`< 0`): rubber-banded when draggable, otherwise zero. The
    ///   sheet never moves freely above its rest position.
    #[must_use]
    pub fn offset_for(&self, translation: f64) -> f64 {
        if translation > 0.0 {
            if self.policy.hides_on_swap {
                translation
            } else if self.policy.is_draggable {
                rubber_band(translation)
            } else {
                0.0
            }
        } else if translation < 0.0 && self.policy.is_draggable {
            -rubber_band(-translation)
        } else {
            0.0
        }
    }

    /// Updates the live offset from `sample` and returns it.
    pub fn update(&mut self, sample: GestureSample) -> f64 {
        self.offset = self.offset_for(sample.translation);
        self.offset
    }

    /// Whether a release at `offset` with `velocity` commits, for a sheet of
    /// `container_height`.
    ///
    /// Commits iff the policy hides on swap and either the offset magnitude
    /// exceeds half the height or the downward velocity exceeds
    /// [`COMMIT_VELOCITY`].
    #[must_use]
    pub fn should_commit(&self, offset: f64, velocity: f64, container_height: f64) -> bool {
        self.policy.hides_on_swap
            && (offset.abs() > container_height / 2.0 || velocity > COMMIT_VELOCITY)
    }

    /// Applies the final `sample` and decides the outcome of a normal release.
    pub fn release(&mut self, sample: GestureSample, container_height: f64) -> ReleaseDecision {
        let offset = self.update(sample);
        if self.should_commit(offset, sample.velocity, container_height) {
            ReleaseDecision::Commit
        } else {
            ReleaseDecision::Rebound
        }
    }

    /// Decides the outcome of a failed or cancelled gesture: always rebound.
    pub fn cancel(&mut self) -> ReleaseDecision {
        ReleaseDecision::Rebound
    }

    /// Returns to rest.
    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}
