// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Gesture: turn drags on a bottom sheet into offsets and decisions.
//!
//! This crate is headless. It never sees a touch event; callers feed it
//! [`GestureSample`]s (translation and velocity along the drag axis) and it
//! answers two questions:
//!
//! - While dragging: how far should the sheet visually move this frame?
//!   See [`DismissGestureInterpreter::update`].
//! - On release: should the sheet dismiss, or spring back?
//!   See [`DismissGestureInterpreter::release`].
//!
//! Movement past a natural bound is damped with [`rubber_band`], a sub-linear
//! curve that approaches but never reaches [`RUBBER_BAND_DIMENSION`].
//!
//! ```rust
//! use scrimshaw_gesture::{
//!     DismissGestureInterpreter, GestureSample, ReleaseDecision, SheetDragPolicy,
//! };
//!
//! let mut drag = DismissGestureInterpreter::new(SheetDragPolicy {
//!     is_draggable: true,
//!     hides_on_swap: true,
//! });
//!
//! // Downward drags track the finger exactly when swiping can dismiss.
//! assert_eq!(drag.update(GestureSample::new(120.0, 0.0)), 120.0);
//!
//! // Upward drags are resisted.
//! assert!(drag.update(GestureSample::new(-100.0, 0.0)) > -20.0);
//!
//! // Releasing past half the sheet height commits.
//! let decision = drag.release(GestureSample::new(250.0, 0.0), 400.0);
//! assert_eq!(decision, ReleaseDecision::Commit);
//! ```
//!
//! Hosts that only have raw pointer positions can use [`DragTracker`] to derive
//! samples, including a release velocity estimated from recent movement.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` float routines through Kurbo for `no_std` targets.
//!
//! Without `std` the crate is `no_std`; enable `libm` in that case.

#![cfg_attr(not(feature = "std"), no_std)]

mod interpreter;
mod rubber_band;
mod tracker;

pub use interpreter::{
    COMMIT_VELOCITY, DismissGestureInterpreter, GestureSample, REBOUND_DURATION, ReleaseDecision,
    SheetDragPolicy,
};
pub use rubber_band::{RUBBER_BAND_COEFFICIENT, RUBBER_BAND_DIMENSION, rubber_band, rubber_band_with};
pub use tracker::{Axis, DragTracker, VELOCITY_WINDOW_MS};
