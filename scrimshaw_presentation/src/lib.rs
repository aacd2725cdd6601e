// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Presentation: modal dialogs and bottom sheets, from request to teardown.
//!
//! A [`PresentationController`] owns one presentation: its [`ModalConfig`],
//! an [`OverlayScrim`](scrimshaw_overlay::OverlayScrim), a
//! [`ContentComposer`](scrimshaw_compose::ContentComposer) for header, body,
//! and footer, and, for draggable bottom sheets, a
//! [`DismissGestureInterpreter`](scrimshaw_gesture::DismissGestureInterpreter).
//! It moves through a closed set of states:
//!
//! ```text
//! Initial → Appearing → Presented ⇄ Interacting → Disappearing → Dismissed
//! ```
//!
//! Nothing here owns a clock, a window, or an event loop. The host calls
//! [`tick`](PresentationController::tick) with elapsed time, forwards taps and
//! drags, and draws the [`SheetFrame`] returned by
//! [`frame`](PresentationController::frame).
//!
//! ## Variants
//!
//! Centered dialogs and bottom sheets share one state machine. The difference
//! is a [`Strategy`] value chosen from the config's placement: a set of pure
//! functions giving the entry, rest, exit, and dragged [`Visual`]s.
//!
//! ## Misuse is not an error
//!
//! Presenting twice, dismissing twice, and dismissing before presenting are
//! all no-ops. A completion passed to
//! [`dismiss_with`](PresentationController::dismiss_with) always runs exactly
//! once. The only error is a layout failure, reported as [`PresentError`].
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use scrimshaw_compose::Content;
//! use scrimshaw_config::{ModalConfig, ModalTheme};
//! use scrimshaw_presentation::{PresentationState, Sections, TapRoute, present};
//!
//! struct Label;
//! impl Content for Label {
//!     fn measure(&self, _width: f64) -> f64 { 40.0 }
//! }
//!
//! let config = ModalConfig::new().with_transition_seconds(0.3);
//! let theme = ModalTheme::default();
//! let mut sheet = present(config, &theme, Size::new(400.0, 800.0), Sections::new(|_| Label)).unwrap();
//! assert_eq!(sheet.state(), PresentationState::Appearing);
//!
//! sheet.tick(Duration::from_millis(300));
//! assert_eq!(sheet.state(), PresentationState::Presented);
//!
//! // A tap on the dimmed background dismisses.
//! assert_eq!(sheet.tap(Point::new(10.0, 10.0)), TapRoute::Dismiss);
//! assert_eq!(sheet.state(), PresentationState::Disappearing);
//!
//! sheet.tick(Duration::from_millis(300));
//! assert_eq!(sheet.state(), PresentationState::Dismissed);
//! ```
//!
//! ## Backends
//!
//! A declarative backend rebuilds its view from each [`SheetFrame`]. A retained
//! backend implements [`RetainedSurface`] and hands frames to a
//! [`RetainedRenderer`], which uses the [`scrimshaw_diff`] protocol so that an
//! unchanged frame does no work and a moving sheet only restyles.
//!
//! ## Logging
//!
//! State transitions and drag resolutions are logged at `debug`, per-frame
//! work at `trace`, and ignored misuse (such as a second concurrent drag) at
//! `warn`, through [`tracing`]. No subscriber is installed.

mod controller;
mod error;
mod frame;
mod handle;
mod motion;
mod sections;
mod state;
mod strategy;

pub use controller::{PresentationController, TapRoute, present};
pub use error::PresentError;
pub use frame::{RetainedRenderer, RetainedSurface, SheetFrame};
pub use handle::DismissHandle;
pub use motion::{Easing, Transition, Visual};
pub use sections::{ContentFactory, Sections};
pub use state::{PresentationEvent, PresentationState};
pub use strategy::Strategy;

#[doc(no_inline)]
pub use scrimshaw_config::{ModalConfig, ModalTheme};
#[doc(no_inline)]
pub use scrimshaw_gesture::{GestureSample, ReleaseDecision};
