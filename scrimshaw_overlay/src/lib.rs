// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Overlay: the layer between a presentation and everything behind it.
//!
//! An [`OverlayScrim`] covers its bounds (normally the whole viewport) and does
//! two jobs:
//!
//! - It describes its fill for a given appear progress, as a [`ScrimFill`]
//!   (tint color plus background blur radius) that any backend can draw.
//! - It owns the tap-outside gesture: a tap inside its bounds either requests
//!   dismissal or is absorbed, and never reaches content behind the scrim.
//!
//! ## The invisible scrim
//!
//! [`OverlayStyle::Opaque`] is deliberately special. Most backends skip fully
//! transparent layers when hit testing, so a scrim with opacity `0.0` would let
//! taps fall through. The opaque style therefore renders at a tiny, strictly
//! positive opacity (see [`ModalTheme::hit_test_alpha`]), from the first frame
//! on, so it always intercepts input while staying visually absent.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use scrimshaw_config::{ModalConfig, ModalTheme, OverlayStyle};
//! use scrimshaw_overlay::{OverlayScrim, TapOutcome};
//!
//! let config = ModalConfig::new().with_overlay_style(OverlayStyle::Opaque);
//! let scrim = OverlayScrim::new(&config, &ModalTheme::default(), Rect::new(0.0, 0.0, 400.0, 800.0));
//!
//! let opacity = scrim.fill(0.0).opacity();
//! assert!(opacity > 0.0 && opacity <= 0.001);
//! assert_eq!(scrim.tap(Point::new(10.0, 10.0)), TapOutcome::Dismiss);
//! ```
//!
//! This crate is `no_std` unless the default `std` feature is enabled. `no_std`
//! builds need the `libm` feature.

#![cfg_attr(not(feature = "std"), no_std)]

mod scrim;

pub use scrim::{OverlayScrim, ScrimFill, TapOutcome};

#[doc(no_inline)]
pub use scrimshaw_config::{ModalTheme, OverlayStyle};
