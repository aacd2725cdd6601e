// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Config: what a modal or sheet presentation looks like.
//!
//! A presentation request is described by a [`ModalConfig`], an immutable value
//! compared by structural equality. It is built with consuming `with_*`
//! setters that clamp numeric inputs, so every config a controller observes has
//! non-negative paddings, spacing, and duration:
//!
//! ```rust
//! use kurbo::Insets;
//! use scrimshaw_config::{ModalConfig, OverlayStyle, Placement, SheetOptions, SizeClass};
//!
//! let config = ModalConfig::new()
//!     .with_overlay_style(OverlayStyle::Blurred)
//!     .with_size_class(SizeClass::Large)
//!     .with_content_paddings(Insets::new(-4.0, 8.0, 8.0, 8.0))
//!     .with_transition_seconds(0.25)
//!     .with_placement(Placement::Bottom(SheetOptions {
//!         is_draggable: true,
//!         hides_on_swap: true,
//!     }));
//!
//! // Negative insets are clamped at construction.
//! assert_eq!(config.content_paddings().x0, 0.0);
//! assert!(config.placement().is_bottom());
//! ```
//!
//! Values that used to live in a process-wide style singleton (preferred widths
//! per size class, corner radii, scrim colors) are carried by an explicit
//! [`ModalTheme`] that the caller constructs once and passes by reference.
//!
//! `ModalConfig` implements [`scrimshaw_diff::Diff`], so components holding one
//! can tell a cosmetic change from a geometric one.
//!
//! This crate is `no_std` unless the default `std` feature is enabled. `no_std`
//! builds need the `libm` feature for Kurbo and Peniko.

#![cfg_attr(not(feature = "std"), no_std)]

mod config;
mod theme;

pub use config::{
    CornerRadius, DEFAULT_TRANSITION, ModalConfig, OverlayStyle, Placement, SheetOptions,
    SizeClass,
};
pub use theme::ModalTheme;

/// Clamps `value` to `>= 0`, mapping NaN to zero.
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    // `f64::max` returns the non-NaN operand.
    value.max(0.0)
}

/// Clamps every side of `insets` to `>= 0`.
#[must_use]
pub fn non_negative_insets(insets: kurbo::Insets) -> kurbo::Insets {
    kurbo::Insets::new(
        non_negative(insets.x0),
        non_negative(insets.y0),
        non_negative(insets.x1),
        non_negative(insets.y1),
    )
}
