// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit theme values shared by a controller and its children.

use peniko::Color;

use crate::{CornerRadius, SizeClass, non_negative};

/// Smallest preferred width a size class can resolve to.
const MIN_PREFERRED_WIDTH: f64 = 1.0;

/// Theme values for presentations.
///
/// Construct one (usually [`ModalTheme::default`]) and pass it by reference to
/// every presentation. Nothing reads theme values from global state.
///
/// ```
/// use scrimshaw_config::{CornerRadius, ModalTheme, SizeClass};
///
/// let theme = ModalTheme::default();
/// assert_eq!(theme.preferred_width(SizeClass::Medium), 480.0);
/// assert!(theme.preferred_width(SizeClass::Full).is_infinite());
/// assert_eq!(theme.corner_radius(CornerRadius::Custom(3.0)), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ModalTheme {
    /// Preferred width of [`SizeClass::Small`].
    pub small_width: f64,
    /// Preferred width of [`SizeClass::Medium`].
    pub medium_width: f64,
    /// Preferred width of [`SizeClass::Large`].
    pub large_width: f64,
    /// Radius of [`CornerRadius::Small`].
    pub small_radius: f64,
    /// Radius of [`CornerRadius::Medium`].
    pub medium_radius: f64,
    /// Radius of [`CornerRadius::Large`].
    pub large_radius: f64,
    /// Tint of the dimmed scrim at full opacity.
    pub dim_color: Color,
    /// Tint of the blurred scrim at full opacity.
    pub blur_tint: Color,
    /// Background blur radius of the blurred scrim.
    pub blur_radius: f64,
    /// Alpha of the visually absent scrim; must stay strictly positive.
    pub hit_test_alpha: f32,
}

impl Default for ModalTheme {
    fn default() -> Self {
        Self {
            small_width: 320.0,
            medium_width: 480.0,
            large_width: 640.0,
            small_radius: 8.0,
            medium_radius: 12.0,
            large_radius: 20.0,
            dim_color: Color::BLACK.with_alpha(0.4),
            blur_tint: Color::BLACK.with_alpha(0.2),
            blur_radius: 24.0,
            hit_test_alpha: 0.0001,
        }
    }
}

impl ModalTheme {
    /// Preferred maximum width for `size_class`. Always positive.
    ///
    /// [`SizeClass::Full`] is unbounded, so the container always fills the
    /// available width.
    #[must_use]
    pub fn preferred_width(&self, size_class: SizeClass) -> f64 {
        let width = match size_class {
            SizeClass::Small => self.small_width,
            SizeClass::Medium => self.medium_width,
            SizeClass::Large => self.large_width,
            SizeClass::Full => return f64::INFINITY,
        };
        width.max(MIN_PREFERRED_WIDTH)
    }

    /// Resolved radius for `radius`. Never negative.
    #[must_use]
    pub fn corner_radius(&self, radius: CornerRadius) -> f64 {
        non_negative(match radius {
            CornerRadius::None => 0.0,
            CornerRadius::Small => self.small_radius,
            CornerRadius::Medium => self.medium_radius,
            CornerRadius::Large => self.large_radius,
            CornerRadius::Custom(r) => r,
        })
    }

    /// Alpha used by the visually absent scrim, kept in `(0, 0.001]`.
    #[must_use]
    pub fn effective_hit_test_alpha(&self) -> f32 {
        if self.hit_test_alpha > 0.0 && self.hit_test_alpha <= 0.001 {
            self.hit_test_alpha
        } else {
            0.0001
        }
    }
}
