// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;
use scrimshaw_config::{ModalConfig, ModalTheme, OverlayStyle};

/// What a backend should draw for the scrim this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrimFill {
    /// Tint drawn over the background; its alpha is the scrim's opacity.
    pub color: Color,
    /// Gaussian blur radius applied to the background; zero for no blur.
    pub blur_radius: f64,
}

impl ScrimFill {
    /// Effective opacity of the scrim.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.color.components[3]
    }
}

/// Result of a tap delivered to the scrim.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapOutcome {
    /// The tap missed the scrim bounds and should be routed elsewhere.
    PassThrough,
    /// The tap hit the scrim and was swallowed without effect.
    Absorbed,
    /// The tap hit the scrim and requests an animated dismissal.
    Dismiss,
}

/// Background layer of a presentation.
#[derive(Clone, Debug)]
pub struct OverlayScrim {
    style: OverlayStyle,
    closes_on_tap: bool,
    bounds: Rect,
    dim_color: Color,
    blur_tint: Color,
    blur_radius: f64,
    hit_test_alpha: f32,
}

impl OverlayScrim {
    /// Creates a scrim for `config` covering `bounds`.
    #[must_use]
    pub fn new(config: &ModalConfig, theme: &ModalTheme, bounds: Rect) -> Self {
        Self {
            style: config.overlay_style(),
            closes_on_tap: config.closes_on_overlay_tap(),
            bounds,
            dim_color: theme.dim_color,
            blur_tint: theme.blur_tint,
            blur_radius: theme.blur_radius.max(0.0),
            hit_test_alpha: theme.effective_hit_test_alpha(),
        }
    }

    /// The overlay style.
    #[must_use]
    pub fn style(&self) -> OverlayStyle {
        self.style
    }

    /// The area covered by the scrim.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resizes the scrim, typically after a viewport change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Whether taps on the scrim request dismissal.
    #[must_use]
    pub fn closes_on_tap(&self) -> bool {
        self.closes_on_tap
    }

    /// Fill at appear `progress` (`0.0` hidden, `1.0` fully shown).
    ///
    /// Dimmed and blurred scrims fade with progress. The opaque scrim ignores
    /// progress and always renders at its hit-test alpha.
    #[must_use]
    pub fn fill(&self, progress: f64) -> ScrimFill {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "progress is in [0, 1]; color channels are f32"
        )]
        let p = progress.clamp(0.0, 1.0) as f32;
        match self.style {
            OverlayStyle::Dimmed => ScrimFill {
                color: self.dim_color.multiply_alpha(p),
                blur_radius: 0.0,
            },
            OverlayStyle::Blurred => ScrimFill {
                color: self.blur_tint.multiply_alpha(p),
                blur_radius: self.blur_radius * f64::from(p),
            },
            OverlayStyle::Opaque => ScrimFill {
                color: Color::BLACK.with_alpha(self.hit_test_alpha),
                blur_radius: 0.0,
            },
        }
    }

    /// Whether `point` hits the scrim.
    ///
    /// The scrim blocks everything inside its bounds while it is mounted,
    /// whatever its current fill. Backends that skip fully transparent layers
    /// still see the opaque style because [`fill`](Self::fill) keeps it at the
    /// hit-test alpha.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Delivers a tap at `point`.
    #[must_use]
    pub fn tap(&self, point: Point) -> TapOutcome {
        if !self.hit_test(point) {
            TapOutcome::PassThrough
        } else if self.closes_on_tap {
            TapOutcome::Dismiss
        } else {
            TapOutcome::Absorbed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

    fn scrim(style: OverlayStyle, closes: bool) -> OverlayScrim {
        let config = ModalConfig::new()
            .with_overlay_style(style)
            .with_closes_on_overlay_tap(closes);
        OverlayScrim::new(&config, &ModalTheme::default(), VIEWPORT)
    }

    #[test]
    fn dimmed_fades_with_progress() {
        let s = scrim(OverlayStyle::Dimmed, true);
        assert_eq!(s.fill(0.0).opacity(), 0.0);
        assert!((s.fill(0.5).opacity() - 0.2).abs() < 1e-6);
        assert!((s.fill(1.0).opacity() - 0.4).abs() < 1e-6);
        assert_eq!(s.fill(1.0).blur_radius, 0.0);
    }

    #[test]
    fn blurred_scales_radius() {
        let s = scrim(OverlayStyle::Blurred, true);
        assert_eq!(s.fill(0.0).blur_radius, 0.0);
        assert_eq!(s.fill(1.0).blur_radius, 24.0);
        assert!(s.fill(1.0).opacity() > 0.0);
    }

    #[test]
    fn opaque_is_never_fully_transparent() {
        let s = scrim(OverlayStyle::Opaque, true);
        for progress in [0.0, 0.3, 1.0] {
            let opacity = s.fill(progress).opacity();
            assert!(opacity > 0.0 && opacity <= 0.001, "opacity {opacity}");
        }
    }

    #[test]
    fn opaque_tap_dismisses_anywhere_inside() {
        let s = scrim(OverlayStyle::Opaque, true);
        for point in [
            Point::new(0.0, 0.0),
            Point::new(200.0, 400.0),
            Point::new(399.0, 799.0),
        ] {
            assert_eq!(s.tap(point), TapOutcome::Dismiss);
        }
        assert_eq!(s.tap(Point::new(500.0, 10.0)), TapOutcome::PassThrough);
    }

    #[test]
    fn taps_are_absorbed_when_not_closing() {
        let s = scrim(OverlayStyle::Dimmed, false);
        assert_eq!(s.tap(Point::new(10.0, 10.0)), TapOutcome::Absorbed);
    }

    #[test]
    fn faded_out_scrim_still_blocks_taps() {
        let s = scrim(OverlayStyle::Dimmed, false);
        assert_eq!(s.fill(0.0).opacity(), 0.0);
        assert!(s.hit_test(Point::new(10.0, 10.0)));
        assert_eq!(s.tap(Point::new(10.0, 10.0)), TapOutcome::Absorbed);
    }

    #[test]
    fn transparent_theme_tint_still_dismisses() {
        let config = ModalConfig::new()
            .with_overlay_style(OverlayStyle::Blurred)
            .with_closes_on_overlay_tap(true);
        let theme = ModalTheme {
            blur_tint: Color::TRANSPARENT,
            ..ModalTheme::default()
        };
        let s = OverlayScrim::new(&config, &theme, VIEWPORT);
        assert_eq!(s.fill(1.0).opacity(), 0.0);
        assert_eq!(s.tap(Point::new(10.0, 10.0)), TapOutcome::Dismiss);
    }
}
