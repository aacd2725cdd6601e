// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation request value.

use core::time::Duration;

use kurbo::Insets;
use scrimshaw_diff::{Diff, Invalidation, Rule};

use crate::{non_negative, non_negative_insets};

/// Default appear/disappear duration.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// How the background behind a presentation is treated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayStyle {
    /// Translucent tint over the background.
    #[default]
    Dimmed,
    /// Blurred background with a light tint.
    Blurred,
    /// Visually absent, but still intercepts input.
    ///
    /// The scrim renders at a tiny positive opacity so that backends that skip
    /// fully transparent layers during hit testing still deliver taps to it.
    Opaque,
}

/// Corner rounding of the content container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum CornerRadius {
    /// Square corners.
    None,
    /// Theme's small radius.
    Small,
    /// Theme's medium radius.
    #[default]
    Medium,
    /// Theme's large radius.
    Large,
    /// Explicit radius; negative values resolve to zero.
    Custom(f64),
}

/// Width class of the content container.
///
/// Each class maps to a preferred maximum width in [`ModalTheme`](crate::ModalTheme).
/// The preferred width is a soft constraint: the container yields to a narrower
/// viewport instead of overflowing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Compact dialogs and confirmations.
    Small,
    /// General purpose.
    #[default]
    Medium,
    /// Forms and rich content.
    Large,
    /// As wide as the viewport allows.
    Full,
}

/// Options that only apply to bottom-anchored sheets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SheetOptions {
    /// Whether dragging the sheet produces any visible feedback.
    pub is_draggable: bool,
    /// Whether a long or fast downward drag may dismiss the sheet, rather than
    /// only rubber-banding.
    pub hides_on_swap: bool,
}

impl SheetOptions {
    /// Returns `true` if a drag on the sheet should be tracked at all.
    #[must_use]
    pub const fn tracks_drags(self) -> bool {
        self.is_draggable || self.hides_on_swap
    }
}

/// Where the content container sits and how it enters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Centered dialog that fades and scales in.
    #[default]
    Center,
    /// Bottom sheet that slides up from below the viewport.
    Bottom(SheetOptions),
}

impl Placement {
    /// Returns `true` for the bottom sheet variant.
    #[must_use]
    pub const fn is_bottom(self) -> bool {
        matches!(self, Self::Bottom(_))
    }

    /// Sheet options, if this is a bottom sheet.
    #[must_use]
    pub const fn sheet(self) -> Option<SheetOptions> {
        match self {
            Self::Center => None,
            Self::Bottom(options) => Some(options),
        }
    }
}

/// An immutable presentation request.
///
/// Fields are private so the clamping done by the `with_*` setters cannot be
/// bypassed.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalConfig {
    overlay_style: OverlayStyle,
    corner_radius: CornerRadius,
    size_class: SizeClass,
    outer_paddings: Insets,
    content_paddings: Insets,
    content_spacing: f64,
    closes_on_overlay_tap: bool,
    transition_duration: Duration,
    placement: Placement,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            overlay_style: OverlayStyle::default(),
            corner_radius: CornerRadius::default(),
            size_class: SizeClass::default(),
            outer_paddings: Insets::uniform(16.0),
            content_paddings: Insets::uniform(16.0),
            content_spacing: 12.0,
            closes_on_overlay_tap: true,
            transition_duration: DEFAULT_TRANSITION,
            placement: Placement::default(),
        }
    }
}

impl ModalConfig {
    /// Creates the default config: dimmed, medium, centered, tap-to-dismiss.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overlay style.
    #[must_use]
    pub fn with_overlay_style(mut self, style: OverlayStyle) -> Self {
        self.overlay_style = style;
        self
    }

    /// Sets the corner radius. A negative custom radius is clamped to zero.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = match radius {
            CornerRadius::Custom(r) => CornerRadius::Custom(non_negative(r)),
            other => other,
        };
        self
    }

    /// Sets the size class.
    #[must_use]
    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.size_class = size_class;
        self
    }

    /// Sets the insets between the viewport edge and the container.
    #[must_use]
    pub fn with_outer_paddings(mut self, insets: Insets) -> Self {
        self.outer_paddings = non_negative_insets(insets);
        self
    }

    /// Sets the insets between the container edge and its sections.
    #[must_use]
    pub fn with_content_paddings(mut self, insets: Insets) -> Self {
        self.content_paddings = non_negative_insets(insets);
        self
    }

    /// Sets the gap between header, body, and footer.
    #[must_use]
    pub fn with_content_spacing(mut self, spacing: f64) -> Self {
        self.content_spacing = non_negative(spacing);
        self
    }

    /// Sets whether tapping the overlay dismisses the presentation.
    #[must_use]
    pub fn with_closes_on_overlay_tap(mut self, closes: bool) -> Self {
        self.closes_on_overlay_tap = closes;
        self
    }

    /// Sets the appear/disappear duration.
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Sets the appear/disappear duration in seconds.
    ///
    /// Negative, NaN, and non-finite values become zero.
    #[must_use]
    pub fn with_transition_seconds(mut self, seconds: f64) -> Self {
        self.transition_duration =
            Duration::try_from_secs_f64(non_negative(seconds)).unwrap_or(Duration::ZERO);
        self
    }

    /// Sets the placement (and, for sheets, the drag options).
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Overlay style.
    #[must_use]
    pub fn overlay_style(&self) -> OverlayStyle {
        self.overlay_style
    }

    /// Corner radius.
    #[must_use]
    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    /// Size class.
    #[must_use]
    pub fn size_class(&self) -> SizeClass {
        self.size_class
    }

    /// Insets between the viewport edge and the container.
    #[must_use]
    pub fn outer_paddings(&self) -> Insets {
        self.outer_paddings
    }

    /// Insets between the container edge and its sections.
    #[must_use]
    pub fn content_paddings(&self) -> Insets {
        self.content_paddings
    }

    /// Gap between present sections.
    #[must_use]
    pub fn content_spacing(&self) -> f64 {
        self.content_spacing
    }

    /// Whether tapping the overlay dismisses.
    #[must_use]
    pub fn closes_on_overlay_tap(&self) -> bool {
        self.closes_on_overlay_tap
    }

    /// Appear/disappear duration.
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        self.transition_duration
    }

    /// Placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl Diff for ModalConfig {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new(
            "overlay_style",
            |o, n| o.overlay_style != n.overlay_style,
            Invalidation::RESTYLE,
        ),
        Rule::new(
            "corner_radius",
            |o, n| o.corner_radius != n.corner_radius,
            Invalidation::RESTYLE,
        ),
        Rule::new(
            "size_class",
            |o, n| o.size_class != n.size_class,
            Invalidation::SIZE.union(Invalidation::LAYOUT),
        ),
        Rule::new(
            "paddings",
            |o, n| o.outer_paddings != n.outer_paddings || o.content_paddings != n.content_paddings,
            Invalidation::SIZE.union(Invalidation::LAYOUT),
        ),
        Rule::new(
            "content_spacing",
            |o, n| o.content_spacing != n.content_spacing,
            Invalidation::SIZE.union(Invalidation::LAYOUT),
        ),
        Rule::new(
            "placement",
            |o, n| o.placement.is_bottom() != n.placement.is_bottom(),
            Invalidation::RESTYLE.union(Invalidation::LAYOUT),
        ),
    ];
}
