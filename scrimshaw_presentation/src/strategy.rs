// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-variant visuals, selected once at construction.

use kurbo::{RoundedRectRadii, Size};
use scrimshaw_config::Placement;

use crate::Visual;

/// How a presentation enters, rests, and leaves.
///
/// Every function is pure; the controller owns all state.
///
/// ```
/// use kurbo::Size;
/// use scrimshaw_presentation::{Strategy, Visual};
///
/// let viewport = Size::new(400.0, 800.0);
/// assert_eq!(Strategy::Bottom.entry(viewport).offset_y, 800.0);
/// assert_eq!(Strategy::Center.entry(viewport).scale, 0.0);
/// assert_eq!(Strategy::Center.rest(), Visual::REST);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Dialog centered in the viewport; fades and scales in.
    #[default]
    Center,
    /// Sheet on the bottom edge; slides up from below the viewport.
    Bottom,
}

impl From<Placement> for Strategy {
    fn from(placement: Placement) -> Self {
        match placement {
            Placement::Center => Self::Center,
            Placement::Bottom(_) => Self::Bottom,
        }
    }
}

impl Strategy {
    /// Off-stage visual an appear transition starts from.
    #[must_use]
    pub fn entry(self, viewport: Size) -> Visual {
        match self {
            Self::Center => Visual {
                scrim_progress: 0.0,
                offset_y: 0.0,
                scale: 0.0,
                alpha: 0.0,
            },
            Self::Bottom => Visual {
                scrim_progress: 0.0,
                offset_y: viewport.height,
                scale: 1.0,
                alpha: 1.0,
            },
        }
    }

    /// Resting visual while presented.
    #[must_use]
    pub fn rest(self) -> Visual {
        Visual::REST
    }

    /// Off-stage visual a disappear transition ends at.
    #[must_use]
    pub fn exit(self, viewport: Size) -> Visual {
        self.entry(viewport)
    }

    /// Visual while the content is dragged by `offset`.
    ///
    /// Only the bottom sheet follows drags.
    #[must_use]
    pub fn dragged(self, offset: f64) -> Visual {
        match self {
            Self::Center => Visual::REST,
            Self::Bottom => Visual {
                offset_y: offset,
                ..Visual::REST
            },
        }
    }

    /// Container corner radii for a resolved `radius`.
    ///
    /// The sheet's bottom edge sits on the viewport edge, so only its top
    /// corners are rounded.
    #[must_use]
    pub fn corner_radii(self, radius: f64) -> RoundedRectRadii {
        match self {
            Self::Center => RoundedRectRadii::from_single_radius(radius),
            Self::Bottom => RoundedRectRadii::new(radius, radius, 0.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrimshaw_config::SheetOptions;

    #[test]
    fn selected_from_placement() {
        assert_eq!(Strategy::from(Placement::Center), Strategy::Center);
        assert_eq!(
            Strategy::from(Placement::Bottom(SheetOptions::default())),
            Strategy::Bottom
        );
    }

    #[test]
    fn entry_equals_exit() {
        let viewport = Size::new(300.0, 640.0);
        for strategy in [Strategy::Center, Strategy::Bottom] {
            assert_eq!(strategy.entry(viewport), strategy.exit(viewport));
            assert_eq!(strategy.entry(viewport).scrim_progress, 0.0);
        }
    }

    #[test]
    fn center_ignores_drags() {
        assert_eq!(Strategy::Center.dragged(120.0), Visual::REST);
        assert_eq!(Strategy::Bottom.dragged(120.0).offset_y, 120.0);
    }

    #[test]
    fn sheet_rounds_top_corners_only() {
        let radii = Strategy::Bottom.corner_radii(12.0);
        assert_eq!((radii.top_left, radii.top_right), (12.0, 12.0));
        assert_eq!((radii.bottom_right, radii.bottom_left), (0.0, 0.0));
        assert_eq!(Strategy::Center.corner_radii(12.0).bottom_left, 12.0);
    }
}
