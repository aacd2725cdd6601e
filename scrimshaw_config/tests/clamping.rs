// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for config construction.

use kurbo::Insets;
use proptest::prelude::*;
use scrimshaw_config::{CornerRadius, ModalConfig, ModalTheme, SizeClass};

proptest! {
    #[test]
    fn clamped_fields_are_never_negative(
        x0 in -1e6_f64..1e6,
        y0 in -1e6_f64..1e6,
        x1 in -1e6_f64..1e6,
        y1 in -1e6_f64..1e6,
        spacing in -1e6_f64..1e6,
        seconds in -10.0_f64..10.0,
        radius in -100.0_f64..100.0,
    ) {
        let insets = Insets::new(x0, y0, x1, y1);
        let config = ModalConfig::new()
            .with_outer_paddings(insets)
            .with_content_paddings(insets)
            .with_content_spacing(spacing)
            .with_transition_seconds(seconds)
            .with_corner_radius(CornerRadius::Custom(radius));

        for i in [config.outer_paddings(), config.content_paddings()] {
            prop_assert!(i.x0 >= 0.0 && i.y0 >= 0.0 && i.x1 >= 0.0 && i.y1 >= 0.0);
        }
        prop_assert!(config.content_spacing() >= 0.0);
        prop_assert!(config.transition_duration().as_secs_f64() >= 0.0);
        prop_assert!(ModalTheme::default().corner_radius(config.corner_radius()) >= 0.0);
    }

    #[test]
    fn theme_widths_stay_positive(width in -1e6_f64..1e6) {
        let theme = ModalTheme {
            small_width: width,
            medium_width: width,
            large_width: width,
            ..ModalTheme::default()
        };
        for class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large, SizeClass::Full] {
            prop_assert!(theme.preferred_width(class) > 0.0);
        }
    }
}

#[test]
fn structural_equality_ignores_construction_path() {
    let a = ModalConfig::new().with_content_spacing(-3.0);
    let b = ModalConfig::new().with_content_spacing(0.0);
    assert_eq!(a, b);
}
