// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One model, two backends: both must see the same work for the same change.

use scrimshaw_diff::{Diff, Invalidation, ModelCell, ModelView, Rule, explain};

#[derive(Clone, Debug, PartialEq)]
struct Progress {
    value: f64,
    tint: u32,
    label: Option<&'static str>,
}

impl Diff for Progress {
    const RULES: &'static [Rule<Self>] = &[
        Rule::new("value", |o, n| o.value != n.value, Invalidation::RESTYLE),
        Rule::new("tint", |o, n| o.tint != n.tint, Invalidation::RESTYLE),
        Rule::new(
            "label",
            |o, n| o.label.map(str::len) != n.label.map(str::len),
            Invalidation::SIZE.union(Invalidation::LAYOUT),
        ),
    ];
}

/// Imperatively mutated node.
#[derive(Default)]
struct RetainedNode {
    fill_fraction: f64,
    measured_width: Option<f64>,
    ops: Vec<&'static str>,
}

impl ModelView<Progress> for RetainedNode {
    fn restyle(&mut self, model: &Progress) {
        self.fill_fraction = model.value.clamp(0.0, 1.0);
        self.ops.push("restyle");
    }

    fn invalidate_size(&mut self, _: &Progress) {
        self.measured_width = None;
        self.ops.push("size");
    }

    fn relayout(&mut self, model: &Progress) {
        let chars = model.label.map_or(0, str::len);
        self.measured_width = Some(120.0 + 7.0 * chars as f64);
        self.ops.push("layout");
    }
}

/// Rebuilds a description, but skips rebuilding when nothing changed.
#[derive(Default)]
struct Declarative {
    builds: usize,
    layouts: usize,
}

impl ModelView<Progress> for Declarative {
    fn restyle(&mut self, _: &Progress) {
        self.builds += 1;
    }

    fn relayout(&mut self, _: &Progress) {
        self.layouts += 1;
    }
}

fn progress(value: f64, label: Option<&'static str>) -> Progress {
    Progress {
        value,
        tint: 0x3366_ffff,
        label,
    }
}

#[test]
fn both_backends_do_the_same_work() {
    let mut retained = RetainedNode::default();
    let mut declarative = Declarative::default();
    let initial = progress(0.0, Some("Uploading"));
    let mut a = ModelCell::mount(initial.clone(), &mut retained);
    let mut b = ModelCell::mount(initial, &mut declarative);

    for next in [
        progress(0.25, Some("Uploading")),
        progress(0.25, Some("Uploading")),
        progress(0.5, Some("Verifying")),
        progress(0.5, Some("Done")),
    ] {
        assert_eq!(a.apply(next.clone(), &mut retained), b.apply(next, &mut declarative));
    }

    assert_eq!(
        retained.ops,
        ["restyle", "size", "layout", "restyle", "restyle", "size", "layout"]
    );
    assert_eq!(retained.fill_fraction, 0.5);
    assert_eq!(retained.measured_width, Some(120.0 + 28.0));
    assert_eq!((declarative.builds, declarative.layouts), (3, 2));
    assert_eq!((a.revision(), b.revision()), (3, 3));
}

#[test]
fn explain_names_size_rules() {
    let old = progress(0.1, None);
    let new = Progress {
        tint: 0,
        ..progress(0.9, Some("Retry"))
    };
    assert_eq!(
        explain(Progress::RULES, &old, &new).as_slice(),
        ["value", "tint", "label"]
    );
}
