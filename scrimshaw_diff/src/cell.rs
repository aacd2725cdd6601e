// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Holder for the previously applied model.

use crate::{Diff, Invalidation};

/// Receiver of the work a model change requires.
///
/// Hooks are called by [`ModelCell::apply`] with the *new* model, in the order
/// restyle, size invalidation, relayout. Only hooks whose category fired are
/// called.
pub trait ModelView<M> {
    /// Re-applies paint-level properties.
    fn restyle(&mut self, model: &M);

    /// Discards cached measurements.
    fn invalidate_size(&mut self, model: &M) {
        let _ = model;
    }

    /// Recomputes arrangement.
    fn relayout(&mut self, model: &M);
}

/// The last model applied to a component, plus a change revision.
///
/// The revision only advances when the assigned model differs structurally
/// from the stored one.
#[derive(Clone, Debug)]
pub struct ModelCell<M> {
    current: M,
    revision: u64,
}

impl<M: Diff> ModelCell<M> {
    /// Creates a cell holding `initial` at revision 0. No work is performed.
    #[must_use]
    pub const fn new(initial: M) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// Creates a cell and performs the full set of work for the first model.
    pub fn mount<V: ModelView<M>>(initial: M, view: &mut V) -> Self {
        let cell = Self::new(initial);
        perform(Invalidation::all(), &cell.current, view);
        cell
    }

    /// The current model.
    #[must_use]
    pub fn get(&self) -> &M {
        &self.current
    }

    /// Number of structurally distinct assignments since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Stores `new` and returns the work it requires, without performing it.
    pub fn set(&mut self, new: M) -> Invalidation {
        if self.current == new {
            return Invalidation::empty();
        }
        let invalidation = M::invalidation(&self.current, &new);
        self.current = new;
        self.revision += 1;
        invalidation
    }

    /// Stores `new` and performs exactly the work it requires on `view`.
    pub fn apply<V: ModelView<M>>(&mut self, new: M, view: &mut V) -> Invalidation {
        let invalidation = self.set(new);
        perform(invalidation, &self.current, view);
        invalidation
    }
}

fn perform<M, V: ModelView<M>>(invalidation: Invalidation, model: &M, view: &mut V) {
    if invalidation.contains(Invalidation::RESTYLE) {
        view.restyle(model);
    }
    if invalidation.contains(Invalidation::SIZE) {
        view.invalidate_size(model);
    }
    if invalidation.contains(Invalidation::LAYOUT) {
        view.relayout(model);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::Rule;

    #[derive(Clone, Copy, PartialEq, Debug)]
    struct Chip {
        alpha: u8,
        height: u16,
    }

    impl Diff for Chip {
        const RULES: &'static [Rule<Self>] = &[
            Rule::new("alpha", |o, n| o.alpha != n.alpha, Invalidation::RESTYLE),
            Rule::new("height", |o, n| o.height != n.height, Invalidation::SIZE),
        ];
    }

    #[derive(Default)]
    struct Recorder(Vec<(&'static str, Chip)>);

    impl ModelView<Chip> for Recorder {
        fn restyle(&mut self, model: &Chip) {
            self.0.push(("restyle", *model));
        }

        fn invalidate_size(&mut self, model: &Chip) {
            self.0.push(("size", *model));
        }

        fn relayout(&mut self, model: &Chip) {
            self.0.push(("layout", *model));
        }
    }

    #[test]
    fn mount_performs_everything() {
        let mut rec = Recorder::default();
        let chip = Chip {
            alpha: 1,
            height: 2,
        };
        let cell = ModelCell::mount(chip, &mut rec);
        assert_eq!(cell.revision(), 0);
        let names: Vec<_> = rec.0.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["restyle", "size", "layout"]);
    }

    #[test]
    fn hooks_see_the_new_model() {
        let mut rec = Recorder::default();
        let mut cell = ModelCell::new(Chip {
            alpha: 1,
            height: 2,
        });
        let new = Chip {
            alpha: 9,
            height: 2,
        };
        cell.apply(new, &mut rec);
        assert_eq!(rec.0, [("restyle", new)]);
        assert_eq!(cell.get(), &new);
        assert_eq!(cell.revision(), 1);
    }

    #[test]
    fn set_does_not_bump_revision_for_equal_model() {
        let mut cell = ModelCell::new(Chip {
            alpha: 1,
            height: 2,
        });
        assert!(
            cell.set(Chip {
                alpha: 1,
                height: 2
            })
            .is_empty()
        );
        assert_eq!(cell.revision(), 0);
    }
}
