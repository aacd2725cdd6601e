// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named diff predicates.

use core::fmt;

use smallvec::SmallVec;

use crate::Invalidation;

/// A named predicate over an `(old, new)` model pair and the work it implies.
///
/// Rules are plain data built from non-capturing closures, so a model can list
/// them in a `const` table (see [`Diff::RULES`]).
pub struct Rule<M> {
    name: &'static str,
    changed: fn(&M, &M) -> bool,
    effect: Invalidation,
}

impl<M> Rule<M> {
    /// Creates a rule.
    ///
    /// `changed` should return `true` when the property group this rule covers
    /// differs between `old` and `new`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        changed: fn(&M, &M) -> bool,
        effect: Invalidation,
    ) -> Self {
        Self {
            name,
            changed,
            effect,
        }
    }

    /// The rule's name, used for tracing and test assertions.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The work this rule requires when it fires.
    #[must_use]
    pub const fn effect(&self) -> Invalidation {
        self.effect
    }

    /// Returns `true` if this rule fires for the given pair.
    #[must_use]
    pub fn fires(&self, old: &M, new: &M) -> bool {
        (self.changed)(old, new)
    }
}

impl<M> Clone for Rule<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Rule<M> {}

impl<M> fmt::Debug for Rule<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("effect", &self.effect)
            .finish_non_exhaustive()
    }
}

/// A model type that declares how its changes map to work.
///
/// Implementors only provide [`Diff::RULES`]; [`Diff::invalidation`] combines
/// them. A model whose fields changed without any rule firing (for example a
/// purely behavioral flag) yields an empty [`Invalidation`].
pub trait Diff: PartialEq + Sized + 'static {
    /// The model's diff rules.
    const RULES: &'static [Rule<Self>];

    /// Computes the work required to go from `old` to `new`.
    ///
    /// Structurally equal models short-circuit before any rule is evaluated.
    fn invalidation(old: &Self, new: &Self) -> Invalidation {
        evaluate(Self::RULES, old, new)
    }
}

/// Evaluates `rules` over `(old, new)` and unions the effects of those that fire.
///
/// Returns an empty set without evaluating any rule when `old == new`.
///
/// ```
/// use scrimshaw_diff::{Invalidation, Rule, evaluate};
///
/// let rules = [Rule::new("len", |o: &u32, n: &u32| o != n, Invalidation::LAYOUT)];
/// assert_eq!(evaluate(&rules, &1, &1), Invalidation::empty());
/// assert_eq!(evaluate(&rules, &1, &2), Invalidation::LAYOUT);
/// ```
pub fn evaluate<M: PartialEq>(rules: &[Rule<M>], old: &M, new: &M) -> Invalidation {
    if old == new {
        return Invalidation::empty();
    }
    rules
        .iter()
        .filter(|rule| rule.fires(old, new))
        .fold(Invalidation::empty(), |acc, rule| acc | rule.effect)
}

/// Returns the names of the rules that fire for `(old, new)`, in table order.
pub fn explain<M: PartialEq>(
    rules: &[Rule<M>],
    old: &M,
    new: &M,
) -> SmallVec<[&'static str; 4]> {
    if old == new {
        return SmallVec::new();
    }
    rules
        .iter()
        .filter(|rule| rule.fires(old, new))
        .map(Rule::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Swatch {
        color: u32,
        width: f64,
        enabled: bool,
    }

    impl Diff for Swatch {
        const RULES: &'static [Rule<Self>] = &[
            Rule::new("color", |o, n| o.color != n.color, Invalidation::RESTYLE),
            Rule::new(
                "width",
                |o, n| o.width != n.width,
                Invalidation::SIZE.union(Invalidation::LAYOUT),
            ),
        ];
    }

    const BASE: Swatch = Swatch {
        color: 1,
        width: 10.0,
        enabled: true,
    };

    #[test]
    fn equal_models_need_nothing() {
        assert!(Swatch::invalidation(&BASE, &BASE.clone()).is_empty());
        assert!(explain(Swatch::RULES, &BASE, &BASE).is_empty());
    }

    #[test]
    fn paint_change_only_restyles() {
        let new = Swatch { color: 2, ..BASE };
        assert_eq!(Swatch::invalidation(&BASE, &new), Invalidation::RESTYLE);
        assert_eq!(explain(Swatch::RULES, &BASE, &new).as_slice(), ["color"]);
    }

    #[test]
    fn combined_change_unions_effects() {
        let new = Swatch {
            color: 2,
            width: 12.0,
            ..BASE
        };
        assert_eq!(Swatch::invalidation(&BASE, &new), Invalidation::all());
        assert_eq!(
            explain(Swatch::RULES, &BASE, &new).as_slice(),
            ["color", "width"]
        );
    }

    #[test]
    fn unmatched_change_is_empty() {
        let new = Swatch {
            enabled: false,
            ..BASE
        };
        assert_ne!(BASE, new);
        assert!(Swatch::invalidation(&BASE, &new).is_empty());
    }

    #[test]
    fn rule_accessors() {
        let rule = Swatch::RULES[1];
        assert_eq!(rule.name(), "width");
        assert!(rule.effect().affects_geometry());
    }
}
