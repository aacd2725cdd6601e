// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Diff: decide what work a view-model change actually requires.
//!
//! Every stateful visual component in Scrimshaw is driven by an immutable,
//! structurally comparable model. When a new model is assigned, the component
//! should do only the work the change calls for:
//!
//! - nothing at all when the new model equals the previous one,
//! - a paint-level **restyle** when only cosmetic properties moved,
//! - a **size invalidation** and/or **relayout** when something that affects
//!   geometry changed.
//!
//! This crate makes that decision an explicit, testable function instead of a
//! side effect of assignment. It models it as:
//!
//! - [`Invalidation`]: the set of work categories a change requires.
//! - [`Rule`]: a named predicate over an `(old, new)` pair plus the work it
//!   implies when it fires.
//! - [`Diff`]: implemented by a model type to declare its rules.
//! - [`ModelView`]: implemented by whatever renders the model (a retained
//!   node, a declarative description builder, a layout cache).
//! - [`ModelCell`]: holds the previously applied model and performs exactly
//!   the matching subset of work on each assignment.
//!
//! ## Minimal example
//!
//! ```rust
//! use scrimshaw_diff::{Diff, Invalidation, ModelCell, ModelView, Rule};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Badge {
//!     label_len: usize,
//!     tint: u32,
//! }
//!
//! impl Diff for Badge {
//!     const RULES: &'static [Rule<Self>] = &[
//!         Rule::new("tint", |o, n| o.tint != n.tint, Invalidation::RESTYLE),
//!         Rule::new(
//!             "label",
//!             |o, n| o.label_len != n.label_len,
//!             Invalidation::SIZE.union(Invalidation::LAYOUT),
//!         ),
//!     ];
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<&'static str>);
//!
//! impl ModelView<Badge> for Log {
//!     fn restyle(&mut self, _: &Badge) { self.0.push("restyle"); }
//!     fn invalidate_size(&mut self, _: &Badge) { self.0.push("size"); }
//!     fn relayout(&mut self, _: &Badge) { self.0.push("layout"); }
//! }
//!
//! let mut log = Log::default();
//! let mut cell = ModelCell::new(Badge { label_len: 3, tint: 0 });
//!
//! // Same model: no work.
//! assert!(cell.apply(Badge { label_len: 3, tint: 0 }, &mut log).is_empty());
//! assert!(log.0.is_empty());
//!
//! // Paint-only change: restyle only.
//! cell.apply(Badge { label_len: 3, tint: 7 }, &mut log);
//! assert_eq!(log.0, ["restyle"]);
//! ```
//!
//! ## Ordering
//!
//! When several categories fire at once, [`ModelCell::apply`] performs them in
//! a fixed order: restyle, then size invalidation, then relayout. Views can rely
//! on the model being fully updated before the first hook runs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod invalidation;
mod rule;

pub use cell::{ModelCell, ModelView};
pub use invalidation::Invalidation;
pub use rule::{Diff, Rule, evaluate, explain};
