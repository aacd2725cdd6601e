// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrimshaw Compose: arrange a modal's header, body, and footer.
//!
//! A presentation's content is an optional header, a mandatory body, and an
//! optional footer, stacked vertically with a fixed gap between the sections
//! that are present and paddings around the whole stack. The body is sized to
//! its intrinsic height but yields (and scrolls) when the viewport is short.
//!
//! The container's width follows the config's preferred maximum as a **soft**
//! constraint: when the viewport (minus outer paddings) is narrower than the
//! preferred width, the container fills the available width instead of
//! overflowing.
//!
//! Layout is delegated to [`taffy`]: the composer owns a small flexbox tree,
//! measures sections through the [`Content`] trait, and converts results to
//! Kurbo rectangles in viewport coordinates.
//!
//! ```rust
//! use kurbo::Size;
//! use scrimshaw_compose::{Anchor, ComposerModel, Content, ContentComposer};
//!
//! struct Fixed(f64);
//! impl Content for Fixed {
//!     fn measure(&self, _width: f64) -> f64 { self.0 }
//! }
//!
//! let model = ComposerModel {
//!     preferred_width: 480.0,
//!     ..ComposerModel::new(Size::new(320.0, 800.0), Anchor::Center)
//! };
//! let composer = ContentComposer::new(model, None, Box::new(Fixed(100.0)), None).unwrap();
//!
//! // 320 wide viewport with 16 outer padding: the preferred 480 yields to 288.
//! assert_eq!(composer.layout().container.width(), 288.0);
//! ```
//!
//! The composer holds its [`ComposerModel`] in a [`scrimshaw_diff::ModelCell`];
//! assigning an equal model performs no layout work at all.

mod composer;
mod error;

pub use composer::{Anchor, ComposedLayout, ComposerModel, Content, ContentComposer};
pub use error::ComposeError;
