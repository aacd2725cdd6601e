// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Work categories produced by a model diff.

bitflags::bitflags! {
    /// Categories of work a model change requires.
    ///
    /// An empty set means the change (if any) has no visual consequence.
    ///
    /// ```
    /// use scrimshaw_diff::Invalidation;
    ///
    /// let geometry = Invalidation::SIZE | Invalidation::LAYOUT;
    /// assert!(geometry.affects_geometry());
    /// assert!(!Invalidation::RESTYLE.affects_geometry());
    /// ```
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Invalidation: u8 {
        /// Paint-level properties changed (colors, opacity, transforms, radii).
        const RESTYLE = 0b0000_0001;
        /// Something affecting intrinsic size changed; cached measurements are stale.
        const SIZE    = 0b0000_0010;
        /// Arrangement must be recomputed.
        const LAYOUT  = 0b0000_0100;
    }
}

impl Invalidation {
    /// Returns `true` if this set requires a size invalidation or a relayout.
    #[must_use]
    pub const fn affects_geometry(self) -> bool {
        self.intersects(Self::SIZE.union(Self::LAYOUT))
    }
}
