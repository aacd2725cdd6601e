// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use scrimshaw_gesture::ReleaseDecision;

/// Lifecycle position of a presentation.
///
/// `Initial → Appearing → Presented ⇄ Interacting → Disappearing → Dismissed`.
/// `Dismissed` is terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresentationState {
    /// Built but not yet shown.
    #[default]
    Initial,
    /// Appear transition running.
    Appearing,
    /// At rest and accepting input.
    Presented,
    /// A drag is in progress, or its rebound is still settling.
    Interacting,
    /// Disappear transition running.
    Disappearing,
    /// Torn down; nothing leaves this state.
    Dismissed,
}

impl PresentationState {
    /// Whether any part of the presentation may be on screen.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Initial | Self::Dismissed)
    }

    /// Whether a dismissal has been committed.
    #[must_use]
    pub const fn is_closing(self) -> bool {
        matches!(self, Self::Disappearing | Self::Dismissed)
    }
}

/// Something observable that happened inside a controller.
///
/// Drained with [`PresentationController::drain_events`](crate::PresentationController::drain_events).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresentationEvent {
    /// The lifecycle state changed.
    StateChanged {
        /// Previous state.
        from: PresentationState,
        /// New state.
        to: PresentationState,
    },
    /// A drag ended, normally or by cancellation.
    DragResolved(ReleaseDecision),
}
