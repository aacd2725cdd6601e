// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use scrimshaw_compose::ComposeError;

/// Error produced while building or re-laying-out a presentation.
///
/// Misuse (double dismissal, dismissal before presentation, presenting twice)
/// is never an error; those calls are no-ops.
#[derive(Debug)]
#[non_exhaustive]
pub enum PresentError {
    /// The content composer failed to lay out the sections.
    Layout(ComposeError),
}

impl From<ComposeError> for PresentError {
    fn from(error: ComposeError) -> Self {
        Self::Layout(error)
    }
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(error) => write!(f, "presentation could not be laid out: {error}"),
        }
    }
}

impl core::error::Error for PresentError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Layout(error) => Some(error),
        }
    }
}
