// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use taffy::TaffyError;

/// Error produced while building or laying out the section tree.
#[derive(Debug)]
pub struct ComposeError {
    source: TaffyError,
}

impl ComposeError {
    /// The underlying layout engine error.
    #[must_use]
    pub fn taffy_error(&self) -> &TaffyError {
        &self.source
    }
}

impl From<TaffyError> for ComposeError {
    fn from(source: TaffyError) -> Self {
        Self { source }
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content layout failed: {}", self.source)
    }
}

impl core::error::Error for ComposeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}
