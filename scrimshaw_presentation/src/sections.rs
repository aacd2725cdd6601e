// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use scrimshaw_compose::Content;

use crate::DismissHandle;

/// Builds one section's content, given a way to dismiss the presentation.
pub type ContentFactory = Box<dyn FnOnce(DismissHandle) -> Box<dyn Content>>;

/// Content factories for header, body, and footer.
///
/// The controller calls each factory once, while it is being built, and never
/// inspects what they return beyond measuring it.
pub struct Sections {
    header: Option<ContentFactory>,
    body: ContentFactory,
    footer: Option<ContentFactory>,
}

pub(crate) struct BuiltSections {
    pub(crate) header: Option<Box<dyn Content>>,
    pub(crate) body: Box<dyn Content>,
    pub(crate) footer: Option<Box<dyn Content>>,
}

fn boxed<F, C>(factory: F) -> ContentFactory
where
    F: FnOnce(DismissHandle) -> C + 'static,
    C: Content + 'static,
{
    Box::new(move |handle| Box::new(factory(handle)) as Box<dyn Content>)
}

impl Sections {
    /// Sections with only a body.
    pub fn new<F, C>(body: F) -> Self
    where
        F: FnOnce(DismissHandle) -> C + 'static,
        C: Content + 'static,
    {
        Self {
            header: None,
            body: boxed(body),
            footer: None,
        }
    }

    /// Adds a header above the body.
    #[must_use]
    pub fn with_header<F, C>(mut self, header: F) -> Self
    where
        F: FnOnce(DismissHandle) -> C + 'static,
        C: Content + 'static,
    {
        self.header = Some(boxed(header));
        self
    }

    /// Adds a footer below the body.
    #[must_use]
    pub fn with_footer<F, C>(mut self, footer: F) -> Self
    where
        F: FnOnce(DismissHandle) -> C + 'static,
        C: Content + 'static,
    {
        self.footer = Some(boxed(footer));
        self
    }

    pub(crate) fn build(self, handle: &DismissHandle) -> BuiltSections {
        BuiltSections {
            header: self.header.map(|f| f(handle.clone())),
            body: (self.body)(handle.clone()),
            footer: self.footer.map(|f| f(handle.clone())),
        }
    }
}

impl fmt::Debug for Sections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sections")
            .field("has_header", &self.header.is_some())
            .field("has_footer", &self.footer.is_some())
            .finish_non_exhaustive()
    }
}
