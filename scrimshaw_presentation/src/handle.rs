// Copyright 2026 the Scrimshaw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal requests from content back to its controller.

use core::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Queued `animated` flags of pending dismiss requests.
#[derive(Debug, Default)]
pub(crate) struct Mailbox(RefCell<VecDeque<bool>>);

impl Mailbox {
    /// Removes and returns every pending request, oldest first.
    pub(crate) fn take(&self) -> VecDeque<bool> {
        self.0.take()
    }
}

/// Lets content ask its presentation to dismiss.
///
/// Every content factory receives one. Handles are cheap to clone and hold
/// only a weak link: requests are queued and processed at the start of the
/// controller's next entry point ([`tick`](crate::PresentationController::tick),
/// [`tap`](crate::PresentationController::tap),
/// [`pump`](crate::PresentationController::pump), and so on). A handle can
/// therefore never re-enter the controller, and outliving it is harmless.
#[derive(Clone, Debug)]
pub struct DismissHandle {
    mailbox: Weak<Mailbox>,
}

impl DismissHandle {
    pub(crate) fn new(mailbox: &Rc<Mailbox>) -> Self {
        Self {
            mailbox: Rc::downgrade(mailbox),
        }
    }

    /// Requests dismissal. Returns `false` if the controller no longer exists.
    pub fn dismiss(&self, animated: bool) -> bool {
        match self.mailbox.upgrade() {
            Some(mailbox) => {
                mailbox.0.borrow_mut().push_back(animated);
                true
            }
            None => false,
        }
    }

    /// Whether the controller still exists.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.mailbox.strong_count() > 0
    }
}
