//! One-shot message handed from one view to the next without touching the URL.
//!
//! The OAuth2 redirect handler posts the failure text here before navigating
//! to `/login`; the login view takes it on mount. Taking clears the slot, so a
//! later visit to `/login` shows nothing.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LoginNotice {
    slot: RwSignal<Option<String>>,
}

impl Default for LoginNotice {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginNotice {
    pub fn new() -> Self {
        Self { slot: RwSignal::new(None) }
    }

    pub fn post(self, message: impl Into<String>) {
        self.slot.set(Some(message.into()));
    }

    pub fn take(self) -> Option<String> {
        self.slot.try_update(Option::take).flatten()
    }
}
