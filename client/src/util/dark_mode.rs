//! Theme preference: persisted under its own storage key, applied as a
//! `data-theme` attribute on `<html>`.
//!
//! The key sits outside the session record, so logout keeps the theme. With
//! no stored choice the browser's `prefers-color-scheme` decides.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::store::{BrowserStorage, SessionStorage};

pub const THEME_KEY: &str = "spendwise.theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

/// Stored choice, if any. Unknown values count as no choice.
pub fn stored_preference<S: SessionStorage>(storage: &S) -> Option<bool> {
    match storage.read(THEME_KEY) {
        Ok(Some(raw)) => match raw.as_str() {
            DARK => Some(true),
            LIGHT => Some(false),
            _ => None,
        },
        Ok(None) => None,
        Err(err) => {
            log::warn!("theme: {err}");
            None
        }
    }
}

pub fn save_preference<S: SessionStorage>(storage: &S, dark: bool) {
    if let Err(err) = storage.write(THEME_KEY, theme_name(dark)) {
        log::warn!("theme: {err}");
    }
}

fn theme_name(dark: bool) -> &'static str {
    if dark { DARK } else { LIGHT }
}

/// Current preference: the stored choice, else the system setting.
pub fn read_preference() -> bool {
    stored_preference(&BrowserStorage).unwrap_or_else(system_prefers_dark)
}

/// Flip the theme, apply it, and remember the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    save_preference(&BrowserStorage, next);
    next
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

#[cfg(not(feature = "hydrate"))]
fn system_prefers_dark() -> bool {
    false
}

#[cfg(feature = "hydrate")]
pub fn apply(dark: bool) {
    let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", theme_name(dark));
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn apply(_dark: bool) {}
