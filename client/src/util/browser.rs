//! Thin wrappers over browser APIs that no-op during server render.

use std::future::Future;

/// Run `fut` on the browser event loop. Server renders never start gateway
/// calls, so outside `hydrate` the future is dropped unpolled.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Leave the app for an absolute URL (OAuth2 provider, hosted checkout).
pub fn navigate_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(url) {
                log::warn!("browser: navigation to {url} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Native confirmation prompt. False when there is no window.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
