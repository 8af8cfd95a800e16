//! Route guard: maps `(path, auth state)` to a view or a redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every top-level route in `app` renders through this decision so the
//! authenticated-only views and the login view agree on one table. The two
//! callback routes (`/oauth2/redirect`, `/payment/callback`) render in either
//! auth state: they must be able to process their query parameters even when
//! the tab that receives them holds no session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const UPGRADE_PATH: &str = "/upgrade";
pub const OAUTH_REDIRECT_PATH: &str = "/oauth2/redirect";
pub const PAYMENT_CALLBACK_PATH: &str = "/payment/callback";

/// Renderable top-level views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    OAuthRedirect,
    Upgrade,
    PaymentCallback,
    Dashboard,
    NotFound,
}

/// Outcome of guarding a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Render(View),
    Redirect(&'static str),
}

/// Decide what `path` shows for the given auth state.
///
/// Rules are evaluated in order; unknown paths render the not-found view.
pub fn resolve(path: &str, authenticated: bool) -> Decision {
    match normalize(path) {
        LOGIN_PATH if authenticated => Decision::Redirect(DASHBOARD_PATH),
        LOGIN_PATH => Decision::Render(View::Login),
        OAUTH_REDIRECT_PATH => Decision::Render(View::OAuthRedirect),
        UPGRADE_PATH if authenticated => Decision::Render(View::Upgrade),
        UPGRADE_PATH => Decision::Redirect(LOGIN_PATH),
        PAYMENT_CALLBACK_PATH => Decision::Render(View::PaymentCallback),
        DASHBOARD_PATH if authenticated => Decision::Render(View::Dashboard),
        DASHBOARD_PATH => Decision::Redirect(LOGIN_PATH),
        "/" if authenticated => Decision::Redirect(DASHBOARD_PATH),
        "/" => Decision::Redirect(LOGIN_PATH),
        _ => Decision::Render(View::NotFound),
    }
}

/// Whether the decision for `path` changes with auth state. Paths that do
/// not can render before the persisted session has been restored.
pub fn depends_on_auth(path: &str) -> bool {
    resolve(path, false) != resolve(path, true)
}

/// Strip trailing slashes and any query/fragment so `/dashboard/?x=1`
/// guards like `/dashboard`.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}
