//! OAuth2 return-trip handler at `/oauth2/redirect`.
//!
//! Parses the query once on mount, adopts the tokens on success, and leaves
//! for `/dashboard` (replacing this history entry) or `/login`. A provider
//! error is logged and replaced by a generic notice that travels through
//! [`LoginNotice`], never the URL. A signed-in tab gets no notice, since the
//! guard sends it past the login form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::callback::{CallbackEnvelope, oauth_navigation, parse_oauth};
use crate::state::notice::LoginNotice;
use crate::state::session::SessionContext;

#[component]
pub fn OAuthRedirectPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notice = expect_context::<LoginNotice>();
    let query = use_query_map();
    let navigate = use_navigate();

    // Reads are untracked, so this runs once per mount.
    Effect::new(move || {
        let envelope = query.with_untracked(|params| parse_oauth(|key| params.get(key)));
        let signed_in = untrack(|| session.is_authenticated());
        let navigation = oauth_navigation(&envelope, signed_in);
        match envelope {
            CallbackEnvelope::Success(tokens) => session.oauth_login(tokens),
            CallbackEnvelope::Failure(reason) => log::warn!("oauth: provider returned error: {reason}"),
            CallbackEnvelope::Malformed => log::warn!("oauth: redirect missing token parameters"),
        }
        if let Some(message) = navigation.notice {
            notice.post(message);
        }
        navigate(navigation.target, NavigateOptions { replace: navigation.replace, ..NavigateOptions::default() });
    });

    view! {
        <div class="callback-page">
            <div class="callback-card">
                <div class="spinner"></div>
                <p>"Completing sign-in..."</p>
            </div>
        </div>
    }
}
