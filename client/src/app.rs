//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the tab's shared state: one [`SessionContext`], the
//! [`LoginNotice`] slot, and UI chrome. Every top-level route renders through
//! [`Guarded`], which asks `route_guard::resolve` what the path shows for the
//! current auth state.
//!
//! DESIGN
//! ======
//! The persisted session is read after hydration, so the server and the
//! first client render agree. Until then, paths whose outcome depends on auth
//! render a neutral placeholder instead of guessing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, oauth_redirect::OAuthRedirectPage,
    payment_callback::PaymentCallbackPage, upgrade::UpgradePage,
};
use crate::route_guard::{
    self, DASHBOARD_PATH, Decision, LOGIN_PATH, OAUTH_REDIRECT_PATH, PAYMENT_CALLBACK_PATH, UPGRADE_PATH, View,
};
use crate::state::notice::LoginNotice;
use crate::state::session::SessionContext;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(ClientConfig::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(LoginNotice::new());
    provide_context(ui);

    // Browser-only: effects do not run during server render.
    Effect::new(move || {
        session.restore();
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/spendwise.css"/>
        <Title text="SpendWise"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=|| view! { <Guarded path="/"/> }/>
                <Route path=StaticSegment("login") view=|| view! { <Guarded path=LOGIN_PATH/> }/>
                <Route path=StaticSegment("dashboard") view=|| view! { <Guarded path=DASHBOARD_PATH/> }/>
                <Route path=StaticSegment("upgrade") view=|| view! { <Guarded path=UPGRADE_PATH/> }/>
                <Route
                    path=(StaticSegment("oauth2"), StaticSegment("redirect"))
                    view=|| view! { <Guarded path=OAUTH_REDIRECT_PATH/> }
                />
                <Route
                    path=(StaticSegment("payment"), StaticSegment("callback"))
                    view=|| view! { <Guarded path=PAYMENT_CALLBACK_PATH/> }
                />
            </Routes>
        </Router>
    }
}

/// What a guarded route shows right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    /// Auth state not known yet.
    Pending,
    Decided(Decision),
}

/// Render `path` through the route guard, following redirects with the
/// router.
#[component]
fn Guarded(path: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let waits_for_session = route_guard::depends_on_auth(path);

    // Memoized so unrelated session changes do not remount the page.
    let gate = Memo::new(move |_| {
        if waits_for_session && !session.is_restored() {
            Gate::Pending
        } else {
            Gate::Decided(route_guard::resolve(path, session.is_authenticated()))
        }
    });

    move || match gate.get() {
        Gate::Pending => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        Gate::Decided(Decision::Redirect(target)) => view! { <Redirect path=target/> }.into_any(),
        Gate::Decided(Decision::Render(view)) => render(view),
    }
}

fn render(view: View) -> AnyView {
    match view {
        View::Login => view! { <LoginPage/> }.into_any(),
        View::OAuthRedirect => view! { <OAuthRedirectPage/> }.into_any(),
        View::Upgrade => view! { <UpgradePage/> }.into_any(),
        View::PaymentCallback => view! { <PaymentCallbackPage/> }.into_any(),
        View::Dashboard => view! { <DashboardPage/> }.into_any(),
        View::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
