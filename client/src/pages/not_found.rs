//! Fallback view for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Oops! Page not found."</p>
            <A href="/" attr:class="btn btn--primary">"Go Home"</A>
        </div>
    }
}
