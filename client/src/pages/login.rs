//! Login page: email + password sign-in, registration, and OAuth2 providers.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{OAuthProvider, oauth_authorization_url};
use crate::route_guard::DASHBOARD_PATH;
use crate::state::notice::LoginNotice;
use crate::state::session::SessionContext;
use crate::util::browser;

pub const PASSWORD_MIN_LEN: usize = 6;

/// Which form the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

/// Trimmed form input ready for the session context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Login { email: String, password: String },
    Register { name: String, email: String, password: String },
}

/// Presence and length checks; the backend does the rest.
///
/// # Errors
///
/// Returns the text to show under the form.
pub fn validate_credentials(mode: AuthMode, name: &str, email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    match mode {
        AuthMode::Login => Ok(Credentials::Login { email: email.to_owned(), password: password.to_owned() }),
        AuthMode::Register => {
            let name = name.trim();
            if name.is_empty() {
                return Err("Enter your full name.");
            }
            if password.chars().count() < PASSWORD_MIN_LEN {
                return Err("Password must be at least 6 characters.");
            }
            Ok(Credentials::Register { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let notice = expect_context::<LoginNotice>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(notice.take());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(
            mode.get_untracked(),
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        browser::spawn(async move {
            let result = match credentials {
                Credentials::Login { email, password } => session.login(email, password).await,
                Credentials::Register { name, email, password } => session.register(name, email, password).await,
            };
            match result {
                Ok(()) => navigate(DASHBOARD_PATH, NavigateOptions::default()),
                Err(message) => {
                    let _ = error.try_set(Some(message));
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        error.set(None);
    };

    let oauth = move |provider: OAuthProvider| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            browser::navigate_external(&oauth_authorization_url(&session.config(), provider));
        }
    };
    let config = session.config();
    let google_href = oauth_authorization_url(&config, OAuthProvider::Google);
    let github_href = oauth_authorization_url(&config, OAuthProvider::GitHub);

    let is_register = move || mode.get() == AuthMode::Register;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"SpendWise"</h1>
                <p class="login-card__subtitle">"Intelligent financial insights powered by AI"</p>

                <a href=google_href class="login-button login-button--oauth" on:click=oauth(OAuthProvider::Google)>
                    "Continue with Google"
                </a>
                <a href=github_href class="login-button login-button--oauth" on:click=oauth(OAuthProvider::GitHub)>
                    "Continue with GitHub"
                </a>

                <div class="login-divider">
                    <span>"Or continue with email"</span>
                </div>

                <h2 class="login-card__mode">{move || mode.get().submit_label()}</h2>
                <form class="login-form" on:submit=on_submit>
                    <Show when=is_register>
                        <label class="login-label">
                            "Full Name"
                            <input
                                class="login-input"
                                type="text"
                                placeholder="Your name"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            required
                            placeholder="••••••••"
                            minlength=move || is_register().then_some(PASSWORD_MIN_LEN.to_string())
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=is_register>
                        <p class="login-hint">"At least 6 characters."</p>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <p class="login-toggle">
                    {move || if is_register() { "Already have an account? " } else { "Don't have an account? " }}
                    <button class="login-toggle__button" type="button" on:click=on_toggle>
                        {move || mode.get().toggled().submit_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}
