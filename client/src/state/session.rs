//! Session Context: the tab's authentication state and its only mutators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one [`SessionContext`] through Leptos context. The route
//! guard reads auth presence from it; the login page, the OAuth2 redirect
//! handler, and the dashboard logout button are the only callers of its
//! mutators. Every write to the persisted store goes through here.
//!
//! DESIGN
//! ======
//! Transitions live on the plain [`SessionState`] and take the store as an
//! argument, so they are testable without a browser. `SessionContext` wraps the
//! state in an `RwSignal`, performs the gateway call, and applies the result
//! with `try_update`: if the owning view was disposed while the call was in
//! flight, the result is dropped. Overlapping calls resolve last-write-wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use leptos::prelude::*;

use super::store::{Session, SessionStorage, SessionStore};
use crate::callback::OAuthTokens;
use crate::config::ClientConfig;
use crate::error::GatewayError;
use crate::net::api;
use crate::net::types::{AuthPayload, User};

pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";
pub const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";

/// Coarse auth state used by the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Anonymous,
    Authenticated,
}

/// Current session plus whether persisted storage has been consulted yet.
///
/// `restored` is false during server render and the first client render; the
/// guard shows a neutral placeholder until it flips.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    session: Option<Session>,
    restored: bool,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        if self.session.is_some() { SessionStatus::Authenticated } else { SessionStatus::Anonymous }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access_token.as_str())
    }

    /// Adopt whatever the store holds. Runs once; later calls are no-ops so a
    /// login that completed first is not overwritten.
    pub fn restore<S: SessionStorage>(&mut self, store: &SessionStore<S>) {
        if self.restored {
            return;
        }
        self.restored = true;
        if self.session.is_none() {
            self.session = store.load();
            if self.session.is_some() {
                log::info!("session: restored from storage");
            }
        }
    }

    /// Apply the result of a login or registration call.
    ///
    /// Success replaces the session and persists it; failure leaves both the
    /// state and the store untouched and returns the text to show.
    ///
    /// # Errors
    ///
    /// Returns the server's message, or `fallback` when it sent none.
    pub fn complete_auth<S: SessionStorage>(
        &mut self,
        store: &SessionStore<S>,
        result: Result<AuthPayload, GatewayError>,
        fallback: &str,
    ) -> Result<(), String> {
        match result {
            Ok(payload) => {
                let session = Session {
                    access_token: payload.token,
                    refresh_token: payload.refresh_token,
                    user: payload.user,
                };
                self.establish(store, session);
                Ok(())
            }
            Err(err) => {
                log::warn!("session: authentication failed: {err}");
                Err(err.user_message(fallback))
            }
        }
    }

    /// Adopt tokens delivered by the OAuth2 redirect without a server round
    /// trip. The cached profile is read from the token's claims.
    pub fn adopt_oauth<S: SessionStorage>(&mut self, store: &SessionStore<S>, tokens: OAuthTokens) {
        let user = user_from_token(&tokens.access_token);
        let session = Session {
            access_token: tokens.access_token,
            refresh_token: Some(tokens.refresh_token),
            user,
        };
        self.establish(store, session);
    }

    /// Drop the session and wipe storage. Never fails.
    pub fn logout<S: SessionStorage>(&mut self, store: &SessionStore<S>) {
        store.clear();
        self.session = None;
        self.restored = true;
        log::info!("session: signed out");
    }

    fn establish<S: SessionStorage>(&mut self, store: &SessionStore<S>, session: Session) {
        store.save(&session);
        self.session = Some(session);
        self.restored = true;
        log::info!("session: authenticated");
    }
}

/// Best-effort profile from a JWT's payload: `sub`/`email` become the email,
/// `name` the display name. The signature is not checked; the token is only
/// ever verified by the backend.
pub fn user_from_token(token: &str) -> User {
    let claims = token
        .split('.')
        .nth(1)
        .and_then(|payload| URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok())
        .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok())
        .unwrap_or_default();

    let claim = |key: &str| claims.get(key).and_then(serde_json::Value::as_str).map(str::to_owned);
    let email = claim("email").or_else(|| claim("sub").filter(|s| s.contains('@'))).unwrap_or_default();
    User {
        id: None,
        name: claim("name").unwrap_or_default(),
        email,
        is_premium: claims.get("isPremium").and_then(serde_json::Value::as_bool).unwrap_or(false),
        role: claim("role"),
    }
}

/// Context handle: the single accessor for session reads and writes.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    config: StoredValue<ClientConfig>,
}

impl SessionContext {
    pub fn new(config: ClientConfig) -> Self {
        Self { state: RwSignal::new(SessionState::default()), config: StoredValue::new(config) }
    }

    /// Reactive auth presence.
    pub fn is_authenticated(self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Reactive restore flag.
    pub fn is_restored(self) -> bool {
        self.state.with(SessionState::is_restored)
    }

    /// Reactive copy of the cached profile.
    pub fn user(self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }

    /// Bearer token for gateway calls, read without subscribing.
    pub fn access_token(self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token().map(str::to_owned))
    }

    pub fn config(self) -> ClientConfig {
        self.config.get_value()
    }

    /// Load the persisted session. Called once after hydration.
    pub fn restore(self) {
        self.state.update(|s| s.restore(&SessionStore::browser()));
    }

    /// # Errors
    ///
    /// Returns user-facing text when the backend rejects the credentials or is
    /// unreachable.
    pub async fn login(self, email: String, password: String) -> Result<(), String> {
        let result = api::login(&self.config(), &email, &password).await;
        self.apply(result, LOGIN_FALLBACK_MESSAGE)
    }

    /// # Errors
    ///
    /// Returns user-facing text when the backend rejects the registration or
    /// is unreachable.
    pub async fn register(self, name: String, email: String, password: String) -> Result<(), String> {
        let result = api::register(&self.config(), &name, &email, &password).await;
        self.apply(result, REGISTER_FALLBACK_MESSAGE)
    }

    pub fn oauth_login(self, tokens: OAuthTokens) {
        self.state.update(|s| s.adopt_oauth(&SessionStore::browser(), tokens));
    }

    pub fn logout(self) {
        self.state.update(|s| s.logout(&SessionStore::browser()));
    }

    fn apply(self, result: Result<AuthPayload, GatewayError>, fallback: &'static str) -> Result<(), String> {
        self.state
            .try_update(|s| s.complete_auth(&SessionStore::browser(), result, fallback))
            .unwrap_or_else(|| Err(fallback.to_owned()))
    }
}
