use super::*;
use crate::route_guard::{Decision, View, resolve};
use crate::state::memory_storage::MemoryStorage;

fn payload() -> AuthPayload {
    AuthPayload {
        token: "jwt-access".to_owned(),
        refresh_token: Some("jwt-refresh".to_owned()),
        user: User { id: Some(9), name: "Asha".to_owned(), email: "asha@example.com".to_owned(), ..User::default() },
    }
}

fn tokens(access: &str) -> OAuthTokens {
    OAuthTokens { access_token: access.to_owned(), refresh_token: "R".to_owned() }
}

/// Unsigned JWT with the given JSON payload.
fn jwt(claims: &serde_json::Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims).unwrap());
    format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig")
}

// =============================================================
// Defaults + restore
// =============================================================

#[test]
fn default_state_is_anonymous_and_unrestored() {
    let state = SessionState::default();
    assert_eq!(state.status(), SessionStatus::Anonymous);
    assert!(!state.is_restored());
    assert_eq!(state.user(), None);
}

#[test]
fn restore_adopts_persisted_session() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut first = SessionState::default();
    first.complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE).unwrap();

    let mut reloaded = SessionState::default();
    reloaded.restore(&store);
    assert!(reloaded.is_restored());
    assert!(reloaded.is_authenticated());
    assert_eq!(reloaded.access_token(), Some("jwt-access"));
}

#[test]
fn restore_runs_once() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.restore(&store);
    SessionState::default().complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE).unwrap();
    state.restore(&store);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_does_not_overwrite_a_completed_login() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.adopt_oauth(&store, tokens("oauth-token"));
    state.restore(&store);
    assert_eq!(state.access_token(), Some("oauth-token"));
}

// =============================================================
// Login / register
// =============================================================

#[test]
fn successful_login_authenticates_and_persists() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    assert_eq!(state.complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE), Ok(()));
    assert!(state.is_authenticated());

    let stored = store.load().expect("stored session");
    assert_eq!(stored.access_token, "jwt-access");
    assert_eq!(stored.user.email, "asha@example.com");
    assert_eq!(resolve("/", state.is_authenticated()), Decision::Redirect("/dashboard"));
}

#[test]
fn rejected_login_returns_server_message_and_touches_nothing() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    let err = GatewayError::Rejected { status: 401, message: Some("Bad credentials".to_owned()) };
    assert_eq!(state.complete_auth(&store, Err(err), LOGIN_FALLBACK_MESSAGE), Err("Bad credentials".to_owned()));
    assert_eq!(state.status(), SessionStatus::Anonymous);
    assert!(store.storage().keys().is_empty());
}

#[test]
fn unreachable_backend_returns_fallback() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    let err = GatewayError::Network("failed to fetch".to_owned());
    assert_eq!(
        state.complete_auth(&store, Err(err), REGISTER_FALLBACK_MESSAGE),
        Err("Registration failed".to_owned())
    );
    assert!(!state.is_authenticated());
}

#[test]
fn failed_login_keeps_an_existing_session() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE).unwrap();
    let _ = state.complete_auth(&store, Err(GatewayError::Unavailable), LOGIN_FALLBACK_MESSAGE);
    assert_eq!(state.access_token(), Some("jwt-access"));
    assert_eq!(store.load().map(|s| s.access_token), Some("jwt-access".to_owned()));
}

#[test]
fn last_resolved_login_wins() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    let mut second = payload();
    second.token = "second".to_owned();
    state.complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE).unwrap();
    state.complete_auth(&store, Ok(second), LOGIN_FALLBACK_MESSAGE).unwrap();
    assert_eq!(state.access_token(), Some("second"));
    assert_eq!(store.load().map(|s| s.access_token), Some("second".to_owned()));
}

// =============================================================
// OAuth2 adoption
// =============================================================

#[test]
fn oauth_adoption_stores_token_and_authenticates() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.adopt_oauth(&store, tokens("T"));
    assert!(state.is_authenticated());
    let stored = store.load().expect("stored session");
    assert_eq!(stored.access_token, "T");
    assert_eq!(stored.refresh_token.as_deref(), Some("R"));
    assert_eq!(resolve("/", true), Decision::Redirect("/dashboard"));
}

#[test]
fn user_from_token_reads_claims() {
    let token = jwt(&serde_json::json!({ "sub": "ravi@example.com", "role": "USER" }));
    let user = user_from_token(&token);
    assert_eq!(user.email, "ravi@example.com");
    assert_eq!(user.display_name(), "ravi");
    assert_eq!(user.role.as_deref(), Some("USER"));
    assert!(!user.is_premium);
}

#[test]
fn user_from_token_prefers_explicit_email_and_name() {
    let token = jwt(&serde_json::json!({ "sub": "42", "email": "a@b.com", "name": "Asha" }));
    let user = user_from_token(&token);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "Asha");
}

#[test]
fn user_from_opaque_token_is_placeholder() {
    let user = user_from_token("opaque");
    assert_eq!(user, User::default());
    assert_eq!(user.display_name(), "User");
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_store_and_gates_paths() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.complete_auth(&store, Ok(payload()), LOGIN_FALLBACK_MESSAGE).unwrap();
    state.logout(&store);

    assert_eq!(store.load(), None);
    assert_eq!(state.status(), SessionStatus::Anonymous);
    for path in ["/dashboard", "/upgrade"] {
        assert_eq!(resolve(path, state.is_authenticated()), Decision::Redirect("/login"));
    }
    assert_eq!(resolve("/login", state.is_authenticated()), Decision::Render(View::Login));
}

#[test]
fn logout_when_anonymous_is_harmless() {
    let store = SessionStore::new(MemoryStorage::default());
    let mut state = SessionState::default();
    state.logout(&store);
    assert!(state.is_restored());
    assert!(!state.is_authenticated());
}
