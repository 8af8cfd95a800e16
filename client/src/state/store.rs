//! Persisted Session Store over browser key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the durable copy of the session (access token, refresh token, cached
//! user profile) so a reload lands back in the same auth state. Only
//! `state::session` writes through this store.
//!
//! DESIGN
//! ======
//! The token and the profile are serialized into one record under
//! [`SESSION_KEY`], so a reader can never observe one without the other. The
//! older layout kept them under separate keys; [`SessionStore::load`] migrates
//! a complete legacy pair (`accessToken` + `user`, or `token` +
//! `refreshToken`) and discards a partial one.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are logged and swallowed: with storage disabled the tab
//! still works until reload, it just forgets the session.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use serde::{Deserialize, Serialize};

use super::session::user_from_token;
use crate::error::StorageError;
use crate::net::types::User;

pub const SESSION_KEY: &str = "spendwise.session";

const LEGACY_ACCESS_TOKEN_KEY: &str = "accessToken";
const LEGACY_USER_KEY: &str = "user";
const LEGACY_TOKEN_KEY: &str = "token";
const LEGACY_REFRESH_TOKEN_KEY: &str = "refreshToken";
const LEGACY_KEYS: [&str; 4] = [LEGACY_ACCESS_TOKEN_KEY, LEGACY_USER_KEY, LEGACY_TOKEN_KEY, LEGACY_REFRESH_TOKEN_KEY];

/// Authenticated identity and credentials for this tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

/// Raw string key-value storage.
pub trait SessionStorage {
    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable or throws.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable or throws.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when storage is unavailable or throws.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage` in the browser; unavailable during server render.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Typed session persistence over a [`SessionStorage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self { storage: BrowserStorage }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Last saved session, migrating or discarding legacy keys on the way.
    ///
    /// A record that fails to parse, or carries an empty token, is removed and
    /// reads as absent.
    pub fn load(&self) -> Option<Session> {
        match self.storage.read(SESSION_KEY) {
            Ok(Some(raw)) => match parse_record(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    log::warn!("session store: discarding stored session: {err}");
                    self.clear();
                    None
                }
            },
            Ok(None) => self.migrate_legacy(),
            Err(err) => {
                log::warn!("session store: read failed: {err}");
                None
            }
        }
    }

    /// Persist `session` as one record.
    pub fn save(&self, session: &Session) {
        let raw = match serde_json::to_string(session) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("session store: encode failed: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.write(SESSION_KEY, &raw) {
            log::warn!("session store: write failed: {err}");
        }
    }

    /// Remove the session record and every legacy session key.
    pub fn clear(&self) {
        for key in std::iter::once(SESSION_KEY).chain(LEGACY_KEYS) {
            if let Err(err) = self.storage.remove(key) {
                log::warn!("session store: remove {key} failed: {err}");
                return;
            }
        }
    }

    fn migrate_legacy(&self) -> Option<Session> {
        let read = |key: &str| self.storage.read(key).ok().flatten().filter(|v| !v.trim().is_empty());
        let access_token = read(LEGACY_ACCESS_TOKEN_KEY);
        let user = read(LEGACY_USER_KEY);
        let refresh_token = read(LEGACY_REFRESH_TOKEN_KEY);
        let oauth_token = read(LEGACY_TOKEN_KEY);

        if access_token.is_none() && user.is_none() && refresh_token.is_none() && oauth_token.is_none() {
            return None;
        }

        // Password sign-in stored `accessToken` + `user`; OAuth2 stored
        // `token` + `refreshToken` with no profile.
        let migrated = match (access_token, user) {
            (Some(access_token), Some(raw_user)) => serde_json::from_str::<User>(&raw_user)
                .ok()
                .map(|user| Session { access_token, refresh_token, user }),
            (None, None) => oauth_token.zip(refresh_token).map(|(access_token, refresh_token)| Session {
                user: user_from_token(&access_token),
                access_token,
                refresh_token: Some(refresh_token),
            }),
            _ => None,
        };

        self.clear();
        match migrated {
            Some(session) => {
                log::info!("session store: migrated legacy session keys");
                self.save(&session);
                Some(session)
            }
            None => {
                log::warn!("session store: discarded incomplete legacy session keys");
                None
            }
        }
    }
}

fn parse_record(raw: &str) -> Result<Session, StorageError> {
    let session: Session = serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;
    if session.access_token.trim().is_empty() {
        return Err(StorageError::Corrupt("empty access token".to_owned()));
    }
    Ok(session)
}
