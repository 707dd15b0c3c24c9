//! Key-value persistence with a localStorage → cookie fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only long-lived client state is the remembered username (and the
//! theme preference). Private browsing modes and strict cookie settings can
//! make either backend throw, so [`UserStorage`] tries the primary store,
//! falls back to the secondary, and reduces every failure to "absent".
//!
//! ERROR HANDLING
//! ==============
//! Backends report [`StoreError`]; `UserStorage` logs and swallows it. Callers
//! only ever observe `Option<String>`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::COOKIE_RETENTION_DAYS;
use crate::util::encode::{decode_component, encode_component};

const LOCAL_STORAGE: &str = "localStorage";
const COOKIES: &str = "cookies";
const COOKIE_ATTRIBUTES: &str = "path=/;SameSite=Lax";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0} is unavailable")]
    Unavailable(&'static str),
    #[error("{backend} rejected the operation: {detail}")]
    Rejected { backend: &'static str, detail: String },
}

/// A string key-value backend.
pub trait KeyValueStore {
    /// Backend label used in log lines.
    fn name(&self) -> &'static str;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// FALLBACK STORE
// =============================================================================

/// Primary store with silent fallback to a secondary store.
#[derive(Clone, Debug, Default)]
pub struct UserStorage<P, S> {
    primary: P,
    secondary: S,
}

impl<P: KeyValueStore, S: KeyValueStore> UserStorage<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    /// Write to the primary store, or to the secondary one if that fails.
    pub fn set(&self, key: &str, value: &str) {
        match self.primary.set(key, value) {
            Ok(()) => return,
            Err(e) => log::warn!("{e}; saving {key} to {}", self.secondary.name()),
        }
        if let Err(e) = self.secondary.set(key, value) {
            log::error!("Failed to save user data: {e}");
        }
    }

    /// Read from the primary store, then from the secondary one.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.primary.get(key) {
            Ok(Some(value)) => return Some(value),
            Ok(None) => {}
            Err(e) => log::warn!("{e}; reading {key} from {}", self.secondary.name()),
        }
        match self.secondary.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to retrieve user data: {e}");
                None
            }
        }
    }

    /// Remove from both stores; one failing does not skip the other.
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.primary.remove(key) {
            log::warn!("{e}; still clearing {key} from {}", self.secondary.name());
        }
        if let Err(e) = self.secondary.remove(key) {
            log::error!("Failed to remove user data: {e}");
        }
    }
}

/// Fallback store over the real browser backends.
pub type BrowserUserStorage = UserStorage<LocalStorage, CookieStore>;

pub fn browser_user_storage() -> BrowserUserStorage {
    UserStorage::new(LocalStorage, CookieStore)
}

// =============================================================================
// COOKIE FORMAT
// =============================================================================

/// `document.cookie` assignment that persists `value` until `expires`.
pub fn cookie_assignment(name: &str, value: &str, expires: DateTime<Utc>) -> String {
    format!(
        "{name}={};expires={};{COOKIE_ATTRIBUTES}",
        encode_component(value),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

/// `document.cookie` assignment that deletes `name`.
pub fn cookie_removal(name: &str) -> String {
    format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;{COOKIE_ATTRIBUTES}")
}

/// Expiry for a cookie written at `now`.
pub fn cookie_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + TimeDelta::days(COOKIE_RETENTION_DAYS)
}

/// Look up `name` in a `document.cookie` string (`a=1; b=2`).
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(decode_component)
}

// =============================================================================
// BROWSER BACKENDS
// =============================================================================

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

/// `document.cookie` with a fixed retention period.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(feature = "csr")]
fn rejected(backend: &'static str, err: &wasm_bindgen::JsValue) -> StoreError {
    StoreError::Rejected { backend, detail: format!("{err:?}") }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable(LOCAL_STORAGE))?;
    window
        .local_storage()
        .map_err(|e| rejected(LOCAL_STORAGE, &e))?
        .ok_or(StoreError::Unavailable(LOCAL_STORAGE))
}

#[cfg(feature = "csr")]
fn html_document() -> Result<web_sys::HtmlDocument, StoreError> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(StoreError::Unavailable(COOKIES))
}

impl KeyValueStore for LocalStorage {
    fn name(&self) -> &'static str {
        LOCAL_STORAGE
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| rejected(LOCAL_STORAGE, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable(LOCAL_STORAGE))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| rejected(LOCAL_STORAGE, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable(LOCAL_STORAGE))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| rejected(LOCAL_STORAGE, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable(LOCAL_STORAGE))
        }
    }
}

impl KeyValueStore for CookieStore {
    fn name(&self) -> &'static str {
        COOKIES
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document()?.cookie().map_err(|e| rejected(COOKIES, &e))?;
            Ok(find_cookie(&cookies, key))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable(COOKIES))
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let assignment = cookie_assignment(key, value, cookie_expiry(Utc::now()));
            html_document()?.set_cookie(&assignment).map_err(|e| rejected(COOKIES, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable(COOKIES))
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            html_document()?.set_cookie(&cookie_removal(key)).map_err(|e| rejected(COOKIES, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable(COOKIES))
        }
    }
}
