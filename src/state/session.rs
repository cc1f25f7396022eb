//! Persisted session: the authenticated identity plus bearer token.
//!
//! DESIGN
//! ======
//! The session lives in two fixed browser `localStorage` keys (serialized
//! profile JSON and the raw token) so it survives reloads and is cleared
//! only by an explicit logout. All access goes through [`SessionStore`]
//! rather than ad-hoc storage reads, so there is exactly one place that
//! knows the keys and the decoding rules.
//!
//! Reads never fail: malformed stored profile data decodes to "no profile"
//! (role checks then fail closed) instead of surfacing a parse error.
//!
//! Native builds (tests, tooling) back the store with a thread-local
//! in-memory pair with identical read/write/clear semantics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

const USER_KEY: &str = "vendor_compliance_user";
const TOKEN_KEY: &str = "vendor_compliance_token";

/// Snapshot of the persisted session.
///
/// Token presence alone decides "authenticated"; a token without a profile
/// is a valid but degraded state in which every role check fails.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
}

/// Accessor for the two persisted session entries.
///
/// Zero-sized handle; `App` owns the one instance that views receive via
/// context (through `AuthContext`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    /// Read the current session. Never fails; missing or malformed entries
    /// come back as absent fields.
    pub fn read(&self) -> Session {
        decode_session(raw_get(USER_KEY), raw_get(TOKEN_KEY))
    }

    /// Overwrite both entries with a fresh login. Idempotent.
    pub fn write(&self, user: &UserProfile, token: &str) {
        if let Ok(json) = serde_json::to_string(user) {
            raw_set(USER_KEY, &json);
        }
        raw_set(TOKEN_KEY, token);
    }

    /// Remove both entries. Idempotent; clearing an empty store is a no-op.
    pub fn clear(&self) {
        raw_remove(USER_KEY);
        raw_remove(TOKEN_KEY);
    }
}

/// Decode raw stored values into a [`Session`].
///
/// A profile that fails to parse is treated as absent, and an empty token
/// string counts as no token, so stale or corrupted storage always lands
/// on the unauthenticated side.
fn decode_session(raw_user: Option<String>, raw_token: Option<String>) -> Session {
    Session {
        user: raw_user.as_deref().and_then(|json| serde_json::from_str(json).ok()),
        token: raw_token.filter(|t| !t.is_empty()),
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn raw_get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(feature = "csr")]
fn raw_set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(feature = "csr")]
fn raw_remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(feature = "csr"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static ENTRIES: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        ENTRIES.with(|e| e.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) {
        ENTRIES.with(|e| {
            e.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        ENTRIES.with(|e| {
            e.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(feature = "csr"))]
fn raw_get(key: &str) -> Option<String> {
    memory::get(key)
}

#[cfg(not(feature = "csr"))]
fn raw_set(key: &str, value: &str) {
    memory::set(key, value);
}

#[cfg(not(feature = "csr"))]
fn raw_remove(key: &str) {
    memory::remove(key);
}

/// Seed the raw user entry directly. Test hook for exercising the
/// malformed-profile path without going through `write`.
#[cfg(test)]
fn raw_set_user(value: &str) {
    raw_set(USER_KEY, value);
}

/// Seed the raw token entry directly.
#[cfg(test)]
fn raw_set_token(value: &str) {
    raw_set(TOKEN_KEY, value);
}
