//! Authentication context: the derived view over the session store.
//!
//! DESIGN
//! ======
//! Authorization decisions fail closed. [`AuthView`] is a sum type rather
//! than a loosely shaped user object: `Anonymous` holds nothing, and an
//! `Authenticated` session without a profile (token present, profile
//! missing or corrupt) denies every role check while still counting as
//! logged in. Every read recomputes from the store, so a logout anywhere
//! is visible on the next check with no cache to invalidate.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, UserProfile};
use crate::state::session::{Session, SessionStore};

/// What the current session amounts to, authorization-wise.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthView {
    Anonymous,
    Authenticated { user: Option<UserProfile> },
}

impl AuthView {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Role membership. Absent user means `false` for every role.
    pub fn has_role(&self, role: &Role) -> bool {
        match self {
            Self::Authenticated { user: Some(user) } => user.roles.contains(role),
            Self::Authenticated { user: None } | Self::Anonymous => false,
        }
    }
}

impl From<Session> for AuthView {
    fn from(session: Session) -> Self {
        match session.token {
            Some(_) => Self::Authenticated { user: session.user },
            None => Self::Anonymous,
        }
    }
}

/// Injectable auth handle provided once from `App` via context.
///
/// Pure delegation over [`SessionStore`]: login writes, logout clears,
/// queries re-read. No validation of the payload beyond presence.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthContext {
    store: SessionStore,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            store: SessionStore::new(),
        }
    }

    /// Current state, recomputed from the store on every call.
    pub fn snapshot(&self) -> AuthView {
        self.store.read().into()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.snapshot().has_role(role)
    }

    /// The stored profile, if the session has one.
    pub fn user(&self) -> Option<UserProfile> {
        self.store.read().user
    }

    /// Persist a fresh login.
    pub fn login(&self, user: &UserProfile, token: &str) {
        self.store.write(user, token);
    }

    /// Drop the session. The next guarded render sees `Anonymous`.
    pub fn logout(&self) {
        self.store.clear();
    }
}
