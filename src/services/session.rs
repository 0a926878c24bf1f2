//! In-memory session store.
//!
//! ARCHITECTURE
//! ============
//! The browser holds an opaque 32-byte hex token in a cookie; the server maps
//! that token to the authenticated user. Nothing is persisted, so a restart
//! logs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired entries are not swept by a background task. Reads treat them as
//! absent and every insert purges whatever has expired, which keeps the map
//! bounded by the number of logins within one TTL window.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

use crate::config::MAX_SESSION_TTL_SECS;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Identity stored against a session token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
}

struct SessionEntry {
    user: SessionUser,
    expires_at: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    /// `ttl` is capped at [`MAX_SESSION_TTL_SECS`].
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        let ttl = ttl.min(Duration::from_secs(MAX_SESSION_TTL_SECS));
        Self { inner: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session for the given user, returning the token.
    pub async fn create(&self, user: SessionUser) -> String {
        self.create_at(user, Instant::now()).await
    }

    pub(crate) async fn create_at(&self, user: SessionUser, now: Instant) -> String {
        let token = generate_token();
        let mut sessions = self.inner.write().await;
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(token.clone(), SessionEntry { user, expires_at: now + self.ttl });
        token
    }

    /// Look up a live session. Unknown and expired tokens both yield `None`.
    pub async fn get(&self, token: &str) -> Option<SessionUser> {
        self.get_at(token, Instant::now()).await
    }

    pub(crate) async fn get_at(&self, token: &str, now: Instant) -> Option<SessionUser> {
        let sessions = self.inner.read().await;
        sessions
            .get(token)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.user.clone())
    }

    /// Delete a session by token. Returns whether one existed.
    pub async fn destroy(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }

    /// Number of stored entries, including any not yet purged after expiry.
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
