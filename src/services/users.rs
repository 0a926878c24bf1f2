//! Seeded, read-only user table.
//!
//! DESIGN
//! ======
//! Users are fixed at startup and never mutated, so the store is shared as a
//! plain `Arc<UserStore>` with no locking. Passwords are stored and compared
//! in plaintext; this server exists to demonstrate broken access control.

use std::collections::BTreeMap;

/// A seeded account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub secret_note: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(String),
    #[error("invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Default)]
pub struct UserStore {
    by_id: BTreeMap<i64, User>,
}

impl UserStore {
    /// Build a store from an explicit user list. Later duplicates of an id
    /// replace earlier ones.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self { by_id: users.into_iter().map(|u| (u.id, u)).collect() }
    }

    /// The demo accounts: alice (id 1) and bob (id 2).
    #[must_use]
    pub fn seeded() -> Self {
        Self::new([
            User {
                id: 1,
                username: "alice".into(),
                password: "password123".into(),
                secret_note: "Alice ka secret".into(),
            },
            User {
                id: 2,
                username: "bob".into(),
                password: "qwerty".into(),
                secret_note: "Bob ka secret".into(),
            },
        ])
    }

    pub fn find_by_id(&self, id: i64) -> Result<&User, UserError> {
        self.by_id.get(&id).ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Look up a user by an id taken verbatim from a URL segment. Text that
    /// is not an integral number, or is out of `i64` range, is simply an id
    /// no user has.
    pub fn find_by_raw_id(&self, raw: &str) -> Result<&User, UserError> {
        let id = parse_user_id(raw).ok_or_else(|| UserError::NotFound(raw.to_owned()))?;
        self.find_by_id(id)
    }

    /// Exact, case-sensitive match on both username and password.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&User, UserError> {
        self.by_id
            .values()
            .find(|u| u.username == username && u.password == password)
            .ok_or(UserError::InvalidCredentials)
    }

    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}

/// Numeric reading of a path segment: `"2"`, `" 2 "`, `"2.0"` and `"2e0"`
/// all name user 2. Fractions, non-finite values and anything outside the
/// `i64` range yield `None`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn parse_user_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite() && v.fract() == 0.0)?;
    // 2^63 is exactly representable; anything at or above it overflows i64.
    (value >= i64::MIN as f64 && value < i64::MAX as f64).then_some(value as i64)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
