//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! owns the read-only user table, the session store handle and the runtime
//! config; nothing lives in process-wide statics.

use std::sync::Arc;

use crate::config::Config;
use crate::services::session::SessionStore;
use crate::services::users::UserStore;

/// Shared application state. Clone is required by Axum; every field is
/// either `Arc`-wrapped or cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub sessions: SessionStore,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(users: UserStore, config: Config) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { users: Arc::new(users), sessions, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with the seeded users and default config.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(UserStore::seeded(), Config::default())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
