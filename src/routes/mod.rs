//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is a plain HTML response rendered by `views`. Two routes are
//! deliberately unsafe: `/note/{userid}` skips authorization and `/search`
//! skips output encoding. The rest is an ordinary cookie-session login flow.

pub mod auth;
pub mod home;
pub mod notes;
pub mod search;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/note/{userid}", get(notes::note))
        .route("/search", get(search::search))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
