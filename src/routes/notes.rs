//! Secret note lookup.
//!
//! The handler resolves a note from the path id alone. It does not consult
//! the session, so any caller can read any user's note by changing the id.
//! That missing ownership check is the point of this route.
//!
//! The segment is read as text so that anything which does not name a user
//! (`abc`, `1.5`, integers beyond `i64`) is a 404, never a 400.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::state::AppState;
use crate::views;

/// `GET /note/{userid}` — return that user's secret note.
pub async fn note(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    match state.users.find_by_raw_id(&raw_id) {
        Ok(user) => {
            tracing::debug!(user_id = user.id, "note served");
            Html(views::note(user)).into_response()
        }
        Err(e) => {
            tracing::debug!(raw_id = %raw_id, error = %e, "note lookup failed");
            (StatusCode::NOT_FOUND, "User not found").into_response()
        }
    }
}
