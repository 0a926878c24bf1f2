//! Auth routes — login form, credential check, logout, session extractor.

use std::convert::Infallible;

use axum::extract::{Form, FromRef, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::services::session::SessionUser;
use crate::state::AppState;
use crate::views;

pub(crate) const COOKIE_NAME: &str = "session_id";
pub(crate) const LOGIN_ERROR: &str = "Invalid username or password";

fn session_cookie(token: String, secure: bool, ttl: std::time::Duration) -> Cookie<'static> {
    let max_age = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age))
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// SESSION EXTRACTOR
// =============================================================================

/// The session user, if the request carries a live session cookie.
/// Never rejects: missing, unknown and expired tokens all read as `None`.
pub struct MaybeUser(pub Option<SessionUser>);

impl<S> axum::extract::FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Ok(Self(None));
        }

        let app_state = AppState::from_ref(state);
        Ok(Self(app_state.sessions.get(token).await))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// `GET /login` — render the login form.
pub async fn login_form() -> Html<String> {
    Html(views::login_form(None))
}

/// `POST /login` — check credentials, start a session, redirect to `/`.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Response {
    let user = match state.users.authenticate(&form.username, &form.password) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(username = %form.username, error = %e, "login failed");
            return Html(views::login_form(Some(LOGIN_ERROR))).into_response();
        }
    };

    // A new login never reuses the token the browser arrived with.
    if let Some(previous) = jar.get(COOKIE_NAME) {
        state.sessions.destroy(previous.value()).await;
    }

    let session_user = SessionUser { user_id: user.id, username: user.username.clone() };
    let token = state.sessions.create(session_user).await;
    tracing::info!(user_id = user.id, username = %user.username, "login succeeded");

    let cookie = session_cookie(token, state.config.cookie_secure, state.sessions.ttl());
    (jar.add(cookie), Redirect::to("/")).into_response()
}

/// `GET /logout` — delete the session if any, clear the cookie, redirect to `/`.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        if state.sessions.destroy(cookie.value()).await {
            tracing::info!("logout");
        }
    }

    (jar.add(cleared_cookie(state.config.cookie_secure)), Redirect::to("/"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
