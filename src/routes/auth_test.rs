use super::*;

// =============================================================================
// cookies
// =============================================================================

#[test]
fn session_cookie_attributes() {
    let cookie = session_cookie("abc".into(), false, std::time::Duration::from_secs(3600));
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "abc");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    assert_ne!(cookie.secure(), Some(true));
}

#[test]
fn session_cookie_secure_flag() {
    let cookie = session_cookie("abc".into(), true, std::time::Duration::from_secs(1));
    assert_eq!(cookie.secure(), Some(true));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.name(), COOKIE_NAME);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert_eq!(cookie.path(), Some("/"));
}

// =============================================================================
// LoginForm
// =============================================================================

#[test]
fn login_form_missing_fields_default_to_empty() {
    let form: LoginForm = serde_json::from_str("{}").unwrap();
    assert_eq!(form.username, "");
    assert_eq!(form.password, "");
}

// =============================================================================
// MaybeUser
// =============================================================================

async fn extract(state: &AppState, cookie: Option<&str>) -> Option<SessionUser> {
    use axum::extract::FromRequestParts;

    let mut builder = axum::http::Request::builder().uri("/");
    if let Some(cookie) = cookie {
        builder = builder.header(axum::http::header::COOKIE, cookie);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    let Ok(MaybeUser(user)) = MaybeUser::from_request_parts(&mut parts, state).await;
    user
}

#[tokio::test]
async fn maybe_user_without_cookie_is_none() {
    let state = crate::state::test_helpers::test_app_state();
    assert!(extract(&state, None).await.is_none());
}

#[tokio::test]
async fn maybe_user_unknown_token_is_none() {
    let state = crate::state::test_helpers::test_app_state();
    assert!(extract(&state, Some("session_id=deadbeef")).await.is_none());
}

#[tokio::test]
async fn maybe_user_live_token_resolves() {
    let state = crate::state::test_helpers::test_app_state();
    let token = state.sessions.create(SessionUser { user_id: 1, username: "alice".into() }).await;
    let user = extract(&state, Some(&format!("session_id={token}"))).await;
    assert_eq!(user.map(|u| u.user_id), Some(1));
}
