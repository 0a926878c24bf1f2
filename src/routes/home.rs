//! Home page.

use axum::response::Html;

use super::auth::MaybeUser;
use crate::views;

/// `GET /` — greet the session user, or show the anonymous placeholder.
pub async fn home(MaybeUser(user): MaybeUser) -> Html<String> {
    Html(views::home(user.as_ref()))
}
