//! Search page. Echoes the query back without encoding it.

use axum::extract::Query;
use axum::response::Html;
use serde::Deserialize;

use crate::views;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /search?q=...`
pub async fn search(Query(params): Query<SearchQuery>) -> Html<String> {
    tracing::debug!(q = %params.q, "search");
    Html(views::search(&params.q))
}
