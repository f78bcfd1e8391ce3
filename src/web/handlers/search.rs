//! Search page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use url::form_urlencoded;

use crate::api::dto::pagination::SearchParams;
use crate::domain::entities::Document;
use crate::domain::search::Page;
use crate::state::AppState;
use crate::web::error::WebError;

/// Template for the search results page.
#[derive(Template, WebTemplate)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    /// The query as typed, echoed into the search box.
    pub query: String,
    pub page: Page<Document>,
    pub total_pages: u32,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

/// Lists or searches documents, 25 per page.
///
/// # Endpoint
///
/// `GET /search?q=<text>&page=<n>`
///
/// Without `q` every document is listed by id. With `q` only matching
/// documents are shown, best match first. An empty page renders
/// "No documents found".
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<SearchTemplate, WebError> {
    let page_request = params.page_request()?;
    let query = params.query();

    let page = state
        .document_service
        .search(&query, page_request)
        .await?;

    let raw_query = params.q.clone().unwrap_or_default();
    let previous_url = page
        .has_previous()
        .then(|| page_url(&raw_query, page.page - 1));
    let next_url = page.has_next().then(|| page_url(&raw_query, page.page + 1));

    Ok(SearchTemplate {
        query: raw_query,
        total_pages: page.total_pages(),
        page,
        previous_url,
        next_url,
    })
}

fn page_url(query: &str, page: u32) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !query.trim().is_empty() {
        serializer.append_pair("q", query);
    }
    serializer.append_pair("page", &page.to_string());
    format!("/search?{}", serializer.finish())
}
