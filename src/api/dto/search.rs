//! DTOs for document listing and search.

use serde::Serialize;

use super::document::DocumentResponse;
use super::pagination::PaginationMeta;

/// One page of documents.
///
/// `items` is empty when nothing matched; errors are reported with an error
/// status instead.
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub query: Option<String>,
    pub pagination: PaginationMeta,
    pub items: Vec<DocumentResponse>,
}
