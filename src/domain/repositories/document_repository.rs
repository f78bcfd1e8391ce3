//! Repository trait for document data access.

use crate::domain::entities::{Document, NewDocument};
use crate::domain::search::DocumentQuery;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for registered documents.
///
/// Every returned [`Document`] carries its resolved document type.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDocumentRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Inserts a document. The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `document_type_id` does not exist.
    /// Returns [`AppError::StoreUnavailable`] or [`AppError::Internal`] on storage errors.
    async fn create(&self, new_document: NewDocument) -> Result<Document, AppError>;

    /// Finds a document by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, AppError>;

    /// Replaces every editable field of a document.
    ///
    /// Returns `Ok(None)` if no document has this id.
    async fn update(&self, id: i64, changes: NewDocument) -> Result<Option<Document>, AppError>;

    /// Returns one page of documents for `query`.
    ///
    /// - [`DocumentQuery::FullListing`] - all documents ordered by id ascending
    /// - [`DocumentQuery::RankedSearch`] - matching documents ordered by
    ///   relevance descending, then id ascending
    ///
    /// An offset past the last match yields an empty vector.
    async fn search(
        &self,
        query: &DocumentQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Document>, AppError>;

    /// Counts the documents `query` would return across all pages.
    async fn count(&self, query: &DocumentQuery) -> Result<i64, AppError>;
}
