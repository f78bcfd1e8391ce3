//! Document registration, retrieval, editing and search.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Document, NewDocument};
use crate::domain::repositories::{DocumentRepository, DocumentTypeRepository};
use crate::domain::search::{DocumentQuery, Page, PageRequest};
use crate::domain::validation::{FieldErrors, Violation};
use crate::error::AppError;

/// Service for the document lifecycle.
///
/// Inputs arrive already validated field-by-field (see
/// [`crate::api::dto::document::DocumentForm`]); this service only checks what
/// needs the store, namely that the referenced document type exists.
pub struct DocumentService {
    documents: Arc<dyn DocumentRepository>,
    document_types: Arc<dyn DocumentTypeRepository>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        document_types: Arc<dyn DocumentTypeRepository>,
    ) -> Self {
        Self {
            documents,
            document_types,
        }
    }

    /// Registers a new document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a `document_type` entry if the
    /// referenced type does not exist. Nothing is persisted in that case.
    pub async fn register(&self, input: NewDocument) -> Result<Document, AppError> {
        self.ensure_document_type(input.document_type_id).await?;

        let document = self.documents.create(input).await?;

        metrics::counter!("documents_created_total").increment(1);
        tracing::info!(id = document.id, tag = %document.tag(), "Document registered");

        Ok(document)
    }

    /// Retrieves a document by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no document has this id.
    pub async fn get(&self, id: i64) -> Result<Document, AppError> {
        self.documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found", json!({ "id": id })))
    }

    /// Replaces every editable field of a document. Its id and creation time
    /// are unchanged, so the tag only moves with the document type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the referenced type does not exist.
    /// Returns [`AppError::NotFound`] if no document has this id.
    pub async fn update(&self, id: i64, input: NewDocument) -> Result<Document, AppError> {
        self.ensure_document_type(input.document_type_id).await?;

        let document = self
            .documents
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found", json!({ "id": id })))?;

        metrics::counter!("documents_updated_total").increment(1);
        tracing::info!(id = document.id, tag = %document.tag(), "Document updated");

        Ok(document)
    }

    /// Returns one page of the listing described by `query`.
    ///
    /// A page past the end is empty, not an error.
    pub async fn search(
        &self,
        query: &DocumentQuery,
        page: PageRequest,
    ) -> Result<Page<Document>, AppError> {
        metrics::counter!("document_searches_total").increment(1);

        let (items, total_items) = tokio::try_join!(
            self.documents.search(query, page.offset(), page.limit()),
            self.documents.count(query)
        )?;

        tracing::debug!(
            query = query.text().unwrap_or(""),
            page = page.page,
            returned = items.len(),
            total_items,
            "Document search"
        );

        Ok(Page::new(items, page, total_items))
    }

    async fn ensure_document_type(&self, document_type_id: i64) -> Result<(), AppError> {
        if self
            .document_types
            .find_by_id(document_type_id)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let mut fields = FieldErrors::new();
        fields.add("document_type", Violation::InvalidChoice);
        Err(AppError::validation(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DocumentType;
    use crate::domain::repositories::{MockDocumentRepository, MockDocumentTypeRepository};
    use chrono::Utc;

    fn test_type() -> DocumentType {
        DocumentType::new(
            1,
            "TST".to_string(),
            "Test Document".to_string(),
            "test description".to_string(),
        )
    }

    fn test_input(title: &str) -> NewDocument {
        NewDocument {
            document_type_id: 1,
            title: title.to_string(),
            description: "test".to_string(),
            link: "https://www.example.com".to_string(),
            author_name: "Mr QA".to_string(),
            author_email: "qa@example.com".to_string(),
        }
    }

    fn test_document(id: i64, title: &str) -> Document {
        Document {
            id,
            document_type: test_type(),
            title: title.to_string(),
            description: "test".to_string(),
            link: "https://www.example.com".to_string(),
            author_name: "Mr QA".to_string(),
            author_email: "qa@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    fn types_with_tst() -> MockDocumentTypeRepository {
        let mut mock = MockDocumentTypeRepository::new();
        mock.expect_find_by_id()
            .returning(|id| Ok((id == 1).then(test_type)));
        mock
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut documents = MockDocumentRepository::new();
        let created = test_document(1, "test");
        documents
            .expect_create()
            .withf(|input| input.title == "test")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let document = service.register(test_input("test")).await.unwrap();

        assert_eq!(document.tag(), "TST00001");
        assert_eq!(document.full_title(), "TST00001 test");
    }

    #[tokio::test]
    async fn test_register_unknown_type_is_field_error() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_create().times(0);

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let mut input = test_input("test");
        input.document_type_id = 42;
        let err = service.register(input).await.unwrap_err();

        let fields = err.field_errors().expect("validation error");
        assert!(fields.contains("document_type"));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_by_id().returning(|_| Ok(None));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let result = service.get(7).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_keeps_tag() {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_update()
            .withf(|id, changes| *id == 1 && changes.title == "New Title")
            .times(1)
            .returning(|id, changes| Ok(Some(test_document(id, &changes.title))));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let document = service.update(1, test_input("New Title")).await.unwrap();

        assert_eq!(document.title, "New Title");
        assert_eq!(document.tag(), "TST00001");
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_update().returning(|_, _| Ok(None));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let result = service.update(99, test_input("x")).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_search_builds_page() {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_search()
            .withf(|query, offset, limit| {
                *query == DocumentQuery::RankedSearch("test".to_string())
                    && *offset == 25
                    && *limit == 25
            })
            .returning(|_, _, _| Ok(vec![test_document(26, "test")]));
        documents.expect_count().returning(|_| Ok(26));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let page = service
            .search(
                &DocumentQuery::RankedSearch("test".to_string()),
                PageRequest::new(2).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_items, 26);
        assert_eq!(page.total_pages(), 2);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_search_store_failure_is_not_empty_result() {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_search()
            .returning(|_, _, _| Err(AppError::store_unavailable("down", json!({}))));
        documents.expect_count().returning(|_| Ok(0));

        let service = DocumentService::new(Arc::new(documents), Arc::new(types_with_tst()));

        let result = service
            .search(&DocumentQuery::FullListing, PageRequest::first())
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable { .. })));
    }
}
