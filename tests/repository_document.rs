//! PostgreSQL repository tests against the database at `DATABASE_URL`.

use document_register::domain::entities::{NewDocument, NewDocumentType};
use document_register::domain::repositories::{DocumentRepository, DocumentTypeRepository};
use document_register::domain::search::DocumentQuery;
use document_register::error::AppError;
use document_register::infrastructure::persistence::{
    PgDocumentRepository, PgDocumentTypeRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

fn repositories(pool: PgPool) -> (PgDocumentRepository, PgDocumentTypeRepository) {
    let pool = Arc::new(pool);
    (
        PgDocumentRepository::new(pool.clone(), "english"),
        PgDocumentTypeRepository::new(pool),
    )
}

fn new_type(short_code: &str) -> NewDocumentType {
    NewDocumentType {
        short_code: short_code.to_string(),
        long_name: "Test Document".to_string(),
        description: "test".to_string(),
    }
}

fn new_document(document_type_id: i64, title: &str, description: &str) -> NewDocument {
    NewDocument {
        document_type_id,
        title: title.to_string(),
        description: description.to_string(),
        link: "https://www.example.com".to_string(),
        author_name: "Mr QA".to_string(),
        author_email: "qa@example.com".to_string(),
    }
}

// ─── DOCUMENT TYPES ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_document_type_create_and_find(pool: PgPool) {
    let (_, types) = repositories(pool);

    let created = types.create(new_type("TST")).await.unwrap();
    assert_eq!(created.short_code, "TST");

    let by_id = types.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id, created);

    let by_code = types.find_by_short_code("TST").await.unwrap().unwrap();
    assert_eq!(by_code.id, created.id);

    assert!(types.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_document_type_duplicate_short_code(pool: PgPool) {
    let (_, types) = repositories(pool);

    types.create(new_type("TST")).await.unwrap();
    let result = types.create(new_type("TST")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_document_type_list_sorted(pool: PgPool) {
    let (_, types) = repositories(pool);

    types.create(new_type("TST")).await.unwrap();
    types.create(new_type("SPEC")).await.unwrap();

    let codes: Vec<String> = types
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.short_code)
        .collect();
    assert_eq!(codes, vec!["SPEC", "TST"]);

    types.ping().await.unwrap();
}

// ─── DOCUMENTS ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_document_create_and_find(pool: PgPool) {
    let (documents, types) = repositories(pool);
    let doc_type = types.create(new_type("TST")).await.unwrap();

    let created = documents
        .create(new_document(doc_type.id, "test", "test"))
        .await
        .unwrap();

    assert_eq!(created.document_type, doc_type);
    assert_eq!(created.tag(), format!("TST{:05}", created.id));

    let found = documents.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);

    assert!(documents.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_document_create_unknown_type(pool: PgPool) {
    let (documents, _) = repositories(pool);

    let result = documents.create(new_document(999_999, "test", "test")).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_document_update(pool: PgPool) {
    let (documents, types) = repositories(pool);
    let doc_type = types.create(new_type("TST")).await.unwrap();
    let created = documents
        .create(new_document(doc_type.id, "test", "test"))
        .await
        .unwrap();

    let updated = documents
        .update(created.id, new_document(doc_type.id, "New Title", "test"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.tag(), created.tag());
    assert_eq!(updated.created_at, created.created_at);

    let missing = documents
        .update(999_999, new_document(doc_type.id, "x", "x"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_document_full_listing_ordered_by_id(pool: PgPool) {
    let (documents, types) = repositories(pool);
    let doc_type = types.create(new_type("TST")).await.unwrap();
    for title in ["first", "second", "third"] {
        documents
            .create(new_document(doc_type.id, title, "test"))
            .await
            .unwrap();
    }

    let query = DocumentQuery::FullListing;
    let page = documents.search(&query, 0, 25).await.unwrap();
    let titles: Vec<&str> = page.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert_eq!(documents.count(&query).await.unwrap(), 3);

    let tail = documents.search(&query, 2, 25).await.unwrap();
    assert_eq!(tail.len(), 1);
}

#[sqlx::test]
async fn test_document_ranked_search(pool: PgPool) {
    let (documents, types) = repositories(pool);
    let doc_type = types.create(new_type("TST")).await.unwrap();
    documents
        .create(new_document(doc_type.id, "Test", "test"))
        .await
        .unwrap();
    documents
        .create(new_document(doc_type.id, "Other", "unrelated"))
        .await
        .unwrap();

    let hit = DocumentQuery::RankedSearch("Test".to_string());
    let results = documents.search(&hit, 0, 25).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Test");
    assert_eq!(documents.count(&hit).await.unwrap(), 1);

    let miss = DocumentQuery::RankedSearch("Test1".to_string());
    assert!(documents.search(&miss, 0, 25).await.unwrap().is_empty());
    assert_eq!(documents.count(&miss).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_ranked_search_uses_search_index(pool: PgPool) {
    let (documents, types) = repositories(pool.clone());
    let doc_type = types.create(new_type("TST")).await.unwrap();
    documents
        .create(new_document(doc_type.id, "Rust", "rust notes"))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    sqlx::query("SET enable_seqscan = off")
        .execute(&mut *conn)
        .await
        .unwrap();

    let sql = format!(
        "EXPLAIN SELECT d.id FROM documents d WHERE {} @@ plainto_tsquery('english', 'rust')",
        documents.search_vector()
    );
    let plan: Vec<String> = sqlx::query_scalar(&sql)
        .fetch_all(&mut *conn)
        .await
        .unwrap();

    assert!(plan.iter().any(|line| line.contains("documents_search_idx")));

    let found = documents
        .search(&DocumentQuery::RankedSearch("rust".to_string()), 0, 25)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
}
