mod common;

use async_trait::async_trait;
use axum::http::StatusCode;
use document_register::domain::entities::{DocumentType, NewDocumentType};
use document_register::domain::repositories::DocumentTypeRepository;
use document_register::error::AppError;
use document_register::infrastructure::persistence::MemoryStore;
use document_register::state::AppState;
use std::sync::Arc;

/// Document type store whose backend is always down.
struct UnreachableStore;

#[async_trait]
impl DocumentTypeRepository for UnreachableStore {
    async fn create(&self, _: NewDocumentType) -> Result<DocumentType, AppError> {
        Err(unreachable_error())
    }
    async fn find_by_id(&self, _: i64) -> Result<Option<DocumentType>, AppError> {
        Err(unreachable_error())
    }
    async fn find_by_short_code(&self, _: &str) -> Result<Option<DocumentType>, AppError> {
        Err(unreachable_error())
    }
    async fn list(&self) -> Result<Vec<DocumentType>, AppError> {
        Err(unreachable_error())
    }
    async fn ping(&self) -> Result<(), AppError> {
        Err(unreachable_error())
    }
}

fn unreachable_error() -> AppError {
    AppError::store_unavailable("Database unavailable", serde_json::Value::Null)
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state();
    common::create_test_document_type(&state, "TST", "Test Document").await;
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["document_types"], 1);
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = common::make_server(common::create_test_state());

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("store").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let state = AppState::new(Arc::new(MemoryStore::new()), Arc::new(UnreachableStore));
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
    assert!(json["checks"]["store"].get("document_types").is_none());
}

#[tokio::test]
async fn test_store_down_is_503_for_api_and_pages() {
    let state = AppState::new(Arc::new(MemoryStore::new()), Arc::new(UnreachableStore));
    let server = common::make_server(state);

    let response = server.get("/api/document-types").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "store_unavailable"
    );

    let response = server.get("/").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.text().contains("503"));
}
