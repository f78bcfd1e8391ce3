#![allow(dead_code)]

use axum_test::TestServer;
use document_register::domain::entities::{Document, DocumentType, NewDocument, NewDocumentType};
use document_register::routes::router;
use document_register::state::AppState;
use serde_json::{Value, json};

/// State backed by a fresh in-memory store.
pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

/// Full application router (API, pages, health) over `state`.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_document_type(
    state: &AppState,
    short_code: &str,
    long_name: &str,
) -> DocumentType {
    state
        .document_type_service
        .create(NewDocumentType {
            short_code: short_code.to_string(),
            long_name: long_name.to_string(),
            description: "test".to_string(),
        })
        .await
        .unwrap()
}

pub fn new_document(document_type_id: i64, title: &str, description: &str) -> NewDocument {
    NewDocument {
        document_type_id,
        title: title.to_string(),
        description: description.to_string(),
        link: "https://www.example.com".to_string(),
        author_name: "Mr QA".to_string(),
        author_email: "qa@example.com".to_string(),
    }
}

pub async fn create_test_document(
    state: &AppState,
    document_type_id: i64,
    title: &str,
    description: &str,
) -> Document {
    state
        .document_service
        .register(new_document(document_type_id, title, description))
        .await
        .unwrap()
}

/// A valid JSON registration body.
pub fn document_json(document_type_id: i64, title: &str) -> Value {
    json!({
        "title": title,
        "document_type": document_type_id,
        "description": "test",
        "author_name": "Mr QA",
        "author_email": "qa@example.com",
        "link": "https://www.example.com"
    })
}

/// A valid HTML form submission, as `(field, value)` pairs.
pub fn document_form(document_type_id: i64, title: &str) -> Vec<(&'static str, String)> {
    vec![
        ("title", title.to_string()),
        ("document_type", document_type_id.to_string()),
        ("description", "test".to_string()),
        ("author_name", "Mr QA".to_string()),
        ("author_email", "qa@example.com".to_string()),
        ("link", "https://www.example.com".to_string()),
    ]
}

/// Replaces one field of a form submission.
pub fn with_field(
    mut form: Vec<(&'static str, String)>,
    field: &str,
    value: &str,
) -> Vec<(&'static str, String)> {
    for (name, v) in form.iter_mut() {
        if *name == field {
            *v = value.to_string();
        }
    }
    form
}
