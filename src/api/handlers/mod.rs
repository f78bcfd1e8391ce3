//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod document_types;
pub mod documents;
pub mod health;

pub use document_types::{
    create_document_type_handler, document_type_list_handler, get_document_type_handler,
};
pub use documents::{
    create_document_handler, get_document_handler, list_documents_handler,
    update_document_handler,
};
pub use health::health_handler;
