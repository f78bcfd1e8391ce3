//! Business logic services for the application layer.

pub mod document_service;
pub mod document_type_service;

pub use document_service::DocumentService;
pub use document_type_service::DocumentTypeService;
