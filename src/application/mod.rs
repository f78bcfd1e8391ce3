//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::document_service::DocumentService`] - Register, read, edit and search documents
//! - [`services::document_type_service::DocumentTypeService`] - Document type registry

pub mod services;
