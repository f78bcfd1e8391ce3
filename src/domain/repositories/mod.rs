//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DocumentRepository`] - Document CRUD and ranked search
//! - [`DocumentTypeRepository`] - Document type registry
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod document_repository;
pub mod document_type_repository;

pub use document_repository::DocumentRepository;
pub use document_type_repository::DocumentTypeRepository;

#[cfg(test)]
pub use document_repository::MockDocumentRepository;
#[cfg(test)]
pub use document_type_repository::MockDocumentTypeRepository;
