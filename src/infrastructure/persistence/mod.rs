//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgDocumentRepository`] - Document storage and full-text search in PostgreSQL
//! - [`PgDocumentTypeRepository`] - Document type registry in PostgreSQL
//! - [`MemoryStore`] - In-process store implementing both repository traits

pub mod memory_store;
pub mod pg_document_repository;
pub mod pg_document_type_repository;

pub use memory_store::MemoryStore;
pub use pg_document_repository::PgDocumentRepository;
pub use pg_document_type_repository::PgDocumentTypeRepository;
