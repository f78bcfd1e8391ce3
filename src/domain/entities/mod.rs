//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`DocumentType`] - A classification with a unique short code
//! - [`Document`] - A registered external document
//!
//! # Design Pattern
//!
//! Entities are paired with separate structs for creation (`NewDocument`,
//! `NewDocumentType`). `NewDocument` doubles as the full replacement used by
//! edits, since every editable field is replaced at once.

pub mod document;
pub mod document_type;

pub use document::{Document, NewDocument};
pub use document_type::{DocumentType, NewDocumentType};
