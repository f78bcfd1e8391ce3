//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod document;
pub mod document_type;
pub mod health;
pub mod pagination;
pub mod search;
