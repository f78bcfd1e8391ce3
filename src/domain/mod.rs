//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Documents and document types
//! - [`identity`] - Tag and full title derivation
//! - [`search`] - Listing queries and pagination
//! - [`validation`] - Typed field-level validation results
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod identity;
pub mod repositories;
pub mod search;
pub mod validation;
