//! Utility functions used across the application.
//!
//! - [`link_validator`] - Scheme and host checks for document links
//! - [`text_rank`] - Tokenization and relevance scoring for the in-process store

pub mod link_validator;
pub mod text_rank;
