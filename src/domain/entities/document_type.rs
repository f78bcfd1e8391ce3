//! DocumentType entity: the classification a document is registered under.

use std::fmt;

/// Maximum length of [`DocumentType::short_code`].
pub const SHORT_CODE_MAX_LEN: usize = 5;
/// Maximum length of [`DocumentType::long_name`].
pub const LONG_NAME_MAX_LEN: usize = 50;

/// A document classification with a unique short code (e.g. `SPEC`) and a
/// display name (e.g. `Specification`).
///
/// Referenced by documents, never owned by them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    pub id: i64,
    pub short_code: String,
    pub long_name: String,
    pub description: String,
}

impl DocumentType {
    /// Creates a new DocumentType instance.
    pub fn new(id: i64, short_code: String, long_name: String, description: String) -> Self {
        Self {
            id,
            short_code,
            long_name,
            description,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.short_code, self.long_name)
    }
}

/// Input data for registering a new document type.
#[derive(Debug, Clone)]
pub struct NewDocumentType {
    pub short_code: String,
    pub long_name: String,
    pub description: String,
}
