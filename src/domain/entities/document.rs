//! Document entity representing a registered external document.

use chrono::{DateTime, Utc};

use super::DocumentType;
use crate::domain::identity;

/// Maximum length of [`Document::title`].
pub const TITLE_MAX_LEN: usize = 256;
/// Maximum length of [`Document::author_name`].
pub const AUTHOR_NAME_MAX_LEN: usize = 100;

/// Metadata about an external document.
///
/// `document_type` is always resolved when a document is loaded from a
/// repository, so [`Document::tag`] and [`Document::full_title`] cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub document_type: DocumentType,
    pub title: String,
    pub description: String,
    pub link: String,
    pub author_name: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Short identifier such as `TST00001`.
    ///
    /// Stable for the lifetime of the record: ids are never reassigned and
    /// updates never change them.
    pub fn tag(&self) -> String {
        // Ids are assigned by the store from 1 upward.
        let id = u64::try_from(self.id).unwrap_or_default();
        identity::tag(&self.document_type.short_code, id)
    }

    /// Tag followed by the title, e.g. `TST00001 test`.
    pub fn full_title(&self) -> String {
        identity::full_title(&self.tag(), &self.title)
    }
}

/// A validated bundle of document fields.
///
/// Used both to register a document and to replace every editable field of
/// an existing one. `id` and `created_at` are owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub document_type_id: i64,
    pub title: String,
    pub description: String,
    pub link: String,
    pub author_name: String,
    pub author_email: String,
}
