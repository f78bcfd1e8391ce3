//! DTOs for document registration, editing and display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::{Document, DocumentType, NewDocument};
use crate::domain::validation::{FieldErrors, Violation};
use crate::utils::link_validator::validate_link;

/// Registration and edit form, shared by the HTML pages and the JSON API.
///
/// Every field is optional at the deserialization level so that missing
/// input surfaces as a `required` violation on that field rather than a
/// rejected request. Blank strings count as missing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct DocumentForm {
    #[validate(required, length(max = 256))]
    pub title: Option<String>,

    /// Id of the document type, as text (HTML forms) or a number (JSON).
    #[validate(required)]
    #[serde(deserialize_with = "id_or_text")]
    pub document_type: Option<String>,

    #[validate(required)]
    pub description: Option<String>,

    #[validate(required, length(max = 100))]
    pub author_name: Option<String>,

    #[validate(required, email)]
    pub author_email: Option<String>,

    #[validate(required, url)]
    pub link: Option<String>,
}

impl DocumentForm {
    /// Pre-fills the form from an existing document.
    pub fn from_document(document: &Document) -> Self {
        Self {
            title: Some(document.title.clone()),
            document_type: Some(document.document_type.id.to_string()),
            description: Some(document.description.clone()),
            author_name: Some(document.author_name.clone()),
            author_email: Some(document.author_email.clone()),
            link: Some(document.link.clone()),
        }
    }

    /// Trims every field and drops the ones left blank.
    fn normalized(&self) -> Self {
        fn clean(value: &Option<String>) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        }

        Self {
            title: clean(&self.title),
            document_type: clean(&self.document_type),
            description: clean(&self.description),
            author_name: clean(&self.author_name),
            author_email: clean(&self.author_email),
            link: clean(&self.link),
        }
    }

    /// Validates every field at once.
    ///
    /// `document_types` is the set of valid choices for `document_type`.
    /// Returns the complete set of violations; on failure nothing should be
    /// persisted.
    pub fn into_input(&self, document_types: &[DocumentType]) -> Result<NewDocument, FieldErrors> {
        let form = self.normalized();

        let mut errors = form.validate().err().map(FieldErrors::from).unwrap_or_default();

        if let Some(link) = &form.link
            && !errors.contains("link")
            && validate_link(link).is_err()
        {
            errors.add("link", Violation::InvalidUrl);
        }

        let document_type_id = form.document_type.as_deref().and_then(|raw| {
            raw.parse::<i64>()
                .ok()
                .filter(|id| document_types.iter().any(|t| t.id == *id))
        });
        if form.document_type.is_some() && document_type_id.is_none() {
            errors.add("document_type", Violation::InvalidChoice);
        }

        let (
            Some(document_type_id),
            Some(title),
            Some(description),
            Some(link),
            Some(author_name),
            Some(author_email),
        ) = (
            document_type_id,
            form.title,
            form.description,
            form.link,
            form.author_name,
            form.author_email,
        )
        else {
            return Err(errors);
        };

        errors.into_result()?;

        Ok(NewDocument {
            document_type_id,
            title,
            description,
            link,
            author_name,
            author_email,
        })
    }
}

/// Accepts a JSON number or a string for an id-valued form field.
fn id_or_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrText {
        Id(i64),
        Text(String),
    }

    Ok(
        Option::<IdOrText>::deserialize(deserializer)?.map(|value| match value {
            IdOrText::Id(id) => id.to_string(),
            IdOrText::Text(text) => text,
        }),
    )
}

/// Document type summary embedded in document responses.
#[derive(Debug, Serialize)]
pub struct DocumentTypeRef {
    pub id: i64,
    pub short_code: String,
    pub long_name: String,
}

/// JSON representation of a document.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub id: i64,
    pub tag: String,
    pub full_title: String,
    pub document_type: DocumentTypeRef,
    pub title: String,
    pub description: String,
    pub link: String,
    pub author_name: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(d: Document) -> Self {
        let tag = d.tag();
        let full_title = d.full_title();
        Self {
            id: d.id,
            tag,
            full_title,
            document_type: DocumentTypeRef {
                id: d.document_type.id,
                short_code: d.document_type.short_code,
                long_name: d.document_type.long_name,
            },
            title: d.title,
            description: d.description,
            link: d.link,
            author_name: d.author_name,
            author_email: d.author_email,
            created_at: d.created_at,
        }
    }
}
