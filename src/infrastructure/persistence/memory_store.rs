//! In-process implementation of both repositories.
//!
//! Used when `STORE_BACKEND=memory` and by the HTTP test-suite. Ranked search
//! goes through [`crate::utils::text_rank`] instead of PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Document, DocumentType, NewDocument, NewDocumentType};
use crate::domain::repositories::{DocumentRepository, DocumentTypeRepository};
use crate::domain::search::DocumentQuery;
use crate::error::AppError;
use crate::utils::text_rank;

#[derive(Debug, Clone)]
struct StoredDocument {
    fields: NewDocument,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    document_types: BTreeMap<i64, DocumentType>,
    documents: BTreeMap<i64, StoredDocument>,
    last_type_id: i64,
    last_document_id: i64,
}

impl Tables {
    fn resolve(&self, id: i64, stored: &StoredDocument) -> Result<Document, AppError> {
        let document_type = self
            .document_types
            .get(&stored.fields.document_type_id)
            .cloned()
            .ok_or_else(|| {
                AppError::internal(
                    "Document references a missing document type",
                    json!({ "id": id, "document_type_id": stored.fields.document_type_id }),
                )
            })?;

        Ok(Document {
            id,
            document_type,
            title: stored.fields.title.clone(),
            description: stored.fields.description.clone(),
            link: stored.fields.link.clone(),
            author_name: stored.fields.author_name.clone(),
            author_email: stored.fields.author_email.clone(),
            created_at: stored.created_at,
        })
    }

    fn require_type(&self, document_type_id: i64) -> Result<(), AppError> {
        if self.document_types.contains_key(&document_type_id) {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Referenced record not found",
                json!({ "document_type_id": document_type_id }),
            ))
        }
    }

    /// Ids of the documents `query` selects, in result order.
    fn select(&self, query: &DocumentQuery) -> Vec<i64> {
        match query {
            DocumentQuery::FullListing => self.documents.keys().copied().collect(),
            DocumentQuery::RankedSearch(text) => {
                let mut scored: Vec<(i64, f64)> = self
                    .documents
                    .iter()
                    .map(|(id, stored)| {
                        let fields = [
                            stored.fields.title.as_str(),
                            stored.fields.description.as_str(),
                            stored.fields.author_name.as_str(),
                            stored.fields.author_email.as_str(),
                        ];
                        (*id, text_rank::rank(&fields, text))
                    })
                    .filter(|(_, score)| *score > 0.0)
                    .collect();

                scored.sort_by(|a, b| {
                    b.1.partial_cmp(&a.1)
                        .unwrap_or(Ordering::Equal)
                        .then(a.0.cmp(&b.0))
                });
                scored.into_iter().map(|(id, _)| id).collect()
            }
        }
    }
}

/// Thread-safe in-memory document and document type store.
///
/// Ids start at 1 and are never reused. Locks are never held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::store_unavailable("Memory store lock poisoned", json!({})))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::store_unavailable("Memory store lock poisoned", json!({})))
    }
}

#[async_trait]
impl DocumentTypeRepository for MemoryStore {
    async fn create(&self, new_type: NewDocumentType) -> Result<DocumentType, AppError> {
        let mut tables = self.write()?;

        if tables
            .document_types
            .values()
            .any(|t| t.short_code == new_type.short_code)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "document_types_short_code_key" }),
            ));
        }

        tables.last_type_id += 1;
        let document_type = DocumentType::new(
            tables.last_type_id,
            new_type.short_code,
            new_type.long_name,
            new_type.description,
        );
        tables
            .document_types
            .insert(document_type.id, document_type.clone());

        Ok(document_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DocumentType>, AppError> {
        Ok(self.read()?.document_types.get(&id).cloned())
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<DocumentType>, AppError> {
        Ok(self
            .read()?
            .document_types
            .values()
            .find(|t| t.short_code == short_code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<DocumentType>, AppError> {
        let mut types: Vec<DocumentType> = self.read()?.document_types.values().cloned().collect();
        types.sort_by(|a, b| a.short_code.cmp(&b.short_code));
        Ok(types)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}

#[async_trait]
impl DocumentRepository for MemoryStore {
    async fn create(&self, new_document: NewDocument) -> Result<Document, AppError> {
        let mut tables = self.write()?;
        tables.require_type(new_document.document_type_id)?;

        tables.last_document_id += 1;
        let id = tables.last_document_id;
        let stored = StoredDocument {
            fields: new_document,
            created_at: Utc::now(),
        };
        let document = tables.resolve(id, &stored)?;
        tables.documents.insert(id, stored);

        Ok(document)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, AppError> {
        let tables = self.read()?;
        tables
            .documents
            .get(&id)
            .map(|stored| tables.resolve(id, stored))
            .transpose()
    }

    async fn update(&self, id: i64, changes: NewDocument) -> Result<Option<Document>, AppError> {
        let mut tables = self.write()?;
        if !tables.documents.contains_key(&id) {
            return Ok(None);
        }
        tables.require_type(changes.document_type_id)?;

        let Some(stored) = tables.documents.get_mut(&id) else {
            return Ok(None);
        };
        stored.fields = changes;
        let stored = stored.clone();

        tables.resolve(id, &stored).map(Some)
    }

    async fn search(
        &self,
        query: &DocumentQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let tables = self.read()?;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        tables
            .select(query)
            .into_iter()
            .skip(offset)
            .take(limit)
            .filter_map(|id| tables.documents.get(&id).map(|stored| (id, stored)))
            .map(|(id, stored)| tables.resolve(id, stored))
            .collect()
    }

    async fn count(&self, query: &DocumentQuery) -> Result<i64, AppError> {
        let total = self.read()?.select(query).len();
        Ok(i64::try_from(total).unwrap_or(i64::MAX))
    }
}
