//! PostgreSQL implementation of document repository.
//!
//! Ranked search uses the database's full-text search: the four text fields
//! are concatenated into a `tsvector`, matched against `plainto_tsquery` and
//! ordered by `ts_rank`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Document, DocumentType, NewDocument};
use crate::domain::repositories::DocumentRepository;
use crate::domain::search::DocumentQuery;
use crate::error::AppError;

/// Searchable fields of `documents d`, in the order the search index uses.
const SEARCH_TEXT: &str =
    "d.title || ' ' || d.description || ' ' || d.author_name || ' ' || d.author_email";

const DOCUMENT_COLUMNS: &str = "d.id, d.document_type_id, t.short_code, t.long_name, \
     t.description AS type_description, d.title, d.description, d.link, \
     d.author_name, d.author_email, d.created_at";

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    document_type_id: i64,
    short_code: String,
    long_name: String,
    type_description: String,
    title: String,
    description: String,
    link: String,
    author_name: String,
    author_email: String,
    created_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(r: DocumentRow) -> Self {
        Document {
            id: r.id,
            document_type: DocumentType::new(
                r.document_type_id,
                r.short_code,
                r.long_name,
                r.type_description,
            ),
            title: r.title,
            description: r.description,
            link: r.link,
            author_name: r.author_name,
            author_email: r.author_email,
            created_at: r.created_at,
        }
    }
}

/// PostgreSQL repository for document storage and ranked search.
pub struct PgDocumentRepository {
    pool: Arc<PgPool>,
    /// `'<name>'::regconfig`, inlined so the planner can use the GIN index.
    search_config: String,
}

impl PgDocumentRepository {
    /// Creates a new repository.
    ///
    /// `search_config` names the PostgreSQL text search configuration used
    /// for stemming and stop words (e.g. `english`, `simple`).
    pub fn new(pool: Arc<PgPool>, search_config: impl AsRef<str>) -> Self {
        Self {
            pool,
            search_config: regconfig_literal(search_config.as_ref()),
        }
    }

    /// The `tsvector` expression ranked search matches against.
    pub fn search_vector(&self) -> String {
        format!("to_tsvector({}, {SEARCH_TEXT})", self.search_config)
    }
}

/// Quotes a text search configuration name as a `regconfig` literal.
fn regconfig_literal(name: &str) -> String {
    format!("'{}'::regconfig", name.replace('\'', "''"))
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn create(&self, new_document: NewDocument) -> Result<Document, AppError> {
        let sql = format!(
            r#"
            WITH d AS (
                INSERT INTO documents
                    (document_type_id, title, description, link, author_name, author_email)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT {DOCUMENT_COLUMNS}
            FROM d
            JOIN document_types t ON t.id = d.document_type_id
            "#
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(new_document.document_type_id)
            .bind(&new_document.title)
            .bind(&new_document.description)
            .bind(&new_document.link)
            .bind(&new_document.author_name)
            .bind(&new_document.author_email)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Document>, AppError> {
        let sql = format!(
            r#"
            SELECT {DOCUMENT_COLUMNS}
            FROM documents d
            JOIN document_types t ON t.id = d.document_type_id
            WHERE d.id = $1
            "#
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: i64, changes: NewDocument) -> Result<Option<Document>, AppError> {
        let sql = format!(
            r#"
            WITH d AS (
                UPDATE documents SET
                    document_type_id = $2,
                    title            = $3,
                    description      = $4,
                    link             = $5,
                    author_name      = $6,
                    author_email     = $7
                WHERE id = $1
                RETURNING *
            )
            SELECT {DOCUMENT_COLUMNS}
            FROM d
            JOIN document_types t ON t.id = d.document_type_id
            "#
        );

        let row = sqlx::query_as::<_, DocumentRow>(&sql)
            .bind(id)
            .bind(changes.document_type_id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(&changes.link)
            .bind(&changes.author_name)
            .bind(&changes.author_email)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Into::into))
    }

    async fn search(
        &self,
        query: &DocumentQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let rows = match query {
            DocumentQuery::FullListing => {
                let sql = format!(
                    r#"
                    SELECT {DOCUMENT_COLUMNS}
                    FROM documents d
                    JOIN document_types t ON t.id = d.document_type_id
                    ORDER BY d.id ASC
                    LIMIT $1 OFFSET $2
                    "#
                );

                sqlx::query_as::<_, DocumentRow>(&sql)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
            DocumentQuery::RankedSearch(text) => {
                let (config, vector) = (&self.search_config, self.search_vector());
                let sql = format!(
                    r#"
                    SELECT {DOCUMENT_COLUMNS}
                    FROM documents d
                    JOIN document_types t ON t.id = d.document_type_id
                    CROSS JOIN plainto_tsquery({config}, $1) AS query
                    WHERE {vector} @@ query
                    ORDER BY ts_rank({vector}, query) DESC, d.id ASC
                    LIMIT $2 OFFSET $3
                    "#
                );

                sqlx::query_as::<_, DocumentRow>(&sql)
                    .bind(text)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(self.pool.as_ref())
                    .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self, query: &DocumentQuery) -> Result<i64, AppError> {
        let count = match query {
            DocumentQuery::FullListing => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
                    .fetch_one(self.pool.as_ref())
                    .await?
            }
            DocumentQuery::RankedSearch(text) => {
                let sql = format!(
                    r#"
                    SELECT COUNT(*)
                    FROM documents d
                    WHERE {} @@ plainto_tsquery({}, $1)
                    "#,
                    self.search_vector(),
                    self.search_config,
                );

                sqlx::query_scalar::<_, i64>(&sql)
                    .bind(text)
                    .fetch_one(self.pool.as_ref())
                    .await?
            }
        };

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regconfig_literal() {
        assert_eq!(regconfig_literal("english"), "'english'::regconfig");
        assert_eq!(regconfig_literal("it's"), "'it''s'::regconfig");
    }
}
