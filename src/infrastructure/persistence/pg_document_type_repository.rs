//! PostgreSQL implementation of the document type registry.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{DocumentType, NewDocumentType};
use crate::domain::repositories::DocumentTypeRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct DocumentTypeRow {
    id: i64,
    short_code: String,
    long_name: String,
    description: String,
}

impl From<DocumentTypeRow> for DocumentType {
    fn from(r: DocumentTypeRow) -> Self {
        DocumentType::new(r.id, r.short_code, r.long_name, r.description)
    }
}

/// PostgreSQL repository for document types.
pub struct PgDocumentTypeRepository {
    pool: Arc<PgPool>,
}

impl PgDocumentTypeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentTypeRepository for PgDocumentTypeRepository {
    async fn create(&self, new_type: NewDocumentType) -> Result<DocumentType, AppError> {
        let row = sqlx::query_as::<_, DocumentTypeRow>(
            r#"
            INSERT INTO document_types (short_code, long_name, description)
            VALUES ($1, $2, $3)
            RETURNING id, short_code, long_name, description
            "#,
        )
        .bind(&new_type.short_code)
        .bind(&new_type.long_name)
        .bind(&new_type.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DocumentType>, AppError> {
        let row = sqlx::query_as::<_, DocumentTypeRow>(
            "SELECT id, short_code, long_name, description FROM document_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_short_code(
        &self,
        short_code: &str,
    ) -> Result<Option<DocumentType>, AppError> {
        let row = sqlx::query_as::<_, DocumentTypeRow>(
            "SELECT id, short_code, long_name, description FROM document_types WHERE short_code = $1",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<DocumentType>, AppError> {
        let rows = sqlx::query_as::<_, DocumentTypeRow>(
            "SELECT id, short_code, long_name, description FROM document_types ORDER BY short_code",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
