//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkFilter, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, owner_id, short_code, original_url, created_at, updated_at";

/// PostgreSQL repository for link storage and retrieval.
///
/// Ids come from the `BIGSERIAL` primary key. `short_code` is nullable and
/// `UNIQUE`, so codeless records never collide and a duplicate code is
/// rejected by the database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let query = format!(
            "INSERT INTO links (owner_id, original_url) VALUES ($1, $2) RETURNING {LINK_COLUMNS}"
        );

        let link = sqlx::query_as::<_, Link>(&query)
            .bind(new_link.owner_id)
            .bind(new_link.original_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn update(&self, update: LinkUpdate) -> Result<Link, AppError> {
        let query = format!(
            r#"
            UPDATE links
            SET short_code = $1, original_url = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING {LINK_COLUMNS}
            "#
        );

        let link = sqlx::query_as::<_, Link>(&query)
            .bind(&update.short_code)
            .bind(&update.original_url)
            .bind(update.id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        link.ok_or_else(|| {
            tracing::error!(id = update.id, "Update matched no link record");
            AppError::Internal
        })
    }

    async fn get(&self, filter: LinkFilter) -> Result<Option<Link>, AppError> {
        let query = format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM links
            WHERE ($1::bigint IS NULL OR id = $1)
              AND ($2::text IS NULL OR short_code = $2)
            ORDER BY id
            LIMIT 1
            "#
        );

        let link = sqlx::query_as::<_, Link>(&query)
            .bind(filter.id)
            .bind(filter.short_code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}
