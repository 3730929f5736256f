//! Link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkFilter, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_normalizer::normalize_url;

/// Service for creating and resolving short links.
///
/// The short code is derived from the store-assigned id, so creation is a
/// two-phase write: insert without a code, encode the new id, then update the
/// record with the code. Neither step is retried and a failed update is not
/// rolled back; the inserted record stays codeless and unreachable by code.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens `original_url` and returns the finalized record.
    ///
    /// The URL gets an `https://` scheme when it has neither `http://` nor
    /// `https://`. The record is owned by
    /// [`DEFAULT_OWNER_ID`](crate::domain::entities::DEFAULT_OWNER_ID).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert or the update fails. The
    /// update is never attempted after a failed insert.
    pub async fn create_short_link(&self, original_url: &str) -> Result<Link, AppError> {
        let new_link = NewLink::new(normalize_url(original_url));

        let created = self.repository.create(new_link).await.map_err(|e| {
            tracing::error!(step = "create", error = %e, "Failed to insert link");
            AppError::Internal
        })?;

        let id = u64::try_from(created.id).map_err(|_| {
            tracing::error!(step = "encode", id = created.id, "Store assigned a negative id");
            AppError::Internal
        })?;

        let update = LinkUpdate {
            id: created.id,
            short_code: base62::encode(id),
            original_url: created.original_url,
        };

        let link = self.repository.update(update).await.map_err(|e| {
            tracing::error!(
                step = "update",
                id = created.id,
                error = %e,
                "Failed to attach short code, record left without code"
            );
            AppError::Internal
        })?;

        tracing::info!(id = link.id, code = link.code(), "Short link created");
        Ok(link)
    }

    /// Resolves a short code to its stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record carries `code`.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .get(LinkFilter::by_code(code))
            .await
            .map_err(|e| {
                tracing::error!(step = "get", code, error = %e, "Failed to look up short code");
                AppError::Internal
            })?;

        link.ok_or(AppError::NotFound)
    }

    /// Looks a record up by id, including codeless (orphaned) records.
    ///
    /// Not exposed over HTTP; used by the admin CLI.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has `id`.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_by_id(&self, id: i64) -> Result<Link, AppError> {
        let link = self
            .repository
            .get(LinkFilter::by_id(id))
            .await
            .map_err(|e| {
                tracing::error!(step = "get", id, error = %e, "Failed to look up link by id");
                AppError::Internal
            })?;

        link.ok_or(AppError::NotFound)
    }

    /// Reports whether the backing store is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use async_trait::async_trait;
    use chrono::Utc;

    fn stored_link(id: i64, code: Option<&str>, url: &str) -> Link {
        Link::new(
            id,
            0,
            code.map(str::to_string),
            url.to_string(),
            Utc::now(),
            None,
        )
    }

    #[tokio::test]
    async fn test_create_normalizes_then_creates_then_updates() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| {
                new_link.original_url == "https://example.com" && new_link.owner_id == 0
            })
            .times(1)
            .returning(|new_link| Ok(stored_link(1, None, &new_link.original_url)));

        mock_repo
            .expect_update()
            .withf(|update| {
                update.id == 1
                    && update.short_code == "00001"
                    && update.original_url == "https://example.com"
            })
            .times(1)
            .returning(|update| {
                Ok(stored_link(
                    update.id,
                    Some(&update.short_code),
                    &update.original_url,
                ))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.create_short_link("example.com").await.unwrap();

        assert_eq!(link.code(), "00001");
        assert_eq!(link.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_create_keeps_existing_scheme() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_link| new_link.original_url == "http://foo.com")
            .times(1)
            .returning(|new_link| Ok(stored_link(62, None, &new_link.original_url)));

        mock_repo
            .expect_update()
            .withf(|update| update.short_code == "00010")
            .times(1)
            .returning(|update| {
                Ok(stored_link(
                    update.id,
                    Some(&update.short_code),
                    &update.original_url,
                ))
            });

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.create_short_link("http://foo.com").await.unwrap();

        assert_eq!(link.original_url, "http://foo.com");
        assert_eq!(link.code(), "00010");
    }

    #[tokio::test]
    async fn test_create_insert_failure_skips_update() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::Internal));
        mock_repo.expect_update().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("foo.com").await;

        assert_eq!(result.unwrap_err(), AppError::Internal);
    }

    #[tokio::test]
    async fn test_create_update_failure_is_internal() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_link| Ok(stored_link(10, None, &new_link.original_url)));
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_| Err(AppError::Internal));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("bar.com").await;

        assert_eq!(result.unwrap_err(), AppError::Internal);
    }

    #[tokio::test]
    async fn test_create_translates_any_store_error_to_internal() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::NotFound));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.create_short_link("bar.com").await;

        assert_eq!(result.unwrap_err(), AppError::Internal);
    }

    /// In-memory store whose update step always fails.
    struct FailingUpdateRepository {
        inner: MemoryLinkRepository,
    }

    #[async_trait]
    impl LinkRepository for FailingUpdateRepository {
        async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
            self.inner.create(new_link).await
        }

        async fn update(&self, _update: LinkUpdate) -> Result<Link, AppError> {
            Err(AppError::Internal)
        }

        async fn get(&self, filter: LinkFilter) -> Result<Option<Link>, AppError> {
            self.inner.get(filter).await
        }

        async fn health_check(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_update_failure_leaves_orphan_reachable_by_id_only() {
        let repo = Arc::new(FailingUpdateRepository {
            inner: MemoryLinkRepository::new(),
        });
        let service = LinkService::new(repo.clone());

        let result = service.create_short_link("example.com").await;
        assert_eq!(result.unwrap_err(), AppError::Internal);

        let orphan = service.find_by_id(1).await.unwrap();
        assert!(!orphan.is_coded());
        assert_eq!(orphan.original_url, "https://example.com");
        assert!(orphan.updated_at.is_none());

        assert_eq!(service.resolve("00001").await.unwrap_err(), AppError::NotFound);
        assert_eq!(service.resolve("").await.unwrap_err(), AppError::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get()
            .withf(|filter| *filter == LinkFilter::by_code("0000Z"))
            .times(1)
            .returning(|_| Ok(Some(stored_link(35, Some("0000Z"), "https://golang.org"))));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.resolve("0000Z").await.unwrap();

        assert_eq!(link.original_url, "https://golang.org");
        assert_eq!(link.code(), "0000Z");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo.expect_get().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve("xxxxx").await;

        assert_eq!(result.unwrap_err(), AppError::NotFound);
    }

    #[tokio::test]
    async fn test_resolve_store_failure_is_internal() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_get()
            .times(1)
            .returning(|_| Err(AppError::Internal));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.resolve("errxx").await;

        assert_eq!(result.unwrap_err(), AppError::Internal);
    }

    #[tokio::test]
    async fn test_round_trip_against_memory_store() {
        let service = LinkService::new(Arc::new(MemoryLinkRepository::new()));

        let first = service.create_short_link("example.com").await.unwrap();
        let second = service.create_short_link("https://rust-lang.org").await.unwrap();

        assert_eq!(first.code(), "00001");
        assert_eq!(second.code(), "00002");
        assert!(first.updated_at.is_some());

        let resolved = service.resolve("00002").await.unwrap();
        assert_eq!(resolved.original_url, "https://rust-lang.org");
    }
}
