//! In-process link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{Link, LinkFilter, LinkUpdate, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store kept in memory, lost on restart.
///
/// Upholds the same contract as the PostgreSQL store: ids start at 1 and are
/// assigned under a write lock, and a short code already held by another
/// record is rejected on update.
///
/// # Use Cases
///
/// - Local development without a database (`STORAGE_BACKEND=memory`)
/// - HTTP and service tests
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    links: BTreeMap<i64, Link>,
    codes: HashMap<String, i64>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        tracing::debug!("Using in-memory link store");
        Self::default()
    }

    /// Number of stored records, codeless ones included.
    pub async fn len(&self) -> usize {
        self.inner.read().await.links.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let link = Link::new(
            inner.last_id,
            new_link.owner_id,
            None,
            new_link.original_url,
            Utc::now(),
            None,
        );
        inner.links.insert(link.id, link.clone());

        Ok(link)
    }

    async fn update(&self, update: LinkUpdate) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if let Some(&holder) = inner.codes.get(&update.short_code)
            && holder != update.id
        {
            tracing::error!(
                id = update.id,
                holder,
                code = %update.short_code,
                "Duplicate short code rejected by store"
            );
            return Err(AppError::Internal);
        }

        let Some(link) = inner.links.get_mut(&update.id) else {
            tracing::error!(id = update.id, "Update matched no link record");
            return Err(AppError::Internal);
        };

        let previous = link.short_code.replace(update.short_code.clone());
        link.original_url = update.original_url;
        link.updated_at = Some(Utc::now());
        let updated = link.clone();

        if let Some(previous) = previous {
            inner.codes.remove(&previous);
        }
        inner.codes.insert(update.short_code, update.id);

        Ok(updated)
    }

    async fn get(&self, filter: LinkFilter) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;

        let link = match (filter.id, filter.short_code.as_deref()) {
            (Some(id), _) => inner.links.get(&id).filter(|l| filter.matches(l)),
            (None, Some(code)) => inner.codes.get(code).and_then(|id| inner.links.get(id)),
            (None, None) => inner.links.values().next(),
        };

        Ok(link.cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
