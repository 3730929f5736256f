//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::StorageBackend;
use crate::domain::repositories::LinkRepository;

/// State cloned into every request.
///
/// The link store sits behind a trait object so the server can run on either
/// storage backend without changing handler types.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(repository: Arc<dyn LinkRepository>, storage: StorageBackend) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository)),
            storage,
        }
    }
}
