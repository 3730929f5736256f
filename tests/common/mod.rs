#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use base62_shortener::api::handlers::health_handler;
use base62_shortener::api::routes::link_routes;
use base62_shortener::config::StorageBackend;
use base62_shortener::domain::entities::{Link, LinkFilter, LinkUpdate, NewLink};
use base62_shortener::domain::repositories::LinkRepository;
use base62_shortener::error::AppError;
use base62_shortener::infrastructure::persistence::MemoryLinkRepository;
use base62_shortener::state::AppState;
use std::sync::Arc;

/// Which store operation a [`FailingRepository`] breaks.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Create,
    Update,
    Get,
    Everything,
}

/// Wraps the in-memory store and fails the chosen operation.
pub struct FailingRepository {
    pub inner: MemoryLinkRepository,
    pub fail_on: FailOn,
}

impl FailingRepository {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            inner: MemoryLinkRepository::new(),
            fail_on,
        }
    }

    fn fails(&self, op: FailOn) -> bool {
        self.fail_on == op || self.fail_on == FailOn::Everything
    }
}

#[async_trait]
impl LinkRepository for FailingRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        if self.fails(FailOn::Create) {
            return Err(AppError::Internal);
        }
        self.inner.create(new_link).await
    }

    async fn update(&self, update: LinkUpdate) -> Result<Link, AppError> {
        if self.fails(FailOn::Update) {
            return Err(AppError::Internal);
        }
        self.inner.update(update).await
    }

    async fn get(&self, filter: LinkFilter) -> Result<Option<Link>, AppError> {
        if self.fails(FailOn::Get) {
            return Err(AppError::Internal);
        }
        self.inner.get(filter).await
    }

    async fn health_check(&self) -> bool {
        self.fail_on != FailOn::Everything
    }
}

/// Application router without the outer middleware stack.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .merge(link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn memory_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(repo.clone(), StorageBackend::Memory);
    (state, repo)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}

pub fn memory_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let (state, repo) = memory_state();
    (test_server(state), repo)
}

pub fn failing_server(fail_on: FailOn) -> (TestServer, Arc<FailingRepository>) {
    let repo = Arc::new(FailingRepository::new(fail_on));
    let state = AppState::new(repo.clone(), StorageBackend::Memory);
    (test_server(state), repo)
}

/// Inserts a coded link directly through the repository.
pub async fn seed_link(repo: &dyn LinkRepository, url: &str) -> Link {
    let created = repo.create(NewLink::new(url.to_string())).await.unwrap();
    repo.update(LinkUpdate {
        id: created.id,
        short_code: base62_shortener::utils::base62::encode(created.id as u64),
        original_url: created.original_url,
    })
    .await
    .unwrap()
}
