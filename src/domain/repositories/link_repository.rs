//! Repository trait for link record storage.

use crate::domain::entities::{Link, LinkFilter, LinkUpdate, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Durable storage for link records.
///
/// The store owns id assignment: `create` must hand out a unique,
/// monotonically increasing id atomically per insert. It must also reject a
/// duplicate `short_code` on `update` instead of overwriting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a record without a short code.
    ///
    /// Returns the stored record with its assigned `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Writes the short code (and URL) onto the record with `update.id` and
    /// stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors, if no record has that
    /// id, or if the short code is already taken.
    async fn update(&self, update: LinkUpdate) -> Result<Link, AppError>;

    /// Finds the single record matching every present field of `filter`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if nothing matches (not an error)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn get(&self, filter: LinkFilter) -> Result<Option<Link>, AppError>;

    /// Reports whether the backing store is reachable.
    async fn health_check(&self) -> bool;
}
