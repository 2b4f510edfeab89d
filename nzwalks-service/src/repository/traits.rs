//! Repository trait definitions
//!
//! Uses RPITIT (Return Position Impl Trait In Traits) so async methods need no
//! boxing. One generic [`Repository`] contract is shared by every model;
//! backends implement it once, generically, instead of once per entity.

use std::future::Future;

use uuid::Uuid;

use super::error::RepositoryError;
use crate::models::{Identified, Region, Walk, WalkDifficulty};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// CRUD access to one model type in the store
///
/// Absence is reported as `Ok(None)`, never as an error. Every operation
/// touches at most one row and is atomic at that granularity.
pub trait Repository<M>: Send + Sync {
    /// Every stored entity, in storage order
    fn find_all(&self) -> impl Future<Output = RepositoryResult<Vec<Identified<M>>>> + Send;

    /// Point lookup by identifier
    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = RepositoryResult<Option<Identified<M>>>> + Send;

    /// Whether an entity with this identifier exists
    fn exists(&self, id: Uuid) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Assign a fresh identifier, persist, and return the stored entity
    fn create(&self, model: M) -> impl Future<Output = RepositoryResult<Identified<M>>> + Send;

    /// Overwrite every mutable field of an existing entity
    ///
    /// Returns `None` without side effects when `id` is unknown. The id itself
    /// is never changed.
    fn update(
        &self,
        id: Uuid,
        model: M,
    ) -> impl Future<Output = RepositoryResult<Option<Identified<M>>>> + Send;

    /// Hard delete, returning the entity as it was just before removal
    fn delete(
        &self,
        id: Uuid,
    ) -> impl Future<Output = RepositoryResult<Option<Identified<M>>>> + Send;
}

/// The storage collaborator: one repository per entity plus a readiness probe
pub trait Store:
    Repository<Region> + Repository<Walk> + Repository<WalkDifficulty> + Clone + 'static
{
    /// Short backend label used in logs and readiness output
    fn backend(&self) -> &'static str;

    /// Round-trip to the underlying storage
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}
