//! In-process store
//!
//! Used when no database is configured and throughout the test suite. Each
//! table is a `Vec` behind a `tokio::sync::RwLock`, so `find_all` returns
//! insertion order and every read-modify-write runs under one write guard.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::traits::{Repository, RepositoryResult, Store};
use crate::ids::{IdGenerator, UuidV7Generator};
use crate::models::{Identified, Region, Walk, WalkDifficulty};

/// One insertion-ordered table of identified models
#[derive(Debug)]
pub struct MemoryTable<M> {
    rows: RwLock<Vec<Identified<M>>>,
}

impl<M> Default for MemoryTable<M> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

/// Gives generic code access to the table holding `M`
pub trait HasTable<M> {
    /// The table for model `M`
    fn table(&self) -> &MemoryTable<M>;
}

/// In-process implementation of every repository
#[derive(Debug, Clone)]
pub struct MemoryStore {
    regions: Arc<MemoryTable<Region>>,
    walks: Arc<MemoryTable<Walk>>,
    walk_difficulties: Arc<MemoryTable<WalkDifficulty>>,
    ids: Arc<dyn IdGenerator>,
}

impl MemoryStore {
    /// Empty store assigning UUIDv7 identifiers
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidV7Generator))
    }

    /// Empty store using a custom identifier generator
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            regions: Arc::default(),
            walks: Arc::default(),
            walk_difficulties: Arc::default(),
            ids,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HasTable<Region> for MemoryStore {
    fn table(&self) -> &MemoryTable<Region> {
        &self.regions
    }
}

impl HasTable<Walk> for MemoryStore {
    fn table(&self) -> &MemoryTable<Walk> {
        &self.walks
    }
}

impl HasTable<WalkDifficulty> for MemoryStore {
    fn table(&self) -> &MemoryTable<WalkDifficulty> {
        &self.walk_difficulties
    }
}

impl<M> Repository<M> for MemoryStore
where
    MemoryStore: HasTable<M>,
    M: Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> RepositoryResult<Vec<Identified<M>>> {
        Ok(self.table().rows.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Identified<M>>> {
        let rows = self.table().rows.read().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }

    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let rows = self.table().rows.read().await;
        Ok(rows.iter().any(|row| row.id == id))
    }

    async fn create(&self, model: M) -> RepositoryResult<Identified<M>> {
        let entity = Identified::new(self.ids.next_id(), model);
        self.table().rows.write().await.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: Uuid, model: M) -> RepositoryResult<Option<Identified<M>>> {
        let mut rows = self.table().rows.write().await;
        Ok(rows.iter_mut().find(|row| row.id == id).map(|row| {
            row.replace(model);
            row.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Option<Identified<M>>> {
        let mut rows = self.table().rows.write().await;
        Ok(rows
            .iter()
            .position(|row| row.id == id)
            .map(|index| rows.remove(index)))
    }
}

impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Debug, Default)]
    struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::SeqCst) + 1))
        }
    }

    fn difficulty(code: &str) -> WalkDifficulty {
        WalkDifficulty {
            code: code.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_generated_ids_in_insertion_order() {
        let store = MemoryStore::with_id_generator(Arc::new(SequentialIds::default()));

        let easy = store.create(difficulty("Easy")).await.unwrap();
        let hard = store.create(difficulty("Hard")).await.unwrap();

        assert_eq!(easy.id, Uuid::from_u128(1));
        assert_eq!(hard.id, Uuid::from_u128(2));

        let all: Vec<Identified<WalkDifficulty>> = store.find_all().await.unwrap();
        let codes: Vec<_> = all.iter().map(|d| d.model.code.as_str()).collect();
        assert_eq!(codes, ["Easy", "Hard"]);
    }

    #[tokio::test]
    async fn test_tables_are_independent() {
        let store = MemoryStore::new();
        let created = store.create(difficulty("Easy")).await.unwrap();

        assert!(Repository::<WalkDifficulty>::exists(&store, created.id).await.unwrap());
        assert!(!Repository::<Region>::exists(&store, created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_replaces_fields() {
        let store = MemoryStore::new();
        let created = store.create(difficulty("Easy")).await.unwrap();

        let updated = store
            .update(created.id, difficulty("Moderate"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.model.code, "Moderate");
        let fetched: Option<Identified<WalkDifficulty>> =
            store.find_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_id_has_no_side_effects() {
        let store = MemoryStore::new();
        store.create(difficulty("Easy")).await.unwrap();

        let result = store.update(Uuid::now_v7(), difficulty("Hard")).await.unwrap();

        assert!(result.is_none());
        let all: Vec<Identified<WalkDifficulty>> = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].model.code, "Easy");
    }

    #[tokio::test]
    async fn test_delete_returns_entity_once() {
        let store = MemoryStore::new();
        let created = store.create(difficulty("Easy")).await.unwrap();

        let first: Option<Identified<WalkDifficulty>> = store.delete(created.id).await.unwrap();
        let second: Option<Identified<WalkDifficulty>> = store.delete(created.id).await.unwrap();

        assert_eq!(first, Some(created));
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let store = MemoryStore::new();
        let clone = store.clone();
        let created = store.create(difficulty("Easy")).await.unwrap();

        let seen: Option<Identified<WalkDifficulty>> = clone.find_by_id(created.id).await.unwrap();
        assert!(seen.is_some());
        assert_eq!(clone.backend(), "memory");
        assert!(clone.ping().await.is_ok());
    }
}
