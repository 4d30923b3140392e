use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, SingletonRepository};

/// Entities the in-memory store can hold.
pub trait Keyed: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Secondary key that must stay unique across the collection.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// Copy over fields that only the store may change, such as counters
    /// bumped outside a read-modify-write edit.
    fn keep_stored(&mut self, _stored: &Self) {}
}

/// A collection of entities keyed by ID, behind an async RwLock.
pub struct InMemoryRepository<T> {
    pub(crate) rows: RwLock<HashMap<Uuid, T>>,
}

impl<T: Keyed> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) async fn snapshot(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }

    pub(crate) async fn find_by_key(&self, key: &str) -> Option<T> {
        self.rows
            .read()
            .await
            .values()
            .find(|row| row.unique_key() == Some(key))
            .cloned()
    }

    fn check_unique(rows: &HashMap<Uuid, T>, entity: &T) -> Result<(), RepoError> {
        let Some(key) = entity.unique_key() else {
            return Ok(());
        };
        let taken = rows
            .values()
            .any(|row| row.id() != entity.id() && row.unique_key() == Some(key));
        if taken {
            return Err(RepoError::Constraint(format!("'{key}' is already taken")));
        }
        Ok(())
    }
}

impl<T: Keyed> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Keyed> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entity.id()) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        Self::check_unique(&rows, &entity)?;
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn update(&self, mut entity: T) -> Result<T, RepoError> {
        let mut rows = self.rows.write().await;
        let Some(stored) = rows.get(&entity.id()) else {
            return Err(RepoError::NotFound);
        };
        entity.keep_stored(stored);
        Self::check_unique(&rows, &entity)?;
        rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.rows.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

/// Storage for a single page row.
pub struct InMemorySingleton<T> {
    page: RwLock<Option<T>>,
}

impl<T> InMemorySingleton<T> {
    pub fn new() -> Self {
        Self {
            page: RwLock::new(None),
        }
    }

    pub fn with(page: T) -> Self {
        Self {
            page: RwLock::new(Some(page)),
        }
    }
}

impl<T> Default for InMemorySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Clone + Send + Sync + 'static> SingletonRepository<T> for InMemorySingleton<T> {
    async fn find_first(&self) -> Result<Option<T>, RepoError> {
        Ok(self.page.read().await.clone())
    }

    async fn save(&self, page: T) -> Result<T, RepoError> {
        *self.page.write().await = Some(page.clone());
        Ok(page)
    }
}
