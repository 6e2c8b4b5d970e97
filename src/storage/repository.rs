//! Generic keyed repository
//!
//! Every stored entity exposes its identifier through [`Entity`]; the
//! in-memory repository keeps one `RwLock<HashMap>` per entity kind.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::RwLock;

use log::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Account, AccountId, Category, CategoryId, Operation, OperationId};

/// An entity that can be stored in a repository
pub trait Entity: Clone {
    type Id: Copy + Eq + Hash + Display;

    /// Human-readable entity kind, used in errors and logs
    const KIND: &'static str;

    fn id(&self) -> Self::Id;
}

impl Entity for Account {
    type Id = AccountId;
    const KIND: &'static str = "Account";

    fn id(&self) -> AccountId {
        self.id
    }
}

impl Entity for Category {
    type Id = CategoryId;
    const KIND: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }
}

impl Entity for Operation {
    type Id = OperationId;
    const KIND: &'static str = "Operation";

    fn id(&self) -> OperationId {
        self.id
    }
}

/// Keyed store for one entity kind
///
/// `add`, `update` and `delete` report whether they changed anything; a
/// call that does not apply is a no-op, not an error.
pub trait Repository<T: Entity> {
    /// Get an entity by ID
    fn get(&self, id: T::Id) -> LedgerResult<Option<T>>;

    /// Snapshot of all stored entities, in no particular order
    fn get_all(&self) -> LedgerResult<Vec<T>>;

    /// Insert unless the ID is already taken
    fn add(&self, entity: T) -> LedgerResult<bool>;

    /// Replace an existing entity; no-op when the ID is absent
    fn update(&self, entity: T) -> LedgerResult<bool>;

    /// Remove an entity if present
    fn delete(&self, id: T::Id) -> LedgerResult<bool>;

    fn count(&self) -> LedgerResult<usize> {
        Ok(self.get_all()?.len())
    }

    fn exists(&self, id: T::Id) -> LedgerResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}

/// Repository backed by a lock-protected hash map
pub struct InMemoryRepository<T: Entity> {
    data: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> LedgerResult<std::sync::RwLockReadGuard<'_, HashMap<T::Id, T>>> {
        self.data.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })
    }

    fn write(&self) -> LedgerResult<std::sync::RwLockWriteGuard<'_, HashMap<T::Id, T>>> {
        self.data.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: T::Id) -> LedgerResult<Option<T>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn get_all(&self) -> LedgerResult<Vec<T>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn add(&self, entity: T) -> LedgerResult<bool> {
        let mut data = self.write()?;
        let id = entity.id();

        if data.contains_key(&id) {
            debug!("{} {} already stored, add ignored", T::KIND, id);
            return Ok(false);
        }

        data.insert(id, entity);
        Ok(true)
    }

    fn update(&self, entity: T) -> LedgerResult<bool> {
        let mut data = self.write()?;

        match data.get_mut(&entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(true)
            }
            None => {
                debug!("{} {} not stored, update ignored", T::KIND, entity.id());
                Ok(false)
            }
        }
    }

    fn delete(&self, id: T::Id) -> LedgerResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }

    fn count(&self) -> LedgerResult<usize> {
        Ok(self.read()?.len())
    }

    fn exists(&self, id: T::Id) -> LedgerResult<bool> {
        Ok(self.read()?.contains_key(&id))
    }
}
