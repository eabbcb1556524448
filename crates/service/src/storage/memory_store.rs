use std::collections::HashMap;

use models::Record;
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::identity::{Clock, IdentityPolicy, SystemClock};
use crate::storage::store::Store;

/// Generic in-memory keyed record store.
///
/// Keeps a `HashMap<id, T>` behind a readers-writer lock. Reads share the
/// lock; create/update/delete hold it exclusively only for identity
/// assignment and the map mutation. One instance per resource collection,
/// shared through `Arc` for the life of the process.
pub struct MemoryStore<T, C = SystemClock> {
    inner: RwLock<HashMap<String, T>>,
    policy: IdentityPolicy<C>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record, C: Clock> MemoryStore<T, C> {
    pub fn with_clock(clock: C) -> Self {
        Self { inner: RwLock::new(HashMap::new()), policy: IdentityPolicy::with_clock(clock) }
    }

    /// Every stored record, in no particular order.
    pub fn list_all(&self) -> Vec<T> {
        let map = self.inner.read();
        map.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<T> {
        let map = self.inner.read();
        map.get(id).cloned()
    }

    /// Assign a fresh id and timestamps to `raw` and insert it.
    pub fn create(&self, raw: T) -> T {
        let mut map = self.inner.write();
        let mut record = self.policy.assign_on_create(raw);
        while map.contains_key(record.id()) {
            record = self.policy.assign_on_create(record);
        }
        map.insert(record.id().to_owned(), record.clone());
        drop(map);
        debug!(kind = T::KIND, id = %record.id(), "record created");
        record
    }

    /// Replace the record stored under `id` with `raw`, keeping its id and
    /// creation time. Nothing changes when `id` is absent.
    pub fn update(&self, id: &str, raw: T) -> Result<T, ServiceError> {
        let mut map = self.inner.write();
        let slot = map.get_mut(id).ok_or_else(|| ServiceError::not_found(T::KIND))?;
        let record = self.policy.assign_on_update(raw, slot);
        *slot = record.clone();
        drop(map);
        debug!(kind = T::KIND, id = %record.id(), "record updated");
        Ok(record)
    }

    /// Remove a record; returns whether it existed.
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut map = self.inner.write();
        let existed = map.remove(id).is_some();
        drop(map);
        if existed {
            debug!(kind = T::KIND, %id, "record deleted");
        }
        existed
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<T: Record, C: Clock> Store<T> for MemoryStore<T, C> {
    fn list_all(&self) -> Vec<T> { self.list_all() }
    fn get_by_id(&self, id: &str) -> Option<T> { self.get_by_id(id) }
    fn create(&self, raw: T) -> T { self.create(raw) }
    fn update(&self, id: &str, raw: T) -> Result<T, ServiceError> { self.update(id, raw) }
    fn delete_by_id(&self, id: &str) -> bool { self.delete_by_id(id) }
}
