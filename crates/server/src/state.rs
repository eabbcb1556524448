use std::sync::Arc;

use models::{Client, Item};
use service::storage::{MemoryStore, Store};

/// Shared handle to one resource collection.
pub type SharedStore<T> = Arc<dyn Store<T>>;

/// Stores backing every resource collection. Each is independent.
#[derive(Clone)]
pub struct AppState {
    pub items: SharedStore<Item>,
    pub clients: SharedStore<Client>,
}

impl AppState {
    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            items: Arc::new(MemoryStore::<Item>::new()),
            clients: Arc::new(MemoryStore::<Client>::new()),
        }
    }
}
