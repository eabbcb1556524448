//! Storage abstractions for the service layer
//!
//! `Store` is the contract HTTP handlers depend on; `MemoryStore` is the
//! process-lifetime implementation backing every resource collection.

pub mod memory_store;
pub mod store;

pub use memory_store::MemoryStore;
pub use store::Store;
