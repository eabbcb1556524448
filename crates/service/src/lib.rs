//! Service layer: generic keyed storage for record shapes defined in `models`.
//! - `identity` assigns ids and timestamps without knowing the concrete shape.
//! - `storage` holds the store contract and its in-memory implementation.

pub mod errors;
pub mod identity;
pub mod storage;
