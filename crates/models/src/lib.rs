//! Record shapes served by the resource API.
//!
//! Every shape embeds a [`RecordMeta`] and implements [`Record`], which is the
//! only thing the storage layer needs to know about it.

pub mod record;
pub mod item;
pub mod client;

pub use client::Client;
pub use item::Item;
pub use record::{Record, RecordMeta};
