//! Durable state for selections and payment flags.
//!
//! A tiny key-value seam ([`StateStore`]) with two backends, plus the
//! selection map that rides on top of it. Writes are best effort by policy:
//! a failed write is logged and the session continues from memory.

pub mod backend;
pub mod error;
pub mod keys;
pub mod selection;

pub use backend::{JsonFileStore, MemoryStore, StateStore};
pub use error::StoreError;
pub use selection::SelectionStore;
