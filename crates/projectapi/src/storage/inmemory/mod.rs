//! In-memory storage backend.
//!
//! Rows live in a `HashMap` keyed by `(partition_key, row_key)` behind an
//! `Arc<RwLock<_>>`. Nothing is persisted; data is lost when the
//! repository is dropped. Useful for local development and tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use projectapi::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
