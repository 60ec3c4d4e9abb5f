//! # catsapi-adapter-storage-memory
//!
//! Volatile, process-local persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `catsapi-app::ports::storage`
//! - Guard the shared map with a readers-writer lock so concurrent requests
//!   never race on structural mutations
//!
//! ## Dependency rule
//! Depends on `catsapi-app` (for port traits) and `catsapi-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod cat_repo;
mod error;

pub use cat_repo::InMemoryCatRepository;
pub use error::StorageError;
