//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatsError`]
//! via `#[from]` (or a manual `From` impl for boxed storage sources).

/// Base error returned by application services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum CatsError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("already exists")]
    AlreadyExists(#[from] AlreadyExistsError),

    /// The identifier generator kept producing keys that were already taken.
    #[error("no free identifier after {attempts} attempts")]
    IdentifiersExhausted { attempts: usize },

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// An explicit identifier collided with a stored record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} already exists")]
pub struct AlreadyExistsError {
    pub entity: &'static str,
    pub id: String,
}
