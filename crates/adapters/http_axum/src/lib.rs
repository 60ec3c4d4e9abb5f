//! # catsapi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON cats API** (`/cats`, `/cats/{id}`, mirrored under `/api`)
//! - Serve a small HTML home page and, optionally, static API docs
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses through a single tagged
//!   response type
//!
//! ## Dependency rule
//! Depends on `catsapi-app` (for port traits and services) and `catsapi-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod home;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
