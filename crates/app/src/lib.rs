//! # catsapi-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CatRepository` — keyed storage for cat records
//!   - `IdGenerator` — source of fresh record identifiers
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CatService` — create, list, get, delete
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the random and sequential identifier generators)
//!
//! ## Dependency rule
//! Depends on `catsapi-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod id_generator;
pub mod ports;
pub mod services;
