//! # catsapi-domain
//!
//! Pure domain model for the cats API.
//!
//! ## Responsibilities
//! - Foundational types: the opaque [`CatId`](id::CatId) and error conventions
//! - Define the **Cat** record and its JSON shape
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod cat;
