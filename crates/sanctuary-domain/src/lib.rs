//! Domain types shared across Sanctuary crates.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod admin_role;
pub mod content;
pub mod id;
pub mod journey;
pub mod pagination;
