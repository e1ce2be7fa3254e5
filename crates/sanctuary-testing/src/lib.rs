//! Test utilities for Sanctuary services.
//!
//! Provides `MockSession` for signed session cookies and row builders for
//! sea-orm's `MockDatabase`. Import from dev-dependencies only.

pub mod rows;
pub mod session;
