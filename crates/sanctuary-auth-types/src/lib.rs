//! Session types shared across Sanctuary crates.
//!
//! Provides session-token validation, cookie builders, and the session
//! extractors used by handlers.

pub mod cookie;
pub mod session;
pub mod token;
