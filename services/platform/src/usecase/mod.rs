pub mod access;
pub mod account;
pub mod admin;
pub mod community;
pub mod content;
pub mod message;
pub mod profile;
