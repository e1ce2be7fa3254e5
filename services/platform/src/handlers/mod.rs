pub mod account;
pub mod admin;
pub mod community;
pub mod content;
pub mod health;
pub mod message;
pub mod nav;
pub mod page;
pub mod profile;
pub mod public;
pub mod view;
