//! Document models for seedbridge
//!
//! This module contains the shapes of the documents the bridge writes into
//! the application database.
//!
//! # Models
//!
//! - `user`: The seeded user document

pub mod user;

pub use user::SeedUser;
