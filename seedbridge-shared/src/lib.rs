//! # Seedbridge Shared Library
//!
//! This crate contains the database operations and document shapes shared by
//! the seedbridge task runner and its test suites.
//!
//! ## Module Organization
//!
//! - `db`: Database reset/seed operations against MongoDB
//! - `models`: Seeded document shapes

pub mod db;
pub mod models;

/// Current version of the seedbridge shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
