//! # Quotelist Shared Library
//!
//! This crate contains the data layer shared by the Quotelist API server:
//!
//! - `models`: entity repositories (authors, lists, entries, memberships)
//! - `db`: connection pool and migration utilities

pub mod db;
pub mod models;

/// Current version of the Quotelist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
