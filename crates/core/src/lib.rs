//! CourseHub Core - Shared types library.
//!
//! This crate provides common types used across all CourseHub components:
//! - `server` - The web application (catalog, auth, purchases, admin)
//! - `cli` - Command-line tools for store management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no store access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
