//! Holocron Core - Shared types library.
//!
//! This crate provides common types used across all Holocron components:
//! - `api` - The public catalog and favorites HTTP service
//! - `cli` - Command-line tools for schema bootstrap and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
