//! Storedash Core - Shared types library.
//!
//! This crate provides common types used across all Storedash components:
//! - `admin` - Normalizer, table views, page state and API clients
//! - `cli` - Command-line front end for listings and insights
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
