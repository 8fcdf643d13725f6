//! Storedash Admin library.
//!
//! The data layer of the Storedash admin dashboard:
//! - [`normalize`] maps loosely-shaped API and mock records onto canonical models
//! - [`components`] describes tables, with client-side search and sort
//! - [`state`] and [`pages`] hold application and per-page state
//! - [`api`] and [`insights`] talk to the dashboard API and the AI endpoint
//!
//! Rendering is left to the front end; see the `storedash-cli` crate for a
//! terminal one.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod helpers;
pub mod insights;
pub mod models;
pub mod normalize;
pub mod pages;
pub mod state;

pub use config::DashboardConfig;
pub use error::AppError;
