//! HTTP collaborator for the dashboard API.
//!
//! [`ApiClient`] performs calls and folds every outcome into an
//! [`ApiResponse`] envelope; [`ApiMethods`] names the endpoints; and
//! [`parse_api_response`] runs a payload through the normalizer. The
//! [`mock`] module holds the built-in sample data used offline.

mod client;
mod envelope;
mod error;
mod methods;
pub mod mock;
mod types;

pub use client::ApiClient;
pub use envelope::{DataKind, ParseDataKindError, ParsedData, ParsedResponse, parse_api_response};
pub use error::ApiError;
pub use methods::ApiMethods;
pub use types::{ApiRequest, ApiResponse, HttpMethod};
