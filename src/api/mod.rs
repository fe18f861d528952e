//! Data access layer: typed operations over the Shelf backend's HTTP API.

pub mod client;
pub mod envelope;
pub mod error;

pub use client::{ApiClient, LoginData, LoginRequest, RegisterRequest};
pub use envelope::{error_message, normalize_data, normalize_item, normalize_list};
pub use error::ApiError;
