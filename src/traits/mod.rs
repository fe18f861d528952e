//! Trait abstractions for external dependencies.
//!
//! These traits decouple the API client from concrete transports so tests
//! can substitute mock implementations.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
