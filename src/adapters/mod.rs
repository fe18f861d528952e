//! Concrete implementations of trait abstractions.
//!
//! Production adapters implement the traits defined in `crate::traits`;
//! the [`mock`] submodule provides test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse, RecordedRequest};
pub use reqwest_http::ReqwestHttpClient;
