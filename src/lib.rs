//! Shelf: a terminal client for the Shelf book catalog service.
//!
//! The crate is layered: [`traits`] defines the transport abstraction,
//! [`adapters`] provides the real and mock transports, [`api`] speaks the
//! backend protocol, [`session`] persists the auth token, [`app`] holds all
//! mutable state, and [`ui`] renders it.

pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod session;
pub mod traits;
pub mod ui;
