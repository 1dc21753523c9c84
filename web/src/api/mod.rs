//! Thin client for the platform GraphQL API. Server functions call through
//! here; nothing in this module is compiled into the WASM bundle except the
//! envelope types, which stay testable without a network.

pub mod envelope;

#[cfg(feature = "ssr")]
pub mod client;
#[cfg(feature = "ssr")]
pub mod queries;

#[cfg(feature = "ssr")]
pub use client::{graphql, ApiError};
