//! HTTP transport layer.
//!
//! A [`Transport`] performs exactly one HTTP round trip per call and
//! normalizes every failure into the crate's [`Error`](crate::Error). The
//! [`TransportFactory`] decouples the [`QdrantClient`](crate::QdrantClient)
//! from any specific implementation.

mod config;
mod factory;
#[cfg(any(test, feature = "test-utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;
mod reqwest;
mod request;
mod response;

use async_trait::async_trait;

pub use self::config::{
    ConnectionConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, Scheme,
};
pub use self::factory::{ReqwestTransportFactory, TransportFactory};
pub use self::reqwest::ReqwestTransport;
pub use self::request::{Method, Request};
pub use self::response::ApiResponse;
use crate::error::Result;

/// Core trait for executing requests against a Qdrant server.
///
/// Implementations must attempt each request at most once.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Executes a single request and returns the decoded JSON object.
    async fn request(&self, request: Request) -> Result<ApiResponse>;
}
