#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client construction.
pub const TRACING_TARGET_CLIENT: &str = "qdrant_rest::client";

/// Tracing target for HTTP transport operations.
///
/// Use this target for request/response logging and transport failures.
pub const TRACING_TARGET_TRANSPORT: &str = "qdrant_rest::transport";

/// Tracing target for collection management operations.
pub const TRACING_TARGET_COLLECTIONS: &str = "qdrant_rest::collections";

/// Tracing target for point and payload operations.
pub const TRACING_TARGET_POINTS: &str = "qdrant_rest::points";

/// Tracing target for scroll, search and recommend operations.
pub const TRACING_TARGET_SEARCH: &str = "qdrant_rest::search";

mod client;
mod error;
#[doc(hidden)]
pub mod prelude;
pub mod transport;
pub mod types;

pub use client::QdrantClient;
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use transport::{ApiResponse, ConnectionConfig, Scheme};
pub use types::{
    Condition, Distance, Filter, Payload, PointId, PointStruct, RecommendRequest, ScrollRequest,
    SearchRequest,
};
