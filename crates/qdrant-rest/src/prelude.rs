//! Convenience re-exports for common types and traits.

pub use crate::client::QdrantClient;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::transport::{
    ApiResponse, ConnectionConfig, Method, Request, Scheme, Transport, TransportFactory,
};
pub use crate::types::{
    Condition, CreateCollection, Distance, Filter, GetPoints, HnswConfigDiff, Payload, PointId,
    PointStruct, RecommendRequest, ScrollRequest, SearchRequest, Vectors,
};
