//! Request bodies for the Qdrant REST API.
//!
//! Optional fields are `Option`s that are left off the wire when `None`.

mod collection;
mod filter;
mod point;
mod search;

pub use collection::{
    CreateCollection, CreateFieldIndex, Distance, HnswConfigDiff, PayloadSchemaType,
    UpdateCollection, VectorParams,
};
pub use filter::{Condition, Filter};
pub use point::{
    ClearPayload, DeletePayload, DeletePoints, GetPoints, Payload, PointId, PointStruct,
    SetPayload, UpsertPoints, Vectors,
};
pub use search::{
    CountRequest, DEFAULT_SCROLL_LIMIT, DEFAULT_SEARCH_LIMIT, RecommendRequest, ScrollRequest,
    SearchBatchRequest, SearchRequest,
};
