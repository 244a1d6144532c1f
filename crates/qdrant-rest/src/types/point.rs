//! Point and payload types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Arbitrary key-value metadata attached to a point.
pub type Payload = Map<String, Value>;

/// Point identifier: an unsigned integer or a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(Uuid),
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Uuid(uuid) => write!(f, "{uuid}"),
        }
    }
}

impl From<u64> for PointId {
    fn from(id: u64) -> Self {
        Self::Num(id)
    }
}

impl From<Uuid> for PointId {
    fn from(id: Uuid) -> Self {
        Self::Uuid(id)
    }
}

/// Vector data of a point: a single dense vector or named vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vectors {
    Dense(Vec<f32>),
    Named(BTreeMap<String, Vec<f32>>),
}

impl From<Vec<f32>> for Vectors {
    fn from(vector: Vec<f32>) -> Self {
        Self::Dense(vector)
    }
}

impl From<BTreeMap<String, Vec<f32>>> for Vectors {
    fn from(vectors: BTreeMap<String, Vec<f32>>) -> Self {
        Self::Named(vectors)
    }
}

/// A point to upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStruct {
    /// Point identifier.
    pub id: PointId,
    /// Vector data.
    pub vector: Vectors,
    /// Optional payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl PointStruct {
    /// Creates a point without payload.
    pub fn new(id: impl Into<PointId>, vector: impl Into<Vectors>) -> Self {
        Self {
            id: id.into(),
            vector: vector.into(),
            payload: None,
        }
    }

    /// Set the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Body of `PUT /collections/{c}/points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertPoints {
    pub points: Vec<PointStruct>,
}

/// Body of `POST /collections/{c}/points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPoints {
    pub ids: Vec<PointId>,
    pub with_payload: bool,
    pub with_vector: bool,
}

impl GetPoints {
    /// Creates a body with payloads and without vectors.
    pub fn new(ids: impl IntoIterator<Item = PointId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            with_payload: true,
            with_vector: false,
        }
    }
}

/// Body of `POST /collections/{c}/points/delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePoints {
    pub points: Vec<PointId>,
}

/// Body of `POST /collections/{c}/points/payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPayload {
    pub payload: Payload,
    pub points: Vec<PointId>,
}

/// Body of `POST /collections/{c}/points/payload/delete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeletePayload {
    pub keys: Vec<String>,
    pub points: Vec<PointId>,
}

/// Body of `POST /collections/{c}/points/payload/clear`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearPayload {
    pub points: Vec<PointId>,
}
