//! Collection management types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, IntoStaticStr};

/// Similarity function used to rank vectors.
///
/// Sent to the server exactly as named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
pub enum Distance {
    Cosine,
    Dot,
    Euclid,
    Manhattan,
}

/// Dimensionality and metric of a collection's vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorParams {
    /// Number of dimensions.
    pub size: u64,
    /// Distance metric.
    pub distance: Distance,
}

impl VectorParams {
    /// Creates vector parameters.
    pub fn new(size: u64, distance: Distance) -> Self {
        Self { size, distance }
    }
}

/// HNSW index parameters. Unset fields keep the server defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HnswConfigDiff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef_construct: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_scan_threshold: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_indexing_threads: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_disk: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_m: Option<u64>,
}

impl HnswConfigDiff {
    /// Set the number of edges per node.
    #[must_use]
    pub fn with_m(mut self, m: u64) -> Self {
        self.m = Some(m);
        self
    }

    /// Set the number of neighbours considered while building the index.
    #[must_use]
    pub fn with_ef_construct(mut self, ef_construct: u64) -> Self {
        self.ef_construct = Some(ef_construct);
        self
    }

    /// Store the index on disk.
    #[must_use]
    pub fn with_on_disk(mut self, on_disk: bool) -> Self {
        self.on_disk = Some(on_disk);
        self
    }
}

/// Body of `PUT /collections/{name}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCollection {
    /// Vector parameters.
    pub vectors: VectorParams,
    /// HNSW index parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hnsw_config: Option<HnswConfigDiff>,
    /// Quantization parameters, forwarded as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantization_config: Option<Value>,
}

impl CreateCollection {
    /// Creates a body with only the required vector parameters.
    pub fn new(size: u64, distance: Distance) -> Self {
        Self {
            vectors: VectorParams::new(size, distance),
            hnsw_config: None,
            quantization_config: None,
        }
    }

    /// Set the HNSW index parameters.
    #[must_use]
    pub fn with_hnsw_config(mut self, hnsw_config: HnswConfigDiff) -> Self {
        self.hnsw_config = Some(hnsw_config);
        self
    }

    /// Set the quantization parameters.
    #[must_use]
    pub fn with_quantization_config(mut self, quantization_config: Value) -> Self {
        self.quantization_config = Some(quantization_config);
        self
    }
}

/// Body of `PATCH /collections/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hnsw_config: Option<HnswConfigDiff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizers_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Payload field types that can be indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayloadSchemaType {
    Keyword,
    Integer,
    Float,
    Geo,
    Text,
    Bool,
    Datetime,
    Uuid,
}

/// Body of `PUT /collections/{c}/index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFieldIndex {
    /// Payload key to index.
    pub field_name: String,
    /// Type of the indexed values.
    pub field_schema: PayloadSchemaType,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_distance_is_sent_verbatim() {
        for (distance, name) in [
            (Distance::Cosine, "Cosine"),
            (Distance::Dot, "Dot"),
            (Distance::Euclid, "Euclid"),
            (Distance::Manhattan, "Manhattan"),
        ] {
            assert_eq!(serde_json::to_value(distance).unwrap(), json!(name));
            assert_eq!(Distance::from_str(name).unwrap(), distance);
        }
    }

    #[test]
    fn test_create_collection_minimal() {
        let body = CreateCollection::new(4, Distance::Cosine);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"vectors":{"size":4,"distance":"Cosine"}}"#
        );
    }

    #[test]
    fn test_create_collection_with_options() {
        let body = CreateCollection::new(128, Distance::Dot)
            .with_hnsw_config(HnswConfigDiff::default().with_m(16).with_ef_construct(100))
            .with_quantization_config(json!({"scalar": {"type": "int8"}}));

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "vectors": {"size": 128, "distance": "Dot"},
                "hnsw_config": {"m": 16, "ef_construct": 100},
                "quantization_config": {"scalar": {"type": "int8"}}
            })
        );
    }

    #[test]
    fn test_update_collection_empty() {
        let body = UpdateCollection::default();
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_field_index() {
        let body = CreateFieldIndex {
            field_name: "city".into(),
            field_schema: PayloadSchemaType::Keyword,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"field_name": "city", "field_schema": "keyword"})
        );
    }
}
