//! Collection management endpoints.

use super::{QdrantClient, collection_path};
use crate::TRACING_TARGET_COLLECTIONS;
use crate::error::Result;
use crate::transport::{ApiResponse, Request};
use crate::types::{
    CreateCollection, CreateFieldIndex, Distance, PayloadSchemaType, UpdateCollection,
};

impl QdrantClient {
    /// Creates a collection with the given vector size and distance metric.
    ///
    /// `PUT /collections/{name}`
    pub async fn create_collection(
        &self,
        name: &str,
        size: u64,
        distance: Distance,
    ) -> Result<ApiResponse> {
        self.create_collection_with(name, &CreateCollection::new(size, distance))
            .await
    }

    /// Creates a collection from a full body, including optional HNSW and
    /// quantization settings.
    ///
    /// `PUT /collections/{name}`
    pub async fn create_collection_with(
        &self,
        name: &str,
        body: &CreateCollection,
    ) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_COLLECTIONS,
            collection = name,
            size = body.vectors.size,
            distance = %body.vectors.distance,
            "Creating collection"
        );

        self.send_json(Request::put(collection_path(name, &[])), body)
            .await
    }

    /// `GET /collections/{name}`
    pub async fn get_collection(&self, name: &str) -> Result<ApiResponse> {
        self.send(Request::get(collection_path(name, &[]))).await
    }

    /// `DELETE /collections/{name}`
    pub async fn delete_collection(&self, name: &str) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_COLLECTIONS,
            collection = name,
            "Deleting collection"
        );

        self.send(Request::delete(collection_path(name, &[]))).await
    }

    /// `GET /collections`
    pub async fn list_collections(&self) -> Result<ApiResponse> {
        self.send(Request::get(["collections"])).await
    }

    /// `GET /collections/{name}/exists`
    pub async fn collection_exists(&self, name: &str) -> Result<ApiResponse> {
        self.send(Request::get(collection_path(name, &["exists"])))
            .await
    }

    /// Updates index and optimizer parameters of an existing collection.
    ///
    /// `PATCH /collections/{name}`
    pub async fn update_collection(
        &self,
        name: &str,
        body: &UpdateCollection,
    ) -> Result<ApiResponse> {
        self.send_json(Request::patch(collection_path(name, &[])), body)
            .await
    }

    /// Creates an index on a payload field.
    ///
    /// `PUT /collections/{collection}/index`
    pub async fn create_payload_index(
        &self,
        collection: &str,
        field_name: &str,
        field_schema: PayloadSchemaType,
    ) -> Result<ApiResponse> {
        let body = CreateFieldIndex {
            field_name: field_name.to_owned(),
            field_schema,
        };

        self.send_json(
            Request::put(collection_path(collection, &["index"])),
            &body,
        )
        .await
    }

    /// `DELETE /collections/{collection}/index/{field_name}`
    pub async fn delete_payload_index(
        &self,
        collection: &str,
        field_name: &str,
    ) -> Result<ApiResponse> {
        self.send(Request::delete(collection_path(
            collection,
            &["index", field_name],
        )))
        .await
    }
}
