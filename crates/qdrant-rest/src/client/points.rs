//! Point and payload endpoints.

use super::{QdrantClient, points_path};
use crate::TRACING_TARGET_POINTS;
use crate::error::Result;
use crate::transport::{ApiResponse, Request};
use crate::types::{
    ClearPayload, DeletePayload, DeletePoints, GetPoints, Payload, PointId, PointStruct,
    SetPayload, UpsertPoints,
};

impl QdrantClient {
    /// Inserts or replaces points.
    ///
    /// `PUT /collections/{collection}/points`
    pub async fn upsert_points(
        &self,
        collection: &str,
        points: Vec<PointStruct>,
    ) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_POINTS,
            collection,
            count = points.len(),
            "Upserting points"
        );

        let body = UpsertPoints { points };
        self.send_json(Request::put(points_path(collection, &[])), &body)
            .await
    }

    /// `GET /collections/{collection}/points/{id}`
    pub async fn get_point(&self, collection: &str, id: impl Into<PointId>) -> Result<ApiResponse> {
        let id = id.into().to_string();
        self.send(Request::get(points_path(collection, &[id.as_str()])))
            .await
    }

    /// Retrieves several points by id.
    ///
    /// `POST /collections/{collection}/points`
    pub async fn get_points(&self, collection: &str, body: &GetPoints) -> Result<ApiResponse> {
        self.send_json(Request::post(points_path(collection, &[])), body)
            .await
    }

    /// `POST /collections/{collection}/points/delete`
    pub async fn delete_points(
        &self,
        collection: &str,
        ids: impl IntoIterator<Item = PointId>,
    ) -> Result<ApiResponse> {
        let body = DeletePoints {
            points: ids.into_iter().collect(),
        };

        tracing::debug!(
            target: TRACING_TARGET_POINTS,
            collection,
            count = body.points.len(),
            "Deleting points"
        );

        self.send_json(Request::post(points_path(collection, &["delete"])), &body)
            .await
    }

    /// Merges `payload` into the payload of every listed point.
    ///
    /// `POST /collections/{collection}/points/payload`
    pub async fn set_payload(
        &self,
        collection: &str,
        payload: Payload,
        ids: impl IntoIterator<Item = PointId>,
    ) -> Result<ApiResponse> {
        let body = SetPayload {
            payload,
            points: ids.into_iter().collect(),
        };

        self.send_json(Request::post(points_path(collection, &["payload"])), &body)
            .await
    }

    /// Removes payload `keys` from every listed point.
    ///
    /// `POST /collections/{collection}/points/payload/delete`
    pub async fn delete_payload<K>(
        &self,
        collection: &str,
        keys: impl IntoIterator<Item = K>,
        ids: impl IntoIterator<Item = PointId>,
    ) -> Result<ApiResponse>
    where
        K: Into<String>,
    {
        let body = DeletePayload {
            keys: keys.into_iter().map(Into::into).collect(),
            points: ids.into_iter().collect(),
        };

        self.send_json(
            Request::post(points_path(collection, &["payload", "delete"])),
            &body,
        )
        .await
    }

    /// Removes the whole payload of every listed point.
    ///
    /// `POST /collections/{collection}/points/payload/clear`
    pub async fn clear_payload(
        &self,
        collection: &str,
        ids: impl IntoIterator<Item = PointId>,
    ) -> Result<ApiResponse> {
        let body = ClearPayload {
            points: ids.into_iter().collect(),
        };

        self.send_json(
            Request::post(points_path(collection, &["payload", "clear"])),
            &body,
        )
        .await
    }
}
