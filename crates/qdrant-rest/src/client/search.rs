//! Query endpoints: scroll, count, search, recommend and batch search.

use super::{QdrantClient, points_path};
use crate::TRACING_TARGET_SEARCH;
use crate::error::Result;
use crate::transport::{ApiResponse, Request};
use crate::types::{
    CountRequest, Filter, RecommendRequest, ScrollRequest, SearchBatchRequest, SearchRequest,
};

impl QdrantClient {
    /// Pages through the points of a collection.
    ///
    /// `POST /collections/{collection}/points/scroll`
    pub async fn scroll(&self, collection: &str, body: &ScrollRequest) -> Result<ApiResponse> {
        self.send_json(Request::post(points_path(collection, &["scroll"])), body)
            .await
    }

    /// Counts points, optionally restricted by `filter`.
    ///
    /// Without a filter no body is passed to the transport.
    ///
    /// `POST /collections/{collection}/points/count`
    pub async fn count_points(
        &self,
        collection: &str,
        filter: Option<Filter>,
    ) -> Result<ApiResponse> {
        let request = Request::post(points_path(collection, &["count"]));
        match filter {
            Some(filter) => self.send_json(request, &CountRequest { filter }).await,
            None => self.send(request).await,
        }
    }

    /// Finds the nearest neighbours of a vector.
    ///
    /// `POST /collections/{collection}/points/search`
    pub async fn search(&self, collection: &str, body: &SearchRequest) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_SEARCH,
            collection,
            dimensions = body.vector.len(),
            limit = body.limit,
            filtered = body.filter.is_some(),
            "Searching points"
        );

        self.send_json(Request::post(points_path(collection, &["search"])), body)
            .await
    }

    /// Recommends points similar to the positive and unlike the negative
    /// examples.
    ///
    /// `POST /collections/{collection}/points/recommend`
    pub async fn recommend(
        &self,
        collection: &str,
        body: &RecommendRequest,
    ) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_SEARCH,
            collection,
            positive = body.positive.len(),
            negative = body.negative.len(),
            limit = body.limit,
            "Recommending points"
        );

        self.send_json(Request::post(points_path(collection, &["recommend"])), body)
            .await
    }

    /// Runs several searches in one request.
    ///
    /// `POST /collections/{collection}/points/search/batch`
    pub async fn search_batch(
        &self,
        collection: &str,
        searches: Vec<SearchRequest>,
    ) -> Result<ApiResponse> {
        tracing::debug!(
            target: TRACING_TARGET_SEARCH,
            collection,
            searches = searches.len(),
            "Running batch search"
        );

        let body = SearchBatchRequest { searches };
        self.send_json(Request::post(points_path(collection, &["search", "batch"])), &body)
            .await
    }
}
