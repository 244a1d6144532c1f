//! Query request bodies: scroll, count, search, recommend.
//!
//! `with_payload` and `with_vector` are always sent, even at their defaults.
//! `filter`, `offset` and `score_threshold` are only sent when set.

use serde::{Deserialize, Serialize};

use super::{Filter, PointId};

/// Default page size for scroll requests.
pub const DEFAULT_SCROLL_LIMIT: u64 = 100;

/// Default number of hits for search and recommend requests.
pub const DEFAULT_SEARCH_LIMIT: u64 = 10;

/// Body of `POST /collections/{c}/points/scroll`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<PointId>,
    pub with_payload: bool,
    pub with_vector: bool,
}

impl Default for ScrollRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SCROLL_LIMIT,
            filter: None,
            offset: None,
            with_payload: true,
            with_vector: false,
        }
    }
}

impl ScrollRequest {
    /// Set the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Continue from the given point id, usually the previous page's
    /// `next_page_offset`.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<PointId>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Include or exclude payloads.
    #[must_use]
    pub fn with_payload(mut self, with_payload: bool) -> Self {
        self.with_payload = with_payload;
        self
    }

    /// Include or exclude vectors.
    #[must_use]
    pub fn with_vector(mut self, with_vector: bool) -> Self {
        self.with_vector = with_vector;
        self
    }
}

/// Body of `POST /collections/{c}/points/count`.
///
/// Only sent when a filter is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountRequest {
    pub filter: Filter,
}

/// Body of `POST /collections/{c}/points/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub vector: Vec<f32>,
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    pub with_payload: bool,
    pub with_vector: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f32>,
}

impl SearchRequest {
    /// Creates a search for the nearest neighbours of `vector`.
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            limit: DEFAULT_SEARCH_LIMIT,
            filter: None,
            with_payload: true,
            with_vector: false,
            score_threshold: None,
        }
    }

    /// Set the maximum number of hits.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Include or exclude payloads.
    #[must_use]
    pub fn with_payload(mut self, with_payload: bool) -> Self {
        self.with_payload = with_payload;
        self
    }

    /// Include or exclude vectors.
    #[must_use]
    pub fn with_vector(mut self, with_vector: bool) -> Self {
        self.with_vector = with_vector;
        self
    }

    /// Drop hits scoring below `score_threshold`.
    #[must_use]
    pub fn with_score_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = Some(score_threshold);
        self
    }
}

/// Body of `POST /collections/{c}/points/recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub positive: Vec<PointId>,
    pub negative: Vec<PointId>,
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    pub with_payload: bool,
    pub with_vector: bool,
}

impl RecommendRequest {
    /// Creates a recommendation from positive examples.
    pub fn new(positive: impl IntoIterator<Item = PointId>) -> Self {
        Self {
            positive: positive.into_iter().collect(),
            negative: Vec::new(),
            limit: DEFAULT_SEARCH_LIMIT,
            filter: None,
            with_payload: true,
            with_vector: false,
        }
    }

    /// Set the negative examples.
    #[must_use]
    pub fn with_negative(mut self, negative: impl IntoIterator<Item = PointId>) -> Self {
        self.negative = negative.into_iter().collect();
        self
    }

    /// Set the maximum number of hits.
    #[must_use]
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Include or exclude payloads.
    #[must_use]
    pub fn with_payload(mut self, with_payload: bool) -> Self {
        self.with_payload = with_payload;
        self
    }

    /// Include or exclude vectors.
    #[must_use]
    pub fn with_vector(mut self, with_vector: bool) -> Self {
        self.with_vector = with_vector;
        self
    }
}

/// Body of `POST /collections/{c}/points/search/batch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchBatchRequest {
    pub searches: Vec<SearchRequest>,
}
