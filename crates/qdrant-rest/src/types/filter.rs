//! Filter conditions.
//!
//! Filters are interpreted by the server. [`Condition`] offers constructors for
//! the common shapes and wraps any other JSON condition unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::PointId;

/// A single filter condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(pub Value);

impl Condition {
    /// Payload field `key` equals `value`.
    pub fn matches(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self(json!({"key": key.into(), "match": {"value": value.into()}}))
    }

    /// Payload field `key` equals any of `values`.
    pub fn matches_any<V>(key: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        let any: Vec<Value> = values.into_iter().map(Into::into).collect();
        Self(json!({"key": key.into(), "match": {"any": any}}))
    }

    /// Payload field `key` lies within the given bounds.
    pub fn range(key: impl Into<String>, gte: Option<f64>, lte: Option<f64>) -> Self {
        let mut range = serde_json::Map::new();
        if let Some(gte) = gte {
            range.insert("gte".into(), json!(gte));
        }
        if let Some(lte) = lte {
            range.insert("lte".into(), json!(lte));
        }
        Self(json!({"key": key.into(), "range": range}))
    }

    /// Point id is one of `ids`.
    pub fn has_id(ids: impl IntoIterator<Item = PointId>) -> Self {
        let ids: Vec<PointId> = ids.into_iter().collect();
        Self(json!({"has_id": ids}))
    }

    /// Payload field `key` is empty or missing.
    pub fn is_empty(key: impl Into<String>) -> Self {
        Self(json!({"is_empty": {"key": key.into()}}))
    }

    /// Nested filter used as a condition.
    pub fn filter(filter: Filter) -> Self {
        Self(json!(filter))
    }
}

impl From<Value> for Condition {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Condition tree restricting which points a query considers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// All of these must hold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Condition>,
    /// At least one of these must hold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Condition>,
    /// None of these may hold.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Condition>,
}

impl Filter {
    /// Creates a filter whose conditions must all hold.
    pub fn must(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self {
            must: conditions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a filter where at least one condition must hold.
    pub fn should(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self {
            should: conditions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Creates a filter where no condition may hold.
    pub fn must_not(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self {
            must_not: conditions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Adds a `must` condition.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.must.push(condition);
        self
    }

    /// Adds a `should` condition.
    #[must_use]
    pub fn or(mut self, condition: Condition) -> Self {
        self.should.push(condition);
        self
    }

    /// Adds a `must_not` condition.
    #[must_use]
    pub fn not(mut self, condition: Condition) -> Self {
        self.must_not.push(condition);
        self
    }
}
