//! Decoded Qdrant response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Decoded JSON object returned by the Qdrant REST API.
///
/// Qdrant wraps every response in a `{status, result?, time}` envelope. The
/// object is kept as decoded; accessors read the well-known fields without
/// transforming anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(Map<String, Value>);

impl ApiResponse {
    /// Wraps a decoded JSON object.
    pub fn new(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// Decodes a response body, which must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body is not valid JSON or is not
    /// an object.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            Error::serialization()
                .with_message(format!("Failed to decode response body: {e}"))
                .with_source(e)
        })?;

        Self::try_from(value)
    }

    /// Returns the `status` field.
    pub fn status(&self) -> Option<&Value> {
        self.0.get("status")
    }

    /// Returns `true` if `status` is the string `"ok"`.
    pub fn is_ok(&self) -> bool {
        self.status().and_then(Value::as_str) == Some("ok")
    }

    /// Returns the `result` field.
    pub fn result(&self) -> Option<&Value> {
        self.0.get("result")
    }

    /// Returns the server-side processing time in seconds.
    pub fn time(&self) -> Option<f64> {
        self.0.get("time").and_then(Value::as_f64)
    }

    /// Deserializes the `result` field into `T`.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if `result` is missing or does not
    /// match `T`.
    pub fn parse_result<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self.result().cloned().ok_or_else(|| {
            Error::serialization().with_message("Response does not contain a 'result' field")
        })?;

        serde_json::from_value(result).map_err(Error::from)
    }

    /// Returns the underlying JSON object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the response and returns the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for ApiResponse {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self(object)),
            other => Err(Error::serialization()
                .with_message("Expected a JSON object in the response body")
                .with_response(other)),
        }
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        Value::Object(response.0)
    }
}

impl std::ops::Index<&str> for ApiResponse {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        &self.0[key]
    }
}
