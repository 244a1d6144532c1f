//! Transport request type.

use bytes::Bytes;
use serde::Serialize;
use strum::{AsRefStr, Display, IntoStaticStr};

use crate::error::{Error, Result};

/// HTTP methods used by the Qdrant REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Returns `true` if requests with this method always carry a body.
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the Qdrant REST API.
///
/// The path is kept as unescaped segments; the transport escapes each one
/// when it builds the URL, so names containing `/`, `?` or `#` address the
/// resource they name. The body is kept as already-encoded JSON so that it
/// is sent exactly as serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Unescaped path segments appended to the transport's base URL.
    pub segments: Vec<String>,
    /// JSON-encoded body, if any.
    pub body: Option<Bytes>,
}

impl Request {
    /// Creates a request without a body.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Get, segments)
    }

    /// Creates a POST request.
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Post, segments)
    }

    /// Creates a PUT request.
    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Put, segments)
    }

    /// Creates a PATCH request.
    pub fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Patch, segments)
    }

    /// Creates a DELETE request.
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::Delete, segments)
    }

    /// Returns the segments joined with `/`, without escaping.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Encodes `body` as JSON and attaches it to the request.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the body cannot be encoded.
    pub fn json<B>(mut self, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        let encoded = serde_json::to_vec(body).map_err(|e| {
            Error::serialization()
                .with_message(format!("Failed to encode request body: {e}"))
                .with_source(e)
        })?;

        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    /// Decodes the attached body back into a JSON value.
    ///
    /// # Panics
    ///
    /// Panics if the attached body is not valid JSON.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body.as_ref().map(|body| {
            serde_json::from_slice(body).expect("request body must be valid JSON")
        })
    }
}
