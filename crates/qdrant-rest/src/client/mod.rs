//! High-level Qdrant REST client.
//!
//! [`QdrantClient`] exposes one method per endpoint. Every method builds the
//! request body, delegates to the configured [`Transport`] and returns the
//! decoded response unchanged. Failures from the transport are propagated
//! as-is.

mod collections;
mod points;
mod search;

use std::sync::Arc;

use serde::Serialize;

use crate::TRACING_TARGET_CLIENT;
use crate::error::Result;
use crate::transport::{
    ApiResponse, ConnectionConfig, ReqwestTransportFactory, Request, Transport, TransportFactory,
};

/// Typed client for the Qdrant REST API.
///
/// Cloning is cheap; clones share the same transport.
///
/// # Examples
///
/// ```rust,ignore
/// use qdrant_rest::{ConnectionConfig, Distance, QdrantClient};
///
/// let client = QdrantClient::new(ConnectionConfig::default())?;
/// client.create_collection("docs", 384, Distance::Cosine).await?;
/// let collections = client.list_collections().await?;
/// ```
#[derive(Clone)]
pub struct QdrantClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for QdrantClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QdrantClient").finish_non_exhaustive()
    }
}

impl QdrantClient {
    /// Creates a client backed by a reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns a network error if the transport cannot be initialized.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        Self::with_factory(&ReqwestTransportFactory, config)
    }

    /// Creates a client with a transport built by `factory`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the factory reports.
    pub fn with_factory<F>(factory: &F, config: ConnectionConfig) -> Result<Self>
    where
        F: TransportFactory + ?Sized,
    {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            host = %config.host,
            port = config.port,
            scheme = %config.scheme,
            "Creating Qdrant client"
        );

        let transport = factory.create(config)?;
        Ok(Self { transport })
    }

    /// Creates a client around an existing transport.
    pub fn from_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Creates a client around a shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Gets the underlying transport.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Sends a request as-is.
    pub async fn send(&self, request: Request) -> Result<ApiResponse> {
        self.transport.request(request).await
    }

    /// Encodes `body` and sends it with `request`.
    async fn send_json<B>(&self, request: Request, body: &B) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let request = request.json(body)?;
        self.send(request).await
    }
}

/// Path segments of a collection, followed by `suffix`.
fn collection_path(name: &str, suffix: &[&str]) -> Vec<String> {
    ["collections", name]
        .iter()
        .chain(suffix)
        .map(|segment| (*segment).to_owned())
        .collect()
}

/// Path segments below a collection's `points` resource.
fn points_path(collection: &str, suffix: &[&str]) -> Vec<String> {
    let mut segments = collection_path(collection, &["points"]);
    segments.extend(suffix.iter().map(|segment| (*segment).to_owned()));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::transport::mock::MockTransport;

    struct FailingFactory;

    impl TransportFactory for FailingFactory {
        fn create(&self, _config: ConnectionConfig) -> Result<Arc<dyn Transport>> {
            Err(Error::network().with_message("no transport"))
        }
    }

    #[test]
    fn test_paths() {
        assert_eq!(collection_path("c", &[]), vec!["collections", "c"]);
        assert_eq!(collection_path("c", &["exists"]), vec!["collections", "c", "exists"]);
        assert_eq!(points_path("c", &[]), vec!["collections", "c", "points"]);
        assert_eq!(
            points_path("c", &["search", "batch"]),
            vec!["collections", "c", "points", "search", "batch"]
        );
    }

    #[test]
    fn test_names_stay_single_segments() {
        assert_eq!(
            collection_path("prod#old", &["index", "a/b"]),
            vec!["collections", "prod#old", "index", "a/b"]
        );
        assert_eq!(points_path("../x", &[]), vec!["collections", "../x", "points"]);
    }

    #[test]
    fn test_default_client() {
        assert!(QdrantClient::new(ConnectionConfig::default()).is_ok());
    }

    #[test]
    fn test_factory_error_propagates() {
        let error = QdrantClient::with_factory(&FailingFactory, ConnectionConfig::default())
            .unwrap_err();
        assert!(error.is_network());
        assert_eq!(error.message, "no transport");
    }

    #[tokio::test]
    async fn test_send_passes_through() {
        let transport = MockTransport::new();
        transport.push_response(serde_json::json!({"status": "ok", "result": true, "time": 0.5}));

        let client = QdrantClient::from_transport(transport.clone());
        let response = client.send(Request::get(["collections"])).await.unwrap();

        assert_eq!(response.time(), Some(0.5));
        assert_eq!(transport.requests().len(), 1);
    }
}
