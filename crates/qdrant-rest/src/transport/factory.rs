//! Transport construction.

use std::sync::Arc;

use super::{ConnectionConfig, ReqwestTransport, Transport};
use crate::TRACING_TARGET_TRANSPORT;
use crate::error::Result;

/// Builds transports from connection parameters.
///
/// Implement this trait to plug a different HTTP stack behind
/// [`QdrantClient`](crate::QdrantClient).
pub trait TransportFactory: Send + Sync {
    /// Creates a new, independent transport.
    fn create(&self, config: ConnectionConfig) -> Result<Arc<dyn Transport>>;
}

/// Factory producing [`ReqwestTransport`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransportFactory;

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, config: ConnectionConfig) -> Result<Arc<dyn Transport>> {
        let transport = ReqwestTransport::new(config)?;

        tracing::info!(
            target: TRACING_TARGET_TRANSPORT,
            base_url = %transport.base_url(),
            "Reqwest transport created successfully"
        );

        Ok(Arc::new(transport))
    }
}
