//! Reqwest-based transport.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use url::Url;

use super::{ApiResponse, ConnectionConfig, Request, Transport};
use crate::TRACING_TARGET_TRANSPORT;
use crate::error::{Error, Result};

/// Header carrying the Qdrant API key.
pub(crate) const API_KEY_HEADER: &str = "api-key";

/// Body sent for POST/PUT/PATCH requests that have none.
const EMPTY_OBJECT: &[u8] = b"{}";

/// Inner transport that holds the HTTP client and configuration.
struct ReqwestTransportInner {
    http: Client,
    base_url: Url,
    config: ConnectionConfig,
}

/// Reqwest-based [`Transport`] for the Qdrant REST API.
///
/// Cloning is cheap and clones share the same connection pool.
///
/// # Examples
///
/// ```rust,ignore
/// use qdrant_rest::transport::{ConnectionConfig, ReqwestTransport, Request, Transport};
///
/// let transport = ReqwestTransport::new(ConnectionConfig::default())?;
/// let response = transport.request(Request::get(["collections"])).await?;
/// ```
#[derive(Clone)]
pub struct ReqwestTransport {
    inner: Arc<ReqwestTransportInner>,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.inner.base_url.as_str())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Creates a new transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a network error if the base URL is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let timeout = config.effective_timeout();
        let user_agent = config.effective_user_agent();

        tracing::debug!(
            target: TRACING_TARGET_TRANSPORT,
            base_url = %base_url,
            timeout_ms = timeout.as_millis(),
            has_api_key = config.api_key.is_some(),
            "Creating reqwest transport"
        );

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .default_headers(Self::default_headers(&config)?)
            .build()
            .map_err(|e| {
                Error::network()
                    .with_message("Failed to initialize HTTP client")
                    .with_source(e)
            })?;

        let inner = ReqwestTransportInner {
            http,
            base_url,
            config,
        };

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Gets the transport configuration.
    pub fn config(&self) -> &ConnectionConfig {
        &self.inner.config
    }

    /// Gets the base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Headers sent on every request.
    fn default_headers(config: &ConnectionConfig) -> Result<HeaderMap> {
        let json = HeaderValue::from_static("application/json");

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, json.clone());
        headers.insert(ACCEPT, json);

        if let Some(api_key) = config.api_key.as_deref() {
            let mut value = HeaderValue::from_str(api_key).map_err(|e| {
                Error::network()
                    .with_message("API key contains characters not allowed in a header")
                    .with_source(e)
            })?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        Ok(headers)
    }

    /// Appends the escaped path segments to the base URL.
    ///
    /// `.` and `..` are rejected: URL normalization would resolve them to a
    /// different resource.
    fn endpoint(&self, segments: &[String]) -> Result<Url> {
        if let Some(segment) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(Error::network()
                .with_message(format!("Path segment '{segment}' cannot be addressed")));
        }

        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::network().with_message("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

/// Maps a received status code and body onto a response or an error.
pub(crate) fn decode_response(status_code: u16, body: &[u8]) -> Result<ApiResponse> {
    if status_code < 400 {
        return ApiResponse::from_slice(body);
    }

    let mut error = Error::http(status_code);
    if let Ok(decoded) = serde_json::from_slice::<serde_json::Value>(body) {
        error = error.with_response(decoded);
    }

    let message = match error.api_error() {
        Some(detail) => format!("Qdrant API error (HTTP {status_code}): {detail}"),
        None => format!("Qdrant API error (HTTP {status_code})"),
    };

    Err(error.with_message(message))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, request: Request) -> Result<ApiResponse> {
        let started_at = Instant::now();
        let url = self.endpoint(&request.segments)?;
        let path = url.path().to_owned();

        tracing::debug!(
            target: TRACING_TARGET_TRANSPORT,
            method = %request.method,
            path = %path,
            has_body = request.body.is_some(),
            "Sending Qdrant request"
        );

        let mut http_request = self.inner.http.request(request.method.into(), url);
        if request.method.has_body() {
            let body = request
                .body
                .unwrap_or_else(|| Bytes::from_static(EMPTY_OBJECT));
            http_request = http_request.body(body);
        }

        let result = async {
            let http_response = http_request.send().await?;
            let status_code = http_response.status().as_u16();
            let body = http_response.bytes().await?;
            Ok::<_, Error>((status_code, body))
        }
        .await
        .and_then(|(status_code, body)| decode_response(status_code, &body));

        let elapsed = started_at.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!(
                    target: TRACING_TARGET_TRANSPORT,
                    method = %request.method,
                    path = %path,
                    elapsed_ms = elapsed.as_millis(),
                    server_time = response.time(),
                    "Qdrant request completed"
                );
            }
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET_TRANSPORT,
                    method = %request.method,
                    path = %path,
                    elapsed_ms = elapsed.as_millis(),
                    kind = error.kind_str(),
                    status_code = error.status_code(),
                    error = %error,
                    "Qdrant request failed"
                );
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::Router;
    use axum::body::Bytes as AxumBytes;
    use axum::http::{HeaderMap as AxumHeaderMap, Method as AxumMethod, StatusCode, Uri};
    use axum::response::IntoResponse;
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::transport::Method;

    /// What the test server saw for the last request.
    #[derive(Debug, Clone, Default)]
    struct Captured {
        method: String,
        path: String,
        query: Option<String>,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    }

    impl Captured {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        }
    }

    /// Starts a server that records requests and answers with a fixed reply.
    async fn serve(
        status: StatusCode,
        reply: &'static str,
    ) -> (ConnectionConfig, Arc<Mutex<Captured>>) {
        let captured = Arc::new(Mutex::new(Captured::default()));
        let sink = captured.clone();

        let app = Router::new().fallback(
            move |method: AxumMethod, uri: Uri, headers: AxumHeaderMap, body: AxumBytes| {
                let sink = sink.clone();
                async move {
                    *sink.lock().unwrap() = Captured {
                        method: method.to_string(),
                        path: uri.path().to_owned(),
                        query: uri.query().map(str::to_owned),
                        headers: headers
                            .iter()
                            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_owned()))
                            .collect(),
                        body: body.to_vec(),
                    };
                    (status, reply).into_response()
                }
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (ConnectionConfig::new("127.0.0.1", port), captured)
    }

    #[test]
    fn test_decode_success() {
        let response = decode_response(200, br#"{"status":"ok","result":true}"#).unwrap();
        assert!(response.is_ok());
    }

    #[test]
    fn test_decode_http_error_with_detail() {
        let error = decode_response(404, br#"{"status":{"error":"Not found"}}"#).unwrap_err();
        assert!(error.is_http());
        assert_eq!(error.status_code(), 404);
        assert!(error.message.contains("Not found"));
        assert!(error.message.contains("404"));
        assert_eq!(error.response(), Some(&json!({"status": {"error": "Not found"}})));
    }

    #[test]
    fn test_decode_http_error_without_json() {
        let error = decode_response(502, b"Bad Gateway").unwrap_err();
        assert!(error.is_http());
        assert_eq!(error.status_code(), 502);
        assert!(error.response().is_none());
    }

    #[test]
    fn test_decode_invalid_success_body() {
        let error = decode_response(200, b"not json").unwrap_err();
        assert!(error.is_serialization());
        assert_eq!(error.status_code(), 0);
    }

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(ConnectionConfig::default()).unwrap();
        assert_eq!(transport.base_url().as_str(), "http://localhost:6333/");
    }

    #[test]
    fn test_invalid_api_key_header() {
        let config = ConnectionConfig::default().with_api_key("line\nbreak");
        let error = ReqwestTransport::new(config).unwrap_err();
        assert!(error.is_network());
    }

    #[tokio::test]
    async fn test_put_without_body_sends_empty_object() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok","result":true}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        let response = transport
            .request(Request::put(["collections", "c"]))
            .await
            .unwrap();
        assert!(response.is_ok());

        let captured = captured.lock().unwrap().clone();
        assert_eq!(captured.method, "PUT");
        assert_eq!(captured.path, "/collections/c");
        assert_eq!(captured.body, b"{}");
    }

    #[tokio::test]
    async fn test_get_sends_no_body_and_json_headers() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok","result":[]}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        transport.request(Request::get(["collections"])).await.unwrap();

        let captured = captured.lock().unwrap().clone();
        assert_eq!(captured.method, "GET");
        assert!(captured.body.is_empty());
        assert_eq!(captured.header("content-type"), Some("application/json"));
        assert_eq!(captured.header("accept"), Some("application/json"));
        assert_eq!(captured.header(API_KEY_HEADER), None);
    }

    #[tokio::test]
    async fn test_api_key_header() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok"}"#).await;
        let transport = ReqwestTransport::new(config.with_api_key("secret")).unwrap();

        transport
            .request(Request::delete(["collections", "c"]))
            .await
            .unwrap();

        let captured = captured.lock().unwrap().clone();
        assert_eq!(captured.method, "DELETE");
        assert_eq!(captured.header(API_KEY_HEADER), Some("secret"));
    }

    #[tokio::test]
    async fn test_body_is_sent_verbatim() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok"}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        let request = Request::new(Method::Post, ["collections", "c", "points", "count"])
            .json(&json!({"filter": {"must": []}}))
            .unwrap();
        transport.request(request).await.unwrap();

        let captured = captured.lock().unwrap().clone();
        assert_eq!(captured.body, br#"{"filter":{"must":[]}}"#);
    }

    #[tokio::test]
    async fn test_http_error_is_mapped() {
        let (config, _) = serve(StatusCode::NOT_FOUND, r#"{"status":{"error":"Not found"}}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        let error = transport
            .request(Request::get(["collections", "missing"]))
            .await
            .unwrap_err();

        assert!(error.is_http());
        assert_eq!(error.status_code(), 404);
        assert!(error.message.contains("Not found"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let transport = ReqwestTransport::new(ConnectionConfig::new("127.0.0.1", port)).unwrap();
        let error = transport
            .request(Request::get(["collections"]))
            .await
            .unwrap_err();

        assert!(error.is_network());
        assert_eq!(error.status_code(), 0);
        assert!(!error.message.is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let app = Router::new().fallback(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            (StatusCode::OK, r#"{"status":"ok"}"#)
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = ConnectionConfig::new("127.0.0.1", port).with_timeout(1);
        let transport = ReqwestTransport::new(config).unwrap();
        let error = transport
            .request(Request::get(["collections"]))
            .await
            .unwrap_err();

        assert!(error.is_network());
        assert_eq!(error.status_code(), 0);
        assert_eq!(error.message, "Request timed out");
    }

    #[tokio::test]
    async fn test_path_segments_are_escaped() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok","result":true}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        let cases = [
            (Request::delete(["collections", "prod#old"]), "/collections/prod%23old"),
            (Request::delete(["collections", "a?b"]), "/collections/a%3Fb"),
            (Request::get(["collections", "../x"]), "/collections/..%2Fx"),
            (Request::get(["collections", "50%"]), "/collections/50%25"),
            (
                Request::get(["collections", "c", "points", "scroll"]),
                "/collections/c/points/scroll",
            ),
        ];

        for (request, expected) in cases {
            transport.request(request).await.unwrap();
            let captured = captured.lock().unwrap().clone();
            assert_eq!(captured.path, expected);
            assert_eq!(captured.query, None);
        }
    }

    #[tokio::test]
    async fn test_dot_segments_are_rejected() {
        let (config, captured) = serve(StatusCode::OK, r#"{"status":"ok"}"#).await;
        let transport = ReqwestTransport::new(config).unwrap();

        for name in [".", ".."] {
            let error = transport
                .request(Request::delete(["collections", name]))
                .await
                .unwrap_err();
            assert!(error.is_network());
            assert_eq!(error.status_code(), 0);
        }

        assert!(captured.lock().unwrap().method.is_empty());
    }
}
