//! HTTP transport abstraction
//!
//! The client never talks to the network directly. Every request goes
//! through an [`HttpTransport`], which makes the transport replaceable per
//! client instance (for tests, custom TLS setups or instrumentation).

use crate::error::{SdkError, SdkResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::time::Duration;

/// Capability to send one request and receive one fully-read response
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request. A body that cannot be read after the status line
    /// arrived is reported as [`SdkError::DecodeError`] carrying the status
    /// and headers; other errors mean no response was received.
    async fn send(&self, request: ApiRequest) -> SdkResult<Response>;
}

/// A fully built, transport-ready request
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, url: Url, headers: HeaderMap, body: Option<Bytes>) -> Self {
        Self {
            method,
            url,
            headers,
            body,
        }
    }

    /// HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute request URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Encoded payload, present only for body-bearing methods
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

/// Response metadata and the consumed body
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Create a response from its parts
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Response body as UTF-8 text, lossy
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Default transport backed by `reqwest`
///
/// Proxies configured through `HTTP_PROXY`/`HTTPS_PROXY` are honored.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with an optional request timeout
    pub fn new(timeout: Option<Duration>) -> SdkResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SdkError::config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// Wrap an already configured `reqwest::Client`
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> SdkResult<Response> {
        let ApiRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        match response.bytes().await {
            Ok(body) => Ok(Response::new(status, headers, body)),
            Err(e) => Err(body_read_failed(Response::new(status, headers, Bytes::new()), e)),
        }
    }
}

/// Status and headers were received but the body was cut off.
fn body_read_failed(
    response: Response,
    err: impl std::error::Error + Send + Sync + 'static,
) -> SdkError {
    SdkError::DecodeError {
        message: format!("Failed to read response body: {}", err),
        response: Box::new(response),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_truncated_body_keeps_status_and_headers() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(
                    b"HTTP/1.1 503 Service Unavailable\r\n\
                      content-length: 100\r\n\
                      x-request-id: req-7\r\n\r\nshort",
                )
                .await
                .unwrap();
        });

        let transport = ReqwestTransport::new(None).unwrap();
        let url = Url::parse(&format!("http://{}/api/admin/projects", addr)).unwrap();
        let err = transport
            .send(ApiRequest::new(Method::GET, url, HeaderMap::new(), None))
            .await
            .unwrap_err();

        assert!(matches!(err, SdkError::DecodeError { .. }));
        assert_eq!(err.status_code(), Some(503));
        let response = err.response().unwrap();
        assert_eq!(response.headers()["x-request-id"], "req-7");
        assert!(response.body().is_empty());
    }
}
