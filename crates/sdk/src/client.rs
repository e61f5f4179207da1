//! SDK client implementation
//!
//! This module provides the main client for interacting with the Unleash
//! admin API. All services share one [`Client`], which owns the base URL,
//! the default headers and the transport.

use crate::config::ClientConfig;
use crate::error::{SdkError, SdkResult};
use crate::models::ErrorEnvelope;
use crate::services::{
    ApiTokensService, FeatureTagsService, FeatureTogglesService, FeatureTypesService,
    ProjectsService, StrategiesService, UsersService, VariantsService,
};
use crate::transport::{ApiRequest, HttpTransport, ReqwestTransport, Response};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

/// Main SDK client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
    api_url: Url,
    headers: HeaderMap,
}

/// A decoded value together with the response it came from
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded body, or the default value for `204 No Content`
    pub data: T,
    /// Response metadata and raw body
    pub response: Response,
}

impl<T> ApiResponse<T> {
    /// HTTP status code of the response
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Discard the response metadata
    pub fn into_data(self) -> T {
        self.data
    }

    /// Map the decoded value, keeping the response
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: f(self.data),
            response: self.response,
        }
    }
}

impl Client {
    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new client using the default `reqwest` transport
    pub fn new(config: ClientConfig) -> SdkResult<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a new client that sends every request through `transport`
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> SdkResult<Self> {
        config.validate()?;
        let api_url = config.api_url()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(crate::USER_AGENT)),
        );
        let mut auth = HeaderValue::from_str(&config.auth_token)
            .map_err(|_| SdkError::config("Invalid authorization header"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                config,
                api_url,
                headers,
            }),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> SdkResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Normalized base URL, always ending with `/`
    pub fn api_url(&self) -> &Url {
        &self.inner.api_url
    }

    /// Get the projects service
    pub fn projects(&self) -> ProjectsService {
        ProjectsService::new(self.clone())
    }

    /// Get the feature toggles service
    pub fn feature_toggles(&self) -> FeatureTogglesService {
        FeatureTogglesService::new(self.clone())
    }

    /// Get the feature types service
    pub fn feature_types(&self) -> FeatureTypesService {
        FeatureTypesService::new(self.clone())
    }

    /// Get the feature tags service
    pub fn feature_tags(&self) -> FeatureTagsService {
        FeatureTagsService::new(self.clone())
    }

    /// Get the strategies service
    pub fn strategies(&self) -> StrategiesService {
        StrategiesService::new(self.clone())
    }

    /// Get the variants service
    pub fn variants(&self) -> VariantsService {
        VariantsService::new(self.clone())
    }

    /// Get the users service
    pub fn users(&self) -> UsersService {
        UsersService::new(self.clone())
    }

    /// Get the API tokens service
    pub fn api_tokens(&self) -> ApiTokensService {
        ApiTokensService::new(self.clone())
    }

    /// Build a request for `segments` relative to the base URL
    ///
    /// Each segment is percent-encoded on its own, so identifiers containing
    /// `/`, `?` or `#` stay inside their segment. For POST, PUT and PATCH a
    /// body is encoded as JSON; for any other method it is encoded as query
    /// parameters instead.
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> SdkResult<ApiRequest> {
        let mut url = self.inner.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| SdkError::config("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        let mut headers = self.inner.headers.clone();
        let mut payload = None;

        if let Some(body) = body {
            if is_body_method(&method) {
                let encoded = serde_json::to_vec(body)?;
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                payload = Some(Bytes::from(encoded));
            } else {
                let query = serde_urlencoded::to_string(body)?;
                if !query.is_empty() {
                    url.set_query(Some(&query));
                }
            }
        }

        Ok(ApiRequest::new(method, url, headers, payload))
    }

    /// Send a request and decode the JSON body into `T`
    ///
    /// A `204 No Content` response yields `T::default()` without looking at
    /// the body.
    pub async fn execute<T: DeserializeOwned + Default>(
        &self,
        request: ApiRequest,
    ) -> SdkResult<ApiResponse<T>> {
        let response = self.send(request).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(ApiResponse {
                data: T::default(),
                response,
            });
        }

        match serde_json::from_slice::<T>(response.body()) {
            Ok(data) => Ok(ApiResponse { data, response }),
            Err(e) => {
                error!("Failed to parse response: {}", e);
                Err(SdkError::DecodeError {
                    message: format!("Failed to parse response: {}", e),
                    response: Box::new(response),
                    source: Some(Box::new(e)),
                })
            }
        }
    }

    /// Send a request and hand back the raw body untouched
    ///
    /// Used by endpoints whose success body carries no meaningful JSON.
    pub async fn execute_raw(&self, request: ApiRequest) -> SdkResult<ApiResponse<Bytes>> {
        let response = self.send(request).await?;

        let data = if response.status() == StatusCode::NO_CONTENT {
            Bytes::new()
        } else {
            response.body().clone()
        };

        Ok(ApiResponse { data, response })
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned + Default>(
        &self,
        segments: &[&str],
    ) -> SdkResult<ApiResponse<T>> {
        let request = self.build_request(Method::GET, segments, Option::<&()>::None)?;
        self.execute(request).await
    }

    /// Make a GET request with query parameters
    pub(crate) async fn get_with_query<T: DeserializeOwned + Default, Q: Serialize>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> SdkResult<ApiResponse<T>> {
        let request = self.build_request(Method::GET, segments, Some(query))?;
        self.execute(request).await
    }

    /// Make a POST request
    pub(crate) async fn post<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> SdkResult<ApiResponse<T>> {
        let request = self.build_request(Method::POST, segments, Some(body))?;
        self.execute(request).await
    }

    /// Make a PUT request
    pub(crate) async fn put<T: DeserializeOwned + Default, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> SdkResult<ApiResponse<T>> {
        let request = self.build_request(Method::PUT, segments, Some(body))?;
        self.execute(request).await
    }

    /// Make a request whose body is returned raw
    pub(crate) async fn send_raw<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> SdkResult<ApiResponse<Bytes>> {
        let request = self.build_request(method, segments, body)?;
        self.execute_raw(request).await
    }

    /// Make a DELETE request
    pub(crate) async fn delete(&self, segments: &[&str]) -> SdkResult<ApiResponse<Bytes>> {
        self.send_raw(Method::DELETE, segments, Option::<&()>::None)
            .await
    }

    /// Require a specific success status
    ///
    /// On mismatch the body is read as the server's error envelope and
    /// surfaced as [`SdkError::ApiError`].
    pub(crate) fn expect_status(response: &Response, expected: StatusCode) -> SdkResult<()> {
        if response.status() == expected {
            return Ok(());
        }

        match serde_json::from_slice::<ErrorEnvelope>(response.body()) {
            Ok(envelope) => Err(SdkError::ApiError {
                name: envelope.error.name,
                message: envelope.error.message,
                response: Box::new(response.clone()),
            }),
            Err(e) => Err(SdkError::DecodeError {
                message: format!(
                    "Expected status {} but got {}: {}",
                    expected.as_u16(),
                    response.status().as_u16(),
                    e
                ),
                response: Box::new(response.clone()),
                source: Some(Box::new(e)),
            }),
        }
    }

    /// Send through the transport and classify the status code
    async fn send(&self, request: ApiRequest) -> SdkResult<Response> {
        if self.inner.config.debug {
            debug!("SDK request: {} {}", request.method(), request.url());
        }

        let response = self.inner.transport.send(request).await?;

        if self.inner.config.debug {
            debug!(
                "SDK response ({}): {}",
                response.status().as_u16(),
                response.text()
            );
        }

        check_response(response)
    }
}

/// Server error bodies come either wrapped in `{"error": {...}}` or flat
#[derive(Debug, serde::Deserialize)]
struct FlatErrorResponse {
    name: Option<String>,
    message: Option<String>,
}

fn check_response(response: Response) -> SdkResult<Response> {
    let status = response.status();
    if status.as_u16() < 400 {
        return Ok(response);
    }

    let message = error_message(&response);
    debug!("SDK error response ({}): {}", status.as_u16(), message);

    // response travels with the error
    Err(SdkError::HttpError {
        status_code: status.as_u16(),
        message,
        response: Box::new(response),
    })
}

fn error_message(response: &Response) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(response.body()) {
        return format!("{}: {}", envelope.error.name, envelope.error.message);
    }

    if let Ok(flat) = serde_json::from_slice::<FlatErrorResponse>(response.body()) {
        match (flat.name, flat.message) {
            (Some(name), Some(message)) => return format!("{}: {}", name, message),
            (Some(name), None) => return name,
            (None, Some(message)) => return message,
            (None, None) => {}
        }
    }

    response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown status")
        .to_string()
}

fn is_body_method(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Client builder for ergonomic configuration
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment
    pub fn from_env(mut self) -> SdkResult<Self> {
        self.config = ClientConfig::from_env()?;
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the auth token, sent verbatim as the `Authorization` header
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.config.auth_token = token.into();
        self
    }

    /// Set the request timeout of the default transport
    pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Enable debug mode
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    pub fn build(self) -> SdkResult<Client> {
        match self.transport {
            Some(transport) => Client::with_transport(self.config, transport),
            None => Client::new(self.config),
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.inner.api_url.as_str())
            .field("config", &self.inner.config)
            .finish()
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}
