//! In-process transport double for unit tests.

use crate::error::{SdkError, SdkResult};
use crate::transport::{ApiRequest, HttpTransport, Response};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Arc;

/// Replays queued responses and records every request it is handed.
/// With an empty queue it behaves like an unreachable host.
#[derive(Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_response(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.responses.lock().push_back(Response::new(
            status,
            HeaderMap::new(),
            Bytes::copy_from_slice(body.as_bytes()),
        ));
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> SdkResult<Response> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| SdkError::NetworkError {
                message: "Connection refused".to_string(),
                source: None,
            })
    }
}
