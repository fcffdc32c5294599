//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::collections::HashMap;

use prospety::transport::{ApiRequest, Method, Transport, TransportError, TransportResult};
use serde_json::Value;

/// Transport replaying canned bodies keyed by method, path and page.
#[derive(Default)]
pub struct CannedTransport {
    responses: HashMap<(Method, String, Option<String>), Vec<u8>>,
    pub requests: RefCell<Vec<ApiRequest>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, method: Method, path: &str, body: Value) -> Self {
        self.responses
            .insert((method, path.to_string(), None), body.to_string().into_bytes());
        self
    }

    pub fn on_page(mut self, path: &str, page: usize, body: Value) -> Self {
        self.responses.insert(
            (Method::Get, path.to_string(), Some(page.to_string())),
            body.to_string().into_bytes(),
        );
        self
    }

    pub fn on_raw(mut self, method: Method, path: &str, body: &[u8]) -> Self {
        self.responses
            .insert((method, path.to_string(), None), body.to_vec());
        self
    }
}

impl Transport for CannedTransport {
    fn execute(&self, request: &ApiRequest) -> TransportResult<Vec<u8>> {
        self.requests.borrow_mut().push(request.clone());
        let page = request
            .query
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.clone());
        self.responses
            .get(&(request.method, request.path.clone(), page))
            .cloned()
            .ok_or(TransportError::Status { code: 404 })
    }
}
