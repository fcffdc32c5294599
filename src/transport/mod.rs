//! Request execution seam between the services and the network.

use std::fmt::{self, Display};

use serde::Serialize;
use serde_json::Value;

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod rate_limit;

pub use errors::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use rate_limit::RateLimiter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call against the API, relative to the configured host.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Slash-separated path, e.g. `searches/12/prospects`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Appends a query pair; pairs are sent in insertion order.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> TransportResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// Sends a request and hands back the raw response body of a 2xx reply.
pub trait Transport {
    fn execute(&self, request: &ApiRequest) -> TransportResult<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &ApiRequest) -> TransportResult<Vec<u8>> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn builder_keeps_query_order() {
        let request = ApiRequest::get("channels").query("limit", 100).query("page", 1);

        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("page".to_string(), "1".to_string())
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn json_body_is_captured() {
        let request = ApiRequest::post("quick_searches")
            .json(&json!({"channel_id": 1, "url": "https://video.example/@a"}))
            .unwrap();

        assert_eq!(request.body.unwrap()["channel_id"], json!(1));
    }

    #[test]
    fn segments_skip_empty_parts() {
        let request = ApiRequest::put("/searches//12/start/");

        let segments: Vec<_> = request.segments().collect();

        assert_eq!(segments, vec!["searches", "12", "start"]);
    }
}
