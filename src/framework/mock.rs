//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. It lets you
//! queue expectations with canned responses and then inspect every request a
//! client produced, so client code can be tested without a server.
//!
//! ## When to use
//!
//! | Feature | MockTransport | Real transport |
//! |---------|---------------|----------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | 100% deterministic | Subject to the server |
//! | **Error Injection** | Easy (`return_err`) | Hard |
//! | **Use Case** | Request shape, error propagation | End-to-end checks |
//!
//! ## Example
//!
//! ```rust
//! use album_portal::framework::mock::MockTransport;
//! use album_portal::framework::{Method, ResourceClient, ResourceDescriptor, ResourceOperation};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = Arc::new(MockTransport::new());
//!     transport
//!         .expect(Method::Get, "/mustRead/latest")
//!         .return_ok(json!({ "title": "Safety first" }));
//!
//!     let descriptor = ResourceDescriptor::new(
//!         "mustRead",
//!         [ResourceOperation::get("latest", "/mustRead/latest").unwrap()],
//!     )
//!     .unwrap();
//!     let client = ResourceClient::new(descriptor, transport.clone());
//!
//!     let latest = client.dispatch("latest", &[], None).await.unwrap();
//!     assert_eq!(latest["title"], "Safety first");
//!
//!     let sent = transport.last_request().unwrap();
//!     assert_eq!(sent.params, None);
//!     transport.verify();
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! Timeouts and HTTP failures are one line each:
//!
//! ```rust,ignore
//! transport.expect(Method::Post, "/album/list").return_err(TransportError::Timeout);
//! ```

use crate::framework::error::TransportError;
use crate::framework::transport::{Method, Transport, TransportRequest};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    method: Method,
    url: String,
    response: Result<Value, TransportError>,
}

/// A transport with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. Any
/// request without a matching expectation panics, naming the request.
#[derive(Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next request to be `method url`.
    pub fn expect(&self, method: Method, url: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            url: url.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == request.method && exp.url == request.url => exp.response,
            Some(exp) => panic!(
                "Expected {} {}, got {} {}",
                exp.method, exp.url, request.method, request.url
            ),
            None => panic!("Unexpected request: {request:?}"),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    url: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Value) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: TransportError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Value, TransportError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            url: self.url,
            response,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mock = MockTransport::new();
        mock.expect(Method::Post, "/album/create").return_ok(json!(1));
        mock.expect(Method::Get, "/mustRead/latest")
            .return_err(TransportError::Network("reset".into()));

        let first = mock
            .send(TransportRequest::new(Method::Post, "/album/create"))
            .await;
        assert_eq!(first, Ok(json!(1)));

        let second = mock
            .send(TransportRequest::new(Method::Get, "/mustRead/latest"))
            .await;
        assert_eq!(second, Err(TransportError::Network("reset".into())));

        assert_eq!(mock.requests().len(), 2);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Unexpected request")]
    async fn test_unexpected_request_panics() {
        let mock = MockTransport::new();
        let _ = mock
            .send(TransportRequest::new(Method::Get, "/drawing/download"))
            .await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_reports_leftovers() {
        let mock = MockTransport::new();
        mock.expect(Method::Put, "/album/update").return_ok(Value::Null);
        mock.verify();
    }
}
