//! # Transport Seam
//!
//! The resource clients never talk to the network themselves. They build a
//! [`TransportRequest`] and hand it to whatever implements [`Transport`]. Auth
//! headers, base URLs, retries and response normalization all live behind this
//! trait.

use crate::framework::error::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{self, Display};
use std::sync::Arc;

/// HTTP verbs used by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Whether the payload travels in the request body.
    ///
    /// GET requests carry their payload as query parameters instead.
    pub fn carries_body(self) -> bool {
        !matches!(self, Method::Get)
    }

    pub fn as_str(self) -> &'static str {
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

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportRequest {
    /// Resolved path, relative to the transport's base URL.
    pub url: String,
    pub method: Method,
    /// Request body (POST / PUT / DELETE).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Query parameters (GET).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            data: None,
            params: None,
        }
    }

    /// The payload, wherever it was placed.
    pub fn payload(&self) -> Option<&Value> {
        self.data.as_ref().or(self.params.as_ref())
    }
}

/// Executes one network call per request.
///
/// Implementations must be safe to share between concurrent callers; the
/// clients hold them behind an `Arc` and never serialize access.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
        (**self).send(request).await
    }
}
