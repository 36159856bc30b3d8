//! # Framework Errors
//!
//! This module defines the error types shared by the resource clients and the
//! route table. Each layer owns one enum:
//!
//! - [`TransportError`]: raised by a [`Transport`](super::Transport), handed back
//!   to the caller untouched.
//! - [`ConfigurationError`]: a malformed operation table, path template, route
//!   table or setting. Detected before any request is sent.
//! - [`ClientError`]: what a generated client method returns.

/// Failures reported by the transport layer.
///
/// The resource clients never construct these themselves. They only pass them
/// through, so the caller always sees the exact value the transport produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out")]
    Timeout,
    #[error("HTTP {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Static configuration that can never produce a valid request or route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid path template {template:?}: {reason}")]
    InvalidPathTemplate { template: String, reason: String },
    #[error("Path parameter {parameter:?} missing for {template}")]
    MissingPathParameter { template: String, parameter: String },
    #[error("Path parameter {parameter:?} is not part of {template}")]
    UnexpectedPathParameter { template: String, parameter: String },
    #[error("Unknown operation {resource}.{operation}")]
    UnknownOperation { resource: String, operation: String },
    #[error("Duplicate operation {resource}.{operation}")]
    DuplicateOperation { resource: String, operation: String },
    #[error("Duplicate endpoint {method} {path} in {resource}")]
    DuplicateEndpoint {
        resource: String,
        method: String,
        path: String,
    },
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },
    #[error("Invalid metadata {key:?} on route: {reason}")]
    InvalidRouteMeta { key: String, reason: String },
    #[error("Unknown route name {0}")]
    UnknownRouteName(String),
    #[error("Duplicate route pattern {0}")]
    DuplicateRoute(String),
    #[error("Duplicate route name {0}")]
    DuplicateRouteName(String),
    /// An earlier entry matches every path this one would.
    #[error("Route {pattern} can never match: {shadowed_by} is declared first")]
    UnreachableRoute { pattern: String, shadowed_by: String },
    #[error("Route table must contain exactly one catch-all route, found {0}")]
    CatchAllCount(usize),
    #[error("Catch-all route must be declared last")]
    CatchAllNotLast,
    /// No entry redirects `/`. A second `/` entry is a [`DuplicateRoute`](Self::DuplicateRoute).
    #[error("Route table must redirect \"/\"")]
    MissingRootRedirect,
    #[error("Redirect {from} -> {to} is invalid: {reason}")]
    InvalidRedirect {
        from: String,
        to: String,
        reason: String,
    },
    #[error("Invalid setting {key}={value:?}")]
    InvalidSetting { key: String, value: String },
}

/// Errors returned by generated resource client methods.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The transport failed; the inner value is exactly what it returned.
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Payload could not be serialized: {0}")]
    Payload(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the transport error if this call failed in the transport.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            ClientError::Transport(e) => Some(e),
            _ => None,
        }
    }
}
