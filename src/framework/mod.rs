//! Generic resource-access framework.
//!
//! This module provides the building blocks every resource client is made
//! of: operation tables, one dispatcher, and the transport seam.
//!
//! # Main Components
//!
//! - [`ResourceOperation`] / [`PathTemplate`] - One row of an operation table
//! - [`ResourceDescriptor`] - The validated table for one resource
//! - [`ResourceClient`] - Generic dispatcher over a [`Transport`]
//! - [`resource_client!`](crate::resource_client) - Table-to-client generator
//! - [`TransportError`], [`ConfigurationError`], [`ClientError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a transport that records requests and replays
//! canned responses.

pub mod client;
pub mod descriptor;
pub mod error;
pub mod macros;
pub mod mock;
pub mod operation;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use descriptor::ResourceDescriptor;
pub use error::{ClientError, ConfigurationError, TransportError};
pub use operation::{PathTemplate, ResourceOperation};
pub use transport::{Method, Transport, TransportRequest};

#[doc(hidden)]
pub mod __private {
    pub use paste;
    pub use serde_json;
}
