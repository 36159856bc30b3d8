//! Request payloads (DTOs) for the remote resources.
//!
//! These are opaque to the dispatch layer: it serializes them and places the
//! result in the request body or query, nothing more.

pub mod album;
pub mod common;
pub mod drawing;
pub mod must_read;

pub use album::*;
pub use common::*;
pub use drawing::*;
pub use must_read::*;
