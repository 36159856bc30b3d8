//! Typed clients generated from each resource's operation table.

pub mod album_client;
pub mod drawing_client;
pub mod must_read_client;

pub use album_client::*;
pub use drawing_client::*;
pub use must_read_client::*;
