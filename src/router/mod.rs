//! # Navigation
//!
//! Declarative route table for the portal's views: patterns, metadata,
//! redirects, a single catch-all and lazily loaded views.

pub mod entry;
pub mod error;
pub mod navigator;
pub mod pattern;
pub mod table;

pub use entry::{Route, RouteEntry, RouteMeta, RouteTarget, ViewLoader};
pub use error::RouteError;
pub use navigator::{NavigateError, Navigation, Navigator};
pub use pattern::{split_path, RoutePattern};
pub use table::{RouteMatch, RouteTable, RouteTableBuilder};
