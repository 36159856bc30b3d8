#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Album Portal
//!
//! > **Typed resource clients and a declarative route table for the album portal.**
//!
//! The portal talks to a remote API exposing three resources (Album, Drawing,
//! MustRead) and presents a small set of views. This crate models both halves
//! as data:
//!
//! - every remote operation is a row in a [`ResourceDescriptor`](framework::ResourceDescriptor),
//!   and typed clients are generated from those rows;
//! - every view is an entry in a validated [`RouteTable`](router::RouteTable).
//!
//! ## 🏗️ Design Notes
//!
//! ### One dispatcher, many clients
//! [`ResourceClient`](framework::ResourceClient) resolves an operation name to
//! its method and path, fills in path parameters, places the payload in the
//! body or the query and calls the [`Transport`](framework::Transport) exactly
//! once. The per-resource clients in [`clients`] are generated by
//! [`resource_client!`] and contain no logic of their own.
//!
//! ### Transport errors pass through
//! Whatever the transport returns is what the caller gets. Clients never retry,
//! cache or reshape a response.
//!
//! ### Validation happens at build time
//! Malformed path templates, duplicate endpoints, a misplaced catch-all route
//! or a dangling redirect are [`ConfigurationError`](framework::ConfigurationError)s
//! raised while building a descriptor or route table, never while handling a
//! request.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Key items**: [`ResourceClient`](framework::ResourceClient),
//!   [`Transport`](framework::Transport), [`MockTransport`](framework::mock::MockTransport).
//!
//! ### 2. The Interface ([`clients`], [`model`])
//! - **Key items**: [`AlbumClient`](clients::AlbumClient),
//!   [`DrawingClient`](clients::DrawingClient), [`MustReadClient`](clients::MustReadClient).
//!
//! ### 3. Navigation ([`router`], [`routes`])
//! - **Key items**: [`RouteTable`](router::RouteTable), [`Navigator`](router::Navigator),
//!   [`app_routes`](routes::app_routes).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`PortalSystem`](lifecycle::PortalSystem),
//!   [`PortalConfig`](lifecycle::PortalConfig), [`setup_tracing`](lifecycle::tracing::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod router;
pub mod routes;
