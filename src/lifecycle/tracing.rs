//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Dispatch**: one `dispatch` span per client call with the resource and
//!   operation, the outgoing method and URL at `debug`, transport failures at
//!   `warn`
//! - **Navigation**: each resolved navigation at `info`, fallbacks and
//!   redirects at `debug`/`trace`
//! - **Configuration**: a `warn` whenever a legacy endpoint shape is selected
//!
//! ## Usage Examples
//!
//! ```bash
//! # Navigations and startup only
//! RUST_LOG=info cargo run
//!
//! # Every outgoing request
//! RUST_LOG=debug cargo run
//!
//! # Only the resource clients
//! RUST_LOG=album_portal::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a detail lookup reads:
//!
//! ```text
//! DEBUG dispatch{resource="album" operation="detail"}: Sending request method=POST url=/album/get
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // spans already name the resource
        .compact()
        .init();
}
