//! System wiring, configuration and tracing setup.

pub mod config;
pub mod system;
pub mod tracing;

pub use config::{EndpointConventions, EndpointStyle, PortalConfig};
pub use system::PortalSystem;
