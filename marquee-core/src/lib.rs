//! Marquee Core - configuration and shared runtime plumbing
//!
//! Holds the pieces every other Marquee crate leans on: the central
//! configuration (catalog endpoint, credentials, server binding) and
//! tracing initialization. No catalog or UI logic lives here.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{CatalogConfig, ConfigError, MarqueeConfig, ServerConfig};
