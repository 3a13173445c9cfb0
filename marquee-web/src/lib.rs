//! Marquee Web - server-rendered search UI
//!
//! Thin presentation over the `marquee-search` state machines: pages
//! render whatever the controller and loader expose, form posts run
//! the begin -> fetch -> apply flow, and a JSON passthrough API mirrors
//! the two catalog query shapes.

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, run_server};
