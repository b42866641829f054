//! Drydock Web - control panel and HTTP API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the browser control panel, the JSON management API, and the
//! managed site assets themselves from a single listener.

pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use server::{AppState, router, run_server};
