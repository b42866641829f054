//! Server-rendered pages.

pub mod panel;

pub use panel::control_panel;
