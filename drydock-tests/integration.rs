//! Integration tests for Drydock
//!
//! These tests run the full HTTP server against a temporary storage root
//! and drive it with a real HTTP client, covering upload routing, serving,
//! deletion, and storage accounting end to end.

#[path = "integration/api_roundtrip.rs"]
mod api_roundtrip;

#[path = "integration/storage_flow.rs"]
mod storage_flow;

#[path = "integration/support.rs"]
mod support;
