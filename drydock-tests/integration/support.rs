//! Shared helpers for integration tests.

use anyhow::Result;
use drydock_core::DrydockConfig;
use drydock_web::{AppState, router};
use tempfile::TempDir;

/// A running server over a temporary storage root.
pub struct TestServer {
    /// Base URL of the listener, without a trailing slash
    pub base_url: String,
    /// Temporary storage root, removed on drop
    pub _root: TempDir,
}

/// Spawns the full router on an ephemeral port.
pub async fn spawn_server() -> Result<TestServer> {
    let root = TempDir::new()?;
    let state = AppState::new(DrydockConfig::for_testing(root.path()));
    state.store.initialize().await?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    Ok(TestServer {
        base_url: format!("http://{address}"),
        _root: root,
    })
}

/// Uploads a file through the multipart endpoint.
pub async fn upload(
    client: &reqwest::Client,
    base_url: &str,
    declared_type: &str,
    filename: &str,
    contents: &[u8],
) -> Result<reqwest::Response> {
    let part = reqwest::multipart::Part::bytes(contents.to_vec()).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new()
        .part("file", part)
        .text("file_type", declared_type.to_string());

    let response = client
        .post(format!("{base_url}/upload"))
        .multipart(form)
        .send()
        .await?;

    Ok(response)
}
