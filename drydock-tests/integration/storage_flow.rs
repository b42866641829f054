//! Storage behavior observed through the HTTP surface.

use anyhow::Result;
use serde_json::Value;

use crate::support::{spawn_server, upload};

#[tokio::test]
async fn test_overwrite_keeps_file_count_stable() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    upload(&client, &server.base_url, "css", "style.css", b"first").await?;
    upload(&client, &server.base_url, "css", "style.css", b"second, longer body").await?;

    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listing["storage_info"]["file_count"], 1);

    // The later payload wins.
    let response = client
        .get(format!("{}/style.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.text().await?, "second, longer body");

    Ok(())
}

#[tokio::test]
async fn test_asset_uploaded_off_route_is_unreachable() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    // Declared html, so the file lands at the root. Its extension routes
    // download requests to css/, where nothing exists.
    let response = upload(&client, &server.base_url, "html", "orphan.css", b"body {}").await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["filepath"], "orphan.css");

    let response = client
        .get(format!("{}/orphan.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    // Still listed and deletable by its real path.
    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listing["files"], serde_json::json!(["orphan.css"]));

    let response = client
        .delete(format!("{}/api/delete/orphan.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.status(), 200);

    Ok(())
}

#[tokio::test]
async fn test_traversal_filenames_are_neutralized() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = upload(
        &client,
        &server.base_url,
        "css",
        "../../escape.css",
        b"body {}",
    )
    .await?;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["filename"], "escape.css");
    assert_eq!(body["filepath"], "css/escape.css");

    Ok(())
}

#[tokio::test]
async fn test_empty_store_reports_zero_usage() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(listing["files"], serde_json::json!([]));
    assert_eq!(listing["storage_info"]["total_size"], 0);
    assert_eq!(listing["storage_info"]["total_size_mb"], 0.0);
    assert_eq!(listing["storage_info"]["file_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_summary_accumulates_across_kinds() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    upload(&client, &server.base_url, "html", "index.html", b"<html></html>").await?;
    upload(&client, &server.base_url, "css", "style.css", b"body { margin: 0; }").await?;
    upload(&client, &server.base_url, "images", "dot.png", &[0u8; 256]).await?;

    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;

    assert_eq!(listing["storage_info"]["file_count"], 3);
    assert_eq!(
        listing["storage_info"]["total_size"],
        13 + 19 + 256
    );
    assert_eq!(
        listing["files"],
        serde_json::json!(["css/style.css", "images/dot.png", "index.html"])
    );

    Ok(())
}
