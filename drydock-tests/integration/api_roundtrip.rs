//! End-to-end upload, serve, and delete flows over HTTP.

use anyhow::Result;
use serde_json::Value;

use crate::support::{spawn_server, upload};

#[tokio::test]
async fn test_upload_serve_delete_roundtrip() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    // Upload a stylesheet, declared as css.
    let response = upload(&client, &server.base_url, "css", "style.css", b"body { margin: 0; }").await?;
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await?;
    assert_eq!(body["status"], "success");
    assert_eq!(body["filename"], "style.css");
    assert_eq!(body["filepath"], "css/style.css");

    // The asset serves from its bare name; extension routing finds css/.
    let response = client
        .get(format!("{}/style.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str()?,
        "text/css"
    );
    assert_eq!(response.text().await?, "body { margin: 0; }");

    // Listing shows the file with its subdirectory prefix.
    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listing["files"], serde_json::json!(["css/style.css"]));
    assert_eq!(listing["storage_info"]["file_count"], 1);

    // Delete by the listed path.
    let response = client
        .delete(format!("{}/api/delete/css/style.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Deleted css/style.css");

    // Gone from both the serve route and the listing.
    let response = client
        .get(format!("{}/style.css", server.base_url))
        .send()
        .await?;
    assert_eq!(response.status(), 404);

    let listing: Value = client
        .get(format!("{}/api/files", server.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listing["storage_info"]["file_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_upload_disallowed_extension_is_rejected() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = upload(&client, &server.base_url, "html", "payload.exe", b"MZ").await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "file type not allowed");

    Ok(())
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let form = reqwest::multipart::Form::new().text("file_type", "css");
    let response = client
        .post(format!("{}/upload", server.base_url))
        .multipart(form)
        .send()
        .await?;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await?;
    assert_eq!(body["message"], "no file selected");

    Ok(())
}

#[tokio::test]
async fn test_delete_missing_file_is_404() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{}/api/delete/absent.html", server.base_url))
        .send()
        .await?;

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await?;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "file not found: absent.html");

    Ok(())
}

#[tokio::test]
async fn test_control_panel_is_served_at_root() -> Result<()> {
    let server = spawn_server().await?;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/", server.base_url)).send().await?;

    assert_eq!(response.status(), 200);
    let page = response.text().await?;
    assert!(page.contains("Drydock Control Panel"));

    Ok(())
}
