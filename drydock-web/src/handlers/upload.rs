//! Multipart upload handler.

use axum::extract::{Multipart, State};
use axum::response::Json;
use drydock_core::storage::StorageError;
use serde_json::json;
use tracing::info;

use super::api::ApiError;
use crate::server::AppState;

/// Accepts a multipart upload and stores it through the asset store.
///
/// Expects a `file` field carrying the payload and an optional `file_type`
/// field declaring where the asset should land. An absent or unrecognized
/// declared type routes the file to the storage root.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut payload: Option<(String, Vec<u8>)> = None;
    let mut declared_type = String::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| ApiError::BadRequest {
        message: format!("Failed to parse multipart data: {e}"),
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let bytes = field.bytes().await.map_err(|e| ApiError::BadRequest {
                    message: format!("Failed to read upload payload: {e}"),
                })?;
                payload = Some((filename, bytes.to_vec()));
            }
            "file_type" => {
                declared_type = field.text().await.map_err(|e| ApiError::BadRequest {
                    message: format!("Failed to read file_type field: {e}"),
                })?;
            }
            _ => {}
        }
    }

    let Some((filename, bytes)) = payload else {
        return Err(ApiError::Storage(StorageError::NoFileSelected));
    };

    info!(
        "Upload received: {} ({} bytes, declared type {:?})",
        filename,
        bytes.len(),
        declared_type
    );

    let stored = state.store.store(&declared_type, &filename, &bytes).await?;

    Ok(Json(json!({
        "status": "success",
        "filename": stored.filename,
        "filepath": stored.display_path,
    })))
}
