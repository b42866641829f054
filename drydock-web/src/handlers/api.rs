//! JSON API handlers for file listing and deletion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use drydock_core::storage::{StorageError, StorageSummary};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::server::AppState;

/// Response body for `GET /api/files`.
#[derive(Serialize)]
pub struct FileListing {
    /// All stored files, root-relative, sorted
    pub files: Vec<String>,
    /// Aggregate usage of the storage tree
    pub storage_info: StorageSummary,
}

/// Error surfaced by the JSON API.
///
/// Every variant renders as a `{"status": "error", "message": ...}` body
/// with the matching HTTP status.
#[derive(Debug)]
pub enum ApiError {
    /// Storage layer rejected or failed the operation
    Storage(StorageError),
    /// Request was malformed before it reached the storage layer
    BadRequest {
        /// Human-readable reason sent to the client
        message: String,
    },
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        ApiError::Storage(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Storage(error) => {
                let status = match &error {
                    StorageError::NoFileSelected
                    | StorageError::ExtensionNotAllowed { .. }
                    | StorageError::InvalidFilename { .. } => StatusCode::BAD_REQUEST,
                    StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
                    StorageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("Storage operation failed: {error}");
                }
                (status, error.to_string())
            }
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Lists stored files together with the storage summary.
pub async fn api_files(State(state): State<AppState>) -> Json<FileListing> {
    let files = state.store.list().await;
    let storage_info = state.store.summary().await;

    Json(FileListing {
        files,
        storage_info,
    })
}

/// Deletes a file by its root-relative path.
pub async fn delete_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.store.delete(&filename).await?;

    Ok(Json(json!({
        "status": "success",
        "message": format!("Deleted {filename}"),
    })))
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use drydock_core::DrydockConfig;
    use tempfile::TempDir;

    use super::*;

    async fn create_test_state() -> (TempDir, AppState) {
        let temp = TempDir::new().unwrap();
        let state = AppState::new(DrydockConfig::for_testing(temp.path()));
        state.store.initialize().await.unwrap();
        (temp, state)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_api_files_lists_uploads() {
        let (_temp, state) = create_test_state().await;
        state
            .store
            .store("css", "style.css", b"body {}")
            .await
            .unwrap();

        let Json(listing) = api_files(State(state)).await;

        assert_eq!(listing.files, vec!["css/style.css"]);
        assert_eq!(listing.storage_info.file_count, 1);
        assert_eq!(listing.storage_info.total_size, 7);
    }

    #[tokio::test]
    async fn test_api_files_empty_store() {
        let (_temp, state) = create_test_state().await;

        let Json(listing) = api_files(State(state)).await;

        assert!(listing.files.is_empty());
        assert_eq!(listing.storage_info.file_count, 0);
        assert_eq!(listing.storage_info.total_size_mb, 0.0);
    }

    #[tokio::test]
    async fn test_delete_file_success_payload() {
        let (_temp, state) = create_test_state().await;
        state
            .store
            .store("css", "style.css", b"body {}")
            .await
            .unwrap();

        let result = delete_file(State(state.clone()), Path("css/style.css".to_string())).await;

        let Json(body) = result.unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Deleted css/style.css");
        assert!(state.store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_file_maps_to_404() {
        let (_temp, state) = create_test_state().await;

        let result = delete_file(State(state), Path("absent.html".to_string())).await;

        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "file not found: absent.html");
    }

    #[tokio::test]
    async fn test_validation_errors_map_to_400() {
        let response = ApiError::Storage(StorageError::NoFileSelected).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "no file selected");

        let response = ApiError::Storage(StorageError::ExtensionNotAllowed {
            filename: "a.exe".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_io_error_maps_to_500() {
        let io = std::io::Error::other("disk on fire");
        let response = ApiError::Storage(StorageError::Io(io)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
