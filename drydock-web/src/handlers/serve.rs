//! Asset serving over the catch-all route.

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio::fs;
use tracing::debug;

use crate::server::AppState;

/// Serves a stored asset, routing by filename extension.
///
/// Misses resolve to a plain 404. The content type is guessed from the
/// filename, falling back to `application/octet-stream`.
pub async fn serve_file(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let Ok(path) = state.store.resolve_serve(&filename).await else {
        debug!("Asset miss: {filename}");
        return StatusCode::NOT_FOUND.into_response();
    };

    match fs::read(&path).await {
        Ok(contents) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], contents).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
