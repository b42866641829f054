//! HTTP server wiring for the Drydock control panel and API.
//!
//! A single axum router serves the control panel page, the JSON management
//! endpoints, and the managed assets themselves. The catch-all asset route
//! is registered last so the fixed routes always win.

use axum::Router;
use axum::routing::{delete, get, post};
use drydock_core::config::DrydockConfig;
use drydock_core::storage::AssetStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_files, delete_file, serve_file, upload_file};
use crate::pages::control_panel;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Asset store all storage operations go through
    pub store: AssetStore,
    /// Full configuration, for panel rendering
    pub config: DrydockConfig,
}

impl AppState {
    /// Builds state from configuration.
    pub fn new(config: DrydockConfig) -> Self {
        Self {
            store: AssetStore::new(config.storage.clone()),
            config,
        }
    }
}

/// Builds the application router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Control panel
        .route("/", get(control_panel))
        // JSON management API
        .route("/api/files", get(api_files))
        .route("/api/delete/{*filename}", delete(delete_file))
        .route("/upload", post(upload_file))
        // Managed assets, catch-all
        .route("/{*filename}", get(serve_file))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initializes storage and runs the HTTP server until it fails.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If storage initialization fails, the listener cannot bind, or serving fails
pub async fn run_server(config: DrydockConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = config.server.bind_address();
    let state = AppState::new(config);
    state.store.initialize().await?;

    let app = router(state);

    println!("Drydock control panel running on http://{bind_address}");
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
