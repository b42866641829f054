//! CLI command implementations

use std::path::PathBuf;

use clap::Subcommand;
use drydock_core::config::DrydockConfig;
use drydock_core::storage::AssetStore;
use drydock_core::{DrydockError, Result};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the control panel server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Storage root directory
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// List stored files
    List {
        /// Storage root directory
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Show storage usage
    Status {
        /// Storage root directory
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Serve { host, port, root } => serve(host, port, root).await,
        Commands::List { root } => list_files(root).await,
        Commands::Status { root } => show_status(root).await,
    }
}

/// Start the control panel server
///
/// # Errors
/// - `DrydockError::Server` - Failed to bind the listener or serve requests
async fn serve(host: Option<String>, port: Option<u16>, root: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(host, port, root);

    println!("Starting Drydock...");
    println!("Storage root: {}", config.storage.root.display());
    println!("Control panel: http://{}/", config.server.bind_address());
    println!("API: http://{}/api/*", config.server.bind_address());
    println!();
    println!("Press Ctrl+C to stop the server");

    drydock_web::run_server(config)
        .await
        .map_err(DrydockError::from_server_error)?;

    Ok(())
}

/// List stored files
///
/// # Errors
/// - `DrydockError::Storage` - Storage initialization failed
async fn list_files(root: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(None, None, root);
    let store = AssetStore::new(config.storage);
    store.initialize().await.map_err(DrydockError::Storage)?;

    let files = store.list().await;

    println!("Stored Files");
    println!("{:-<60}", "");

    if files.is_empty() {
        println!("No files stored yet.");
        println!("Use the control panel or POST /upload to add assets.");
    } else {
        for file in &files {
            println!("{file}");
        }
        println!();
        println!("{} files total", files.len());
    }

    Ok(())
}

/// Show storage usage
///
/// # Errors
/// - `DrydockError::Storage` - Storage initialization failed
async fn show_status(root: Option<PathBuf>) -> Result<()> {
    let config = resolve_config(None, None, root);
    let store = AssetStore::new(config.storage);
    store.initialize().await.map_err(DrydockError::Storage)?;

    let summary = store.summary().await;

    println!("Storage Status");
    println!("{:-<60}", "");
    println!("Root: {}", store.root().display());
    println!("Files: {}", summary.file_count);
    println!("Used: {:.2} MB ({} bytes)", summary.total_size_mb, summary.total_size);

    Ok(())
}

/// Builds configuration from environment, then applies CLI overrides.
fn resolve_config(
    host: Option<String>,
    port: Option<u16>,
    root: Option<PathBuf>,
) -> DrydockConfig {
    let mut config = DrydockConfig::from_env();

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(root) = root {
        config.storage.root = root;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(None, None, None);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.root, PathBuf::from("site"));
    }

    #[test]
    fn test_resolve_config_cli_overrides() {
        let config = resolve_config(
            Some("0.0.0.0".to_string()),
            Some(9000),
            Some(PathBuf::from("/srv/assets")),
        );

        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.storage.root, PathBuf::from("/srv/assets"));
    }

    #[tokio::test]
    async fn test_list_files_empty_root() {
        let temp = tempfile::TempDir::new().unwrap();

        let result = list_files(Some(temp.path().to_path_buf())).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_show_status_empty_root() {
        let temp = tempfile::TempDir::new().unwrap();

        let result = show_status(Some(temp.path().to_path_buf())).await;

        assert!(result.is_ok());
    }
}
