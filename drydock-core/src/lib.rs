//! Drydock Core - storage engine for self-hosted site assets
//!
//! This crate provides the building blocks of the Drydock file manager:
//! the asset store over a fixed directory tree, upload routing and filename
//! sanitation, recursive storage accounting, configuration management, and
//! tracing setup.

pub mod config;
pub mod storage;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::DrydockConfig;
pub use storage::{AssetKind, AssetStore, StorageError, StorageSummary, StoredFile};

/// Core errors that can bubble up from any Drydock subsystem.
#[derive(Debug, thiserror::Error)]
pub enum DrydockError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Server error: {reason}")]
    Server { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrydockError {
    /// Convert a web server failure into a core error.
    pub fn from_server_error(error: impl std::fmt::Display) -> Self {
        DrydockError::Server {
            reason: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DrydockError>;
