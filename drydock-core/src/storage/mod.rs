//! Storage layer for site assets.
//!
//! Defines the asset store over a fixed directory tree, upload routing,
//! filename sanitation, and recursive storage accounting. The filesystem is
//! the sole source of truth: no state is retained between requests, and
//! concurrent operations see best-effort consistency only.

pub mod accountant;
pub mod router;
pub mod sanitize;
pub mod store;

pub use accountant::{StorageSummary, compute_summary, list_relative};
pub use router::{AssetKind, UploadTarget, resolve_serve_directory, resolve_upload_target};
pub use sanitize::sanitize_filename;
pub use store::{AssetStore, StoredFile};

/// Errors that occur during asset storage operations.
///
/// Covers upload validation failures, missing files, and underlying
/// filesystem errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Upload request carried no file payload or an empty filename
    #[error("no file selected")]
    NoFileSelected,

    /// Upload extension is outside the allowed set
    #[error("file type not allowed")]
    ExtensionNotAllowed {
        /// Filename that was rejected
        filename: String,
    },

    /// Filename collapsed to nothing after sanitation
    #[error("invalid filename: {filename}")]
    InvalidFilename {
        /// Filename as the client supplied it
        filename: String,
    },

    /// Requested file does not exist under the resolved directory
    #[error("file not found: {path}")]
    NotFound {
        /// Path that was requested, relative to the storage root
        path: String,
    },

    /// Standard I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
