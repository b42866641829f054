//! Asset store over the fixed directory tree.
//!
//! The store owns no state beyond its configuration. Every operation reads
//! or writes the filesystem directly, so external changes to the tree are
//! visible on the next request without invalidation.

use std::path::{Component, Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use super::{
    StorageError, StorageSummary, compute_summary, list_relative, resolve_serve_directory,
    resolve_upload_target, sanitize_filename,
};
use crate::config::StorageConfig;
use crate::storage::router::extension_of;

/// File-backed store for site assets.
///
/// Validates and routes uploads into the fixed subdirectory tree, resolves
/// download paths by extension, and accounts usage recursively. Writes
/// overwrite silently; the last upload under a name wins.
#[derive(Debug, Clone)]
pub struct AssetStore {
    config: StorageConfig,
}

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Sanitized filename the asset was written under
    pub filename: String,
    /// Path relative to the storage root, with forward slashes
    pub display_path: String,
    /// Size of the stored payload, in bytes
    pub size: u64,
}

impl AssetStore {
    /// Creates a store over the configured root. No filesystem access
    /// happens until `initialize` or an operation is called.
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Storage root this store operates on.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// Creates the storage root and its fixed subdirectories.
    ///
    /// Idempotent: existing directories are left untouched.
    ///
    /// # Errors
    ///
    /// - `StorageError::Io` - If a directory cannot be created
    pub async fn initialize(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.config.root).await?;
        for subdirectory in self.config.subdirectories {
            fs::create_dir_all(self.config.root.join(subdirectory)).await?;
        }
        info!("Asset store initialized at {}", self.config.root.display());
        Ok(())
    }

    /// Validates, routes, and writes an upload.
    ///
    /// The extension check runs against the filename as the client sent it.
    /// The name is then sanitized and the payload written into the
    /// subdirectory selected by the declared asset type, overwriting any
    /// existing file under the same name.
    ///
    /// # Errors
    ///
    /// - `StorageError::NoFileSelected` - If the filename is empty
    /// - `StorageError::ExtensionNotAllowed` - If the extension is missing or outside the allowed set
    /// - `StorageError::InvalidFilename` - If nothing safe remains after sanitation
    /// - `StorageError::Io` - If the write fails
    pub async fn store(
        &self,
        declared_type: &str,
        filename: &str,
        payload: &[u8],
    ) -> Result<StoredFile, StorageError> {
        if filename.is_empty() {
            return Err(StorageError::NoFileSelected);
        }

        if !self.is_extension_allowed(filename) {
            warn!("Rejected upload with disallowed extension: {filename}");
            return Err(StorageError::ExtensionNotAllowed {
                filename: filename.to_string(),
            });
        }

        let safe_name = sanitize_filename(filename);
        if safe_name.is_empty() {
            warn!("Rejected upload whose name sanitized to nothing: {filename}");
            return Err(StorageError::InvalidFilename {
                filename: filename.to_string(),
            });
        }

        let target = resolve_upload_target(&self.config.root, declared_type, &safe_name);
        fs::create_dir_all(&target.directory).await?;
        fs::write(target.directory.join(&safe_name), payload).await?;

        info!(
            "Stored {} ({} bytes) as {}",
            filename,
            payload.len(),
            target.display_path
        );

        Ok(StoredFile {
            filename: safe_name,
            display_path: target.display_path,
            size: payload.len() as u64,
        })
    }

    /// Deletes a file by its root-relative path.
    ///
    /// # Errors
    ///
    /// - `StorageError::NotFound` - If the path escapes the root or is not an existing file
    /// - `StorageError::Io` - If the removal fails
    pub async fn delete(&self, relative_path: &str) -> Result<(), StorageError> {
        let Some(path) = join_within(&self.config.root, relative_path) else {
            warn!("Rejected delete outside the storage root: {relative_path}");
            return Err(StorageError::NotFound {
                path: relative_path.to_string(),
            });
        };

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => {}
            _ => {
                return Err(StorageError::NotFound {
                    path: relative_path.to_string(),
                });
            }
        }

        fs::remove_file(&path).await?;
        info!("Deleted {relative_path}");
        Ok(())
    }

    /// Resolves the on-disk path a download is served from.
    ///
    /// The directory is chosen by the filename's extension, independent of
    /// where the asset was uploaded to.
    ///
    /// # Errors
    ///
    /// - `StorageError::NotFound` - If the resolved path escapes the root or is not an existing file
    pub async fn resolve_serve(&self, filename: &str) -> Result<PathBuf, StorageError> {
        let directory = resolve_serve_directory(&self.config.root, filename);
        let not_found = || StorageError::NotFound {
            path: filename.to_string(),
        };

        let path = join_within(&directory, filename).ok_or_else(not_found)?;

        match fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(path),
            _ => Err(not_found()),
        }
    }

    /// Lists all stored files as root-relative paths, sorted.
    pub async fn list(&self) -> Vec<String> {
        list_relative(&self.config.root).await
    }

    /// Computes current usage of the whole tree.
    pub async fn summary(&self) -> StorageSummary {
        compute_summary(&self.config.root).await
    }

    fn is_extension_allowed(&self, filename: &str) -> bool {
        match extension_of(filename) {
            Some(extension) => self
                .config
                .allowed_extensions
                .contains(&extension.as_str()),
            None => false,
        }
    }
}

/// Joins a relative path under `base`, rejecting anything that could
/// escape it. Absolute paths, `..`, and drive prefixes all fail.
fn join_within(base: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative);
    let mut joined = base.to_path_buf();

    for component in relative.components() {
        match component {
            Component::Normal(segment) => joined.push(segment),
            Component::CurDir => {}
            _ => return None,
        }
    }

    Some(joined)
}
