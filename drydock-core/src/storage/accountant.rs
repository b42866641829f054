//! Recursive storage accounting over the asset tree.
//!
//! Walks the storage root on every call rather than caching counts, so the
//! numbers always reflect the filesystem at the moment of the request.
//! Entries that vanish mid-walk are skipped instead of failing the whole
//! accounting pass.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tokio::fs;

/// Aggregate usage of the storage tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageSummary {
    /// Total size of all files, in bytes
    pub total_size: u64,
    /// Total size in mebibytes, rounded to two decimals
    pub total_size_mb: f64,
    /// Number of files under the root, recursively
    pub file_count: usize,
}

impl StorageSummary {
    /// Summary of an empty tree.
    pub fn empty() -> Self {
        Self {
            total_size: 0,
            total_size_mb: 0.0,
            file_count: 0,
        }
    }
}

/// Computes total size and file count under `root`, recursively.
///
/// A missing root yields the empty summary. Unreadable entries are skipped.
pub async fn compute_summary(root: &Path) -> StorageSummary {
    let mut total_size = 0u64;
    let mut file_count = 0usize;

    for path in walk_files(root).await {
        let Ok(metadata) = fs::metadata(&path).await else {
            continue;
        };
        total_size += metadata.len();
        file_count += 1;
    }

    StorageSummary {
        total_size,
        total_size_mb: round_mb(total_size),
        file_count,
    }
}

/// Lists all files under `root` as root-relative paths with forward slashes.
///
/// Results are sorted for stable listings across platforms.
pub async fn list_relative(root: &Path) -> Vec<String> {
    let mut relative: Vec<String> = walk_files(root)
        .await
        .into_iter()
        .filter_map(|path| {
            let stripped = path.strip_prefix(root).ok()?;
            let segments: Vec<&str> = stripped
                .components()
                .filter_map(|component| match component {
                    Component::Normal(segment) => segment.to_str(),
                    _ => None,
                })
                .collect();
            if segments.is_empty() {
                None
            } else {
                Some(segments.join("/"))
            }
        })
        .collect();

    relative.sort();
    relative
}

/// Collects every regular file under `root` with an iterative walk.
async fn walk_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];

    while let Some(directory) = pending.pop() {
        let Ok(mut entries) = fs::read_dir(&directory).await else {
            continue;
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let Ok(file_type) = entry.file_type().await else {
                continue;
            };
            if file_type.is_dir() {
                pending.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }

    files
}

fn round_mb(bytes: u64) -> f64 {
    let mb = bytes as f64 / (1024.0 * 1024.0);
    (mb * 100.0).round() / 100.0
}
