//! Upload and serve routing over the fixed directory tree.
//!
//! Uploads are routed by the asset type the client declares in the form.
//! Downloads are routed by filename extension alone. The two mappings are
//! intentionally independent: an asset uploaded under a declared type is
//! only reachable over HTTP if its extension routes back to the same
//! subdirectory.

use std::path::{Path, PathBuf};

/// Asset categories recognized by the store.
///
/// Each kind maps to at most one fixed subdirectory under the storage root.
/// `Html` and `Unknown` assets live directly in the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Page markup, stored at the root
    Html,
    /// Stylesheets, stored under `css/`
    Css,
    /// Scripts, stored under `js/`
    Js,
    /// Raster images, stored under `images/`
    Image,
    /// Font files, stored under `fonts/`
    Font,
    /// Anything else, stored at the root
    Unknown,
}

impl AssetKind {
    /// Resolves the kind from the asset type declared in an upload form.
    pub fn from_declared_type(declared: &str) -> Self {
        match declared {
            "html" => AssetKind::Html,
            "css" => AssetKind::Css,
            "js" => AssetKind::Js,
            "images" => AssetKind::Image,
            "fonts" => AssetKind::Font,
            _ => AssetKind::Unknown,
        }
    }

    /// Resolves the kind from a filename extension (without the dot).
    ///
    /// Matching is case-insensitive. Extensions outside the known set
    /// resolve to `Unknown`; fonts are never reached this way because no
    /// font extension participates in serve routing.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_lowercase().as_str() {
            "html" => AssetKind::Html,
            "css" => AssetKind::Css,
            "js" => AssetKind::Js,
            "png" | "jpg" | "jpeg" | "gif" => AssetKind::Image,
            _ => AssetKind::Unknown,
        }
    }

    /// Resolves the kind of a filename by its extension.
    pub fn from_filename(filename: &str) -> Self {
        match extension_of(filename) {
            Some(extension) => Self::from_extension(&extension),
            None => AssetKind::Unknown,
        }
    }

    /// Subdirectory this kind lives in, or `None` for the storage root.
    pub fn subdirectory(self) -> Option<&'static str> {
        match self {
            AssetKind::Css => Some("css"),
            AssetKind::Js => Some("js"),
            AssetKind::Image => Some("images"),
            AssetKind::Font => Some("fonts"),
            AssetKind::Html | AssetKind::Unknown => None,
        }
    }
}

/// Extension of a filename, lowercased, without the dot.
///
/// Returns `None` when the filename has no dot. Only the segment after the
/// last dot counts, so `archive.tar.gz` yields `gz`.
pub fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
}

/// Destination resolved for an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// Absolute directory the file will be written into
    pub directory: PathBuf,
    /// Path relative to the storage root, with forward slashes, shown to clients
    pub display_path: String,
}

/// Resolves where an upload lands based on the declared asset type.
pub fn resolve_upload_target(root: &Path, declared: &str, filename: &str) -> UploadTarget {
    let kind = AssetKind::from_declared_type(declared);
    match kind.subdirectory() {
        Some(subdirectory) => UploadTarget {
            directory: root.join(subdirectory),
            display_path: format!("{subdirectory}/{filename}"),
        },
        None => UploadTarget {
            directory: root.to_path_buf(),
            display_path: filename.to_string(),
        },
    }
}

/// Resolves the directory a download is served from, by extension alone.
pub fn resolve_serve_directory(root: &Path, filename: &str) -> PathBuf {
    match AssetKind::from_filename(filename).subdirectory() {
        Some(subdirectory) => root.join(subdirectory),
        None => root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_declared_type() {
        assert_eq!(AssetKind::from_declared_type("css"), AssetKind::Css);
        assert_eq!(AssetKind::from_declared_type("js"), AssetKind::Js);
        assert_eq!(AssetKind::from_declared_type("images"), AssetKind::Image);
        assert_eq!(AssetKind::from_declared_type("fonts"), AssetKind::Font);
        assert_eq!(AssetKind::from_declared_type("html"), AssetKind::Html);
        assert_eq!(AssetKind::from_declared_type("video"), AssetKind::Unknown);
        assert_eq!(AssetKind::from_declared_type(""), AssetKind::Unknown);
    }

    #[test]
    fn test_kind_from_extension_is_case_insensitive() {
        assert_eq!(AssetKind::from_extension("CSS"), AssetKind::Css);
        assert_eq!(AssetKind::from_extension("Jpeg"), AssetKind::Image);
        assert_eq!(AssetKind::from_extension("PNG"), AssetKind::Image);
    }

    #[test]
    fn test_kind_from_extension_unknown_falls_to_root() {
        assert_eq!(AssetKind::from_extension("html"), AssetKind::Html);
        assert_eq!(AssetKind::from_extension("ico"), AssetKind::Unknown);
        assert_eq!(AssetKind::from_extension("woff2"), AssetKind::Unknown);
        assert_eq!(AssetKind::from_extension("html").subdirectory(), None);
        assert_eq!(AssetKind::from_extension("ico").subdirectory(), None);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("style.css"), Some("css".to_string()));
        assert_eq!(extension_of("photo.JPG"), Some("jpg".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn test_upload_target_routes_declared_css_to_subdirectory() {
        let target = resolve_upload_target(Path::new("/srv/site"), "css", "style.css");
        assert_eq!(target.directory, PathBuf::from("/srv/site/css"));
        assert_eq!(target.display_path, "css/style.css");
    }

    #[test]
    fn test_upload_target_routes_html_and_unknown_to_root() {
        let html = resolve_upload_target(Path::new("/srv/site"), "html", "index.html");
        assert_eq!(html.directory, PathBuf::from("/srv/site"));
        assert_eq!(html.display_path, "index.html");

        let unknown = resolve_upload_target(Path::new("/srv/site"), "other", "favicon.ico");
        assert_eq!(unknown.directory, PathBuf::from("/srv/site"));
        assert_eq!(unknown.display_path, "favicon.ico");
    }

    #[test]
    fn test_serve_directory_by_extension() {
        let root = Path::new("/srv/site");
        assert_eq!(
            resolve_serve_directory(root, "style.css"),
            PathBuf::from("/srv/site/css")
        );
        assert_eq!(
            resolve_serve_directory(root, "app.js"),
            PathBuf::from("/srv/site/js")
        );
        assert_eq!(
            resolve_serve_directory(root, "logo.png"),
            PathBuf::from("/srv/site/images")
        );
        assert_eq!(
            resolve_serve_directory(root, "index.html"),
            PathBuf::from("/srv/site")
        );
        assert_eq!(
            resolve_serve_directory(root, "notes"),
            PathBuf::from("/srv/site")
        );
    }

    #[test]
    fn test_upload_and_serve_routing_disagree_for_fonts() {
        // Fonts upload into fonts/ but no extension serves from there,
        // so a served font filename resolves to the root and misses.
        let root = Path::new("/srv/site");
        let target = resolve_upload_target(root, "fonts", "body.woff2");
        assert_eq!(target.directory, PathBuf::from("/srv/site/fonts"));
        assert_eq!(
            resolve_serve_directory(root, "body.woff2"),
            PathBuf::from("/srv/site")
        );
    }
}
