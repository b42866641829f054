//! Centralized configuration for Drydock.
//!
//! All tunable parameters are defined here to avoid hard-coded values
//! scattered throughout the codebase. The configuration is immutable:
//! it is constructed once at process start and passed explicitly into
//! each component.

use std::path::PathBuf;

/// Subdirectories created under the storage root at startup.
const FIXED_SUBDIRECTORIES: &[&str] = &["css", "js", "images", "fonts"];

/// Upload extensions accepted by the asset store (lowercase, without the dot).
const ALLOWED_EXTENSIONS: &[&str] = &["html", "css", "js", "png", "jpg", "jpeg", "gif", "ico"];

/// Central configuration for all Drydock components.
///
/// Groups related settings into logical sections and supports environment
/// variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct DrydockConfig {
    pub storage: StorageConfig,
    pub server: ServerConfig,
}

/// Asset storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory tree holding all managed site assets
    pub root: PathBuf,
    /// Fixed subdirectories created eagerly under the root
    pub subdirectories: &'static [&'static str],
    /// Extensions accepted by the upload handler
    pub allowed_extensions: &'static [&'static str],
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("site"),
            subdirectories: FIXED_SUBDIRECTORIES,
            allowed_extensions: ALLOWED_EXTENSIONS,
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host the listener binds to
    pub host: String,
    /// Port the listener binds to
    pub port: u16,
    /// Storage ceiling shown by the control panel, in bytes.
    /// Cosmetic only: the server never enforces it.
    pub max_storage_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_storage_bytes: 100 * 1024 * 1024, // 100 MiB
        }
    }
}

impl ServerConfig {
    /// Address string suitable for binding a TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DrydockConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via `DRYDOCK_*` variables while
    /// maintaining sensible defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(root) = std::env::var("DRYDOCK_ROOT") {
            config.storage.root = PathBuf::from(root);
        }

        if let Ok(host) = std::env::var("DRYDOCK_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("DRYDOCK_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.server.port = port;
            }
        }

        config
    }

    /// Creates a configuration rooted at a caller-chosen directory,
    /// typically a temporary one in tests.
    pub fn for_testing(root: impl Into<PathBuf>) -> Self {
        let mut config = Self::default();
        config.storage.root = root.into();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = DrydockConfig::default();

        assert_eq!(config.storage.root, PathBuf::from("site"));
        assert_eq!(
            config.storage.subdirectories,
            &["css", "js", "images", "fonts"][..]
        );
        assert!(config.storage.allowed_extensions.contains(&"html"));
        assert!(config.storage.allowed_extensions.contains(&"ico"));
        assert!(!config.storage.allowed_extensions.contains(&"exe"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_storage_bytes, 104_857_600);
    }

    #[test]
    fn test_bind_address() {
        let config = DrydockConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_for_testing_overrides_root() {
        let config = DrydockConfig::for_testing("/tmp/drydock-test");
        assert_eq!(config.storage.root, PathBuf::from("/tmp/drydock-test"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_env_override() {
        unsafe {
            std::env::set_var("DRYDOCK_ROOT", "/srv/assets");
            std::env::set_var("DRYDOCK_HOST", "0.0.0.0");
            std::env::set_var("DRYDOCK_PORT", "9000");
        }

        let config = DrydockConfig::from_env();

        assert_eq!(config.storage.root, PathBuf::from("/srv/assets"));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);

        // An unparseable port falls back to the default.
        unsafe {
            std::env::set_var("DRYDOCK_PORT", "not-a-port");
        }
        assert_eq!(DrydockConfig::from_env().server.port, 8080);

        // Cleanup
        unsafe {
            std::env::remove_var("DRYDOCK_ROOT");
            std::env::remove_var("DRYDOCK_HOST");
            std::env::remove_var("DRYDOCK_PORT");
        }
    }
}
