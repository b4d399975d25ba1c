// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    pub assets: AssetsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    /// Mount point of the site handler (collected static root only)
    pub static_prefix: String,
    /// Mount point of the API handler (full search list, CORS enabled)
    pub api_prefix: String,
}

/// Asset search locations
///
/// Passed to the resolver at construction time, nothing is read from
/// the environment afterwards.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    /// Collected static files root, searched first
    pub static_root: PathBuf,
    /// Project base directory; `staticfiles/` and `static/` below it are fallbacks
    pub base_dir: PathBuf,
    /// Install directory of the admin UI package, its `static/admin/` subtree is searched
    #[serde(default)]
    pub admin_package_dir: Option<PathBuf>,
    /// Leading path segment(s) that select the admin package assets; a trailing `/` is optional
    #[serde(default = "default_admin_prefix")]
    pub admin_prefix: String,
}

#[allow(clippy::missing_const_for_fn)]
fn default_admin_prefix() -> String {
    "admin/".to_string()
}

impl AssetsConfig {
    /// Config with the default admin prefix and no admin package
    pub fn new(static_root: impl Into<PathBuf>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_root: static_root.into(),
            base_dir: base_dir.into(),
            admin_package_dir: None,
            admin_prefix: default_admin_prefix(),
        }
    }

    #[must_use]
    pub fn with_admin_package_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.admin_package_dir = Some(dir.into());
        self
    }
}
