// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Prefix of environment overrides, e.g. `ASSET_SERVER__SERVER__PORT=9000`
const ENV_PREFIX: &str = "ASSET_SERVER";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "asset_server/0.1")?
            .set_default("http.static_prefix", "/static/")?
            .set_default("http.api_prefix", "/api/static/")?
            .set_default("assets.static_root", "staticfiles")?
            .set_default("assets.base_dir", ".")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("definitely-missing-config-file").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.http.static_prefix, "/static/");
        assert_eq!(cfg.http.api_prefix, "/api/static/");
        assert_eq!(cfg.assets.admin_prefix, "admin/");
        assert!(cfg.assets.admin_package_dir.is_none());
        assert_eq!(cfg.logging.access_log_format, "combined");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9100

[assets]
static_root = "/srv/collected"
base_dir = "/srv/app"
admin_package_dir = "/opt/admin-ui"
"#
        )
        .unwrap();

        let stem = dir.path().join("server");
        let cfg = Config::load_from(stem.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9100);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.assets.static_root, PathBuf::from("/srv/collected"));
        assert_eq!(
            cfg.assets.admin_package_dir,
            Some(PathBuf::from("/opt/admin-ui"))
        );
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("definitely-missing-config-file").unwrap();
        assert_eq!(cfg.get_socket_addr().unwrap().port(), 8080);
        cfg.server.host = "not an ip".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
