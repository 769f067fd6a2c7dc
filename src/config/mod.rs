// Configuration module entry point
// Loads layered configuration: file, environment, then built-in defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{
    Config, HealthConfig, HttpConfig, LoggingConfig, PerformanceConfig, RoutesConfig,
    ServerConfig, SiteConfig,
};

impl Config {
    /// Load configuration from the default "config.toml" next to the binary
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a default, and a
    /// `SITE`-prefixed environment layer overrides both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SITE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("logging.show_headers", false)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "Tokio-Hyper/1.0")?
            .set_default("http.enable_cors", false)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB, GET/HEAD only
            .set_default("site.title", "Twirssi")?
            .set_default("site.tagline", "a twitter script for irssi")?
            .set_default("site.fragment_dir", "content")?
            .set_default("site.asset_dir", "static")?
            .set_default("site.analytics_id", "UA-190820-2")?
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

    #[test]
    fn test_defaults_load_without_file() {
        let cfg = Config::load_from("no-such-config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.site.fragment_dir, "content");
        assert_eq!(cfg.site.analytics_id, "UA-190820-2");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.routes.health.enabled);
    }

    #[test]
    fn test_default_socket_addr_parses() {
        let cfg = Config::load_from("no-such-config").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_default_favicon_paths() {
        let cfg = Config::load_from("no-such-config").unwrap();
        assert!(cfg.routes.favicon_paths.contains(&"/favicon.svg".to_string()));
    }
}
