//! Configuration data structures for vl-convert-service.
//!
//! Defines the schema for the application settings: the HTTP listener,
//! converter behavior (resource allow-list, font directory), and logging.

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port).
    #[serde(default)]
    pub server: ServerConfig,

    /// Chart conversion settings.
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `127.0.0.1`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `8000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    /// Default: `33554432` (32 MB, chart specs may carry inline datasets)
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

/// Settings for the chart converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Base URL prefixes a chart specification may reference for external
    /// data loading. Anything outside this list is rejected by the converter.
    /// Default: the Vega datasets repository.
    #[serde(default = "default_allowed_base_urls")]
    pub allowed_base_urls: Vec<String>,

    /// Directory of font files to register with the renderer at startup.
    /// Skipped if the directory does not exist.
    /// Default: `fonts`
    #[serde(default = "default_font_dir")]
    pub font_dir: String,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            allowed_base_urls: default_allowed_base_urls(),
            font_dir: default_font_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_body_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_allowed_base_urls() -> Vec<String> {
    vec!["https://vega.github.io/vega-datasets/".to_string()]
}

fn default_font_dir() -> String {
    "fonts".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
