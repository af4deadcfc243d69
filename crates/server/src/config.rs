//! Configuration file support for oficio.
//!
//! Loads settings from `~/.oficio/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.oficio/config.toml
//!
//! [serve]
//! # Bind address for the HTTP server
//! bind = "127.0.0.1:8080"
//!
//! # Directory holding the reference artifacts
//! data_dir = "/srv/oficio/data"
//!
//! # CORS allowed origins (comma-separated)
//! cors_origins = "http://localhost:3000,https://app.example.com"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Serve command configuration.
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Configuration for the serve command.
#[derive(Debug, Default, Deserialize)]
pub struct ServeConfig {
    /// Bind address for the HTTP server.
    pub bind: Option<String>,
    /// Directory holding the reference artifacts.
    pub data_dir: Option<String>,
    /// Comma-separated list of allowed CORS origins.
    pub cors_origins: Option<String>,
}

/// Returns the path to the config file (~/.oficio/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".oficio").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Ok(Some(config))` if the file exists and parses successfully.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;

    tracing::debug!(
        target: "oficio::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file.
///
/// This should be called early in the application startup, before
/// parsing CLI arguments.
pub fn apply_config_to_env() {
    if let Ok(Some(config)) = load_config() {
        apply_serve_config_to_env(&config.serve);
    }
}

/// Applies serve configuration to environment variables.
fn apply_serve_config_to_env(serve: &ServeConfig) {
    // Helper to set env var only if not already set
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "oficio::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(ref bind) = serve.bind {
        set_if_absent("OFICIO_BIND", bind);
    }

    if let Some(ref dir) = serve.data_dir {
        set_if_absent("OFICIO_DATA_DIR", dir);
    }

    if let Some(ref origins) = serve.cors_origins {
        set_if_absent("OFICIO_CORS_ORIGINS", origins);
    }
}
