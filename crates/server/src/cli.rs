use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Default bind address for the HTTP server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Default data directory holding the reference artifacts.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Output format for one-shot commands.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON, one document on stdout.
    Json,
}

/// Command-line interface for the `oficio` application.
#[derive(Debug, Parser)]
#[command(
    name = "oficio",
    about = "Matches a set of skills to the closest occupations, with local labor-market context"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available `oficio` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Runs the HTTP server (API + web UI). This is the default command.
    Serve {
        /// Socket address to bind (overrides `OFICIO_BIND`).
        #[arg(long, env = "OFICIO_BIND", default_value = DEFAULT_BIND, value_name = "ADDR")]
        bind: String,
        /// Directory holding the reference artifacts (overrides `OFICIO_DATA_DIR`).
        #[arg(long, env = "OFICIO_DATA_DIR", default_value = DEFAULT_DATA_DIR, value_name = "DIR")]
        data_dir: PathBuf,
        /// Comma-separated CORS origins to allow (overrides `OFICIO_CORS_ORIGINS`).
        #[arg(long, env = "OFICIO_CORS_ORIGINS", value_name = "ORIGINS")]
        cors_origins: Option<String>,
    },
    /// Recommends occupations for the given skill labels and exits.
    Recommend {
        /// Skill labels, local language, case/accent insensitive.
        #[arg(required = true, value_name = "SKILL")]
        skills: Vec<String>,
        /// Directory holding the reference artifacts.
        #[arg(long, env = "OFICIO_DATA_DIR", default_value = DEFAULT_DATA_DIR, value_name = "DIR")]
        data_dir: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists the selectable skill labels from the translation table.
    Skills {
        /// Directory holding the reference artifacts.
        #[arg(long, env = "OFICIO_DATA_DIR", default_value = DEFAULT_DATA_DIR, value_name = "DIR")]
        data_dir: PathBuf,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Commands {
    /// The bare `oficio` invocation serves with the same settings clap
    /// would resolve for `oficio serve`: `OFICIO_*` environment variables
    /// (which is also where config-file values land) with the documented
    /// fallbacks.
    fn default() -> Self {
        Self::Serve {
            bind: std::env::var("OFICIO_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string()),
            data_dir: std::env::var("OFICIO_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            cors_origins: std::env::var("OFICIO_CORS_ORIGINS").ok(),
        }
    }
}
