//! This crate provides the service surface for the `oficio` application:
//! the HTTP API and embedded web page, the command-line interface, and
//! configuration loading.
//!
//! The main entry point is [`run`], which initializes logging, applies the
//! configuration file, parses the CLI, and dispatches the chosen command.
//! The recommendation logic itself lives in `oficio-core`; artifact loading
//! lives in `oficio-data`. If the reference datasets fail to load, startup
//! fails atomically and no requests are served.

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

/// Command-line definitions.
pub mod cli;
mod commands;
/// Configuration file support.
pub mod config;
/// HTTP API surface.
pub mod http;
/// Embedded web UI.
pub mod ui;

/// The main entry point for the `oficio` application.
pub fn run() -> Result<()> {
    config::apply_config_to_env();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Commands::Serve {
            bind,
            data_dir,
            cors_origins,
        } => commands::serve::handle_serve_command(bind, data_dir, cors_origins),
        Commands::Recommend {
            skills,
            data_dir,
            format,
        } => commands::recommend::handle_recommend_command(skills, data_dir, format),
        Commands::Skills { data_dir, format } => {
            commands::skills::handle_skills_command(data_dir, format)
        }
    }
}
