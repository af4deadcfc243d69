//! CLI handler for the `serve` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::http;

/// Handle the `serve` command: load the datasets, then serve HTTP until
/// shutdown. A failed load aborts startup; no requests are served from a
/// partially initialized state.
pub(crate) fn handle_serve_command(
    bind: String,
    data_dir: PathBuf,
    cors_origins: Option<String>,
) -> Result<()> {
    let recommender = super::build_recommender(&data_dir)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(http::serve(recommender, &bind, cors_origins.as_deref()))
}
