//! CLI command handlers.

pub(crate) mod recommend;
pub(crate) mod serve;
pub(crate) mod skills;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use oficio_core::Recommender;

/// Loads the reference datasets and builds the recommender, failing the
/// whole command when any artifact is missing or inconsistent.
pub(crate) fn build_recommender(data_dir: &Path) -> Result<Recommender> {
    let assets = oficio_data::load_assets(data_dir).with_context(|| {
        format!(
            "failed to load reference datasets from {}",
            data_dir.display()
        )
    })?;
    Ok(Recommender::new(Arc::new(assets)))
}
