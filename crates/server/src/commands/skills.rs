//! CLI handler for the `skills` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::OutputFormat;

/// Handle the `skills` command: print the selectable local skill labels.
pub(crate) fn handle_skills_command(data_dir: PathBuf, format: OutputFormat) -> Result<()> {
    let recommender = super::build_recommender(&data_dir)?;
    let labels = recommender.selectable_labels();

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "skills": labels }))?
            );
        }
        OutputFormat::Text => {
            for label in labels {
                println!("{label}");
            }
        }
    }

    Ok(())
}
