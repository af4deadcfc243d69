//! CLI handler for the `recommend` command.

use std::path::PathBuf;

use anyhow::Result;
use oficio_core::RecommendError;

use crate::cli::OutputFormat;

/// Handle the `recommend` command: run the pipeline once and print the
/// result. User-input errors (nothing provided, nothing recognized) are
/// reported on stdout, not as process failures.
pub(crate) fn handle_recommend_command(
    skills: Vec<String>,
    data_dir: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let recommender = super::build_recommender(&data_dir)?;

    match recommender.recommend(&skills) {
        Ok(recommendation) => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&recommendation)?);
            }
            OutputFormat::Text => {
                for (rank, m) in recommendation.matches.iter().enumerate() {
                    match &m.local {
                        Some(local) => println!(
                            "{}. {} -> {} (afinidad {}, {} registros locales)",
                            rank + 1,
                            m.title,
                            local.name,
                            local.affinity,
                            local.prevalence
                        ),
                        None => println!(
                            "{}. {} (sin correspondencia local)",
                            rank + 1,
                            m.title
                        ),
                    }
                }
                if !recommendation.dropped.is_empty() {
                    println!("No reconocidas: {}", recommendation.dropped.join(", "));
                }
            }
        },
        Err(err) => match format {
            OutputFormat::Json => {
                let body = match &err {
                    RecommendError::NoSkillsRecognized { dropped } => serde_json::json!({
                        "error": { "code": err.code(), "message": err.to_string(), "dropped": dropped }
                    }),
                    RecommendError::NoSkillsProvided => serde_json::json!({
                        "error": { "code": err.code(), "message": err.to_string() }
                    }),
                };
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            OutputFormat::Text => {
                println!("{err}");
            }
        },
    }

    Ok(())
}
