//! Error types for the recommendation pipeline.
//!
//! Both variants are recoverable user-input errors: the service reports
//! them as structured payloads, never as faults. Fatal startup errors live
//! in `oficio-data`, and per-item enrichment misses are not errors at all.

use thiserror::Error;

/// Recoverable errors produced by [`crate::Recommender::recommend`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The request carried no skill labels at all.
    #[error("no skills selected")]
    NoSkillsProvided,

    /// Labels were provided but none translated to a canonical skill.
    #[error("none of the provided skills were recognized")]
    NoSkillsRecognized {
        /// The labels that failed translation, original spelling.
        dropped: Vec<String>,
    },
}

impl RecommendError {
    /// Stable machine-readable code for structured error payloads.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSkillsProvided => "no_skills_provided",
            Self::NoSkillsRecognized { .. } => "no_skills_recognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let provided = RecommendError::NoSkillsProvided;
        let recognized = RecommendError::NoSkillsRecognized { dropped: vec![] };
        assert_ne!(provided.code(), recognized.code());
    }

    #[test]
    fn messages_are_user_readable() {
        assert_eq!(RecommendError::NoSkillsProvided.to_string(), "no skills selected");
        assert!(RecommendError::NoSkillsRecognized { dropped: vec!["x".into()] }
            .to_string()
            .contains("recognized"));
    }
}
