//! Core recommendation pipeline for the `oficio` application.
//!
//! This crate provides:
//! - Accent/case-insensitive normalization of skill labels
//! - Translation from local skill labels to the canonical feature space
//! - Sparse vector encoding over the reference skill columns
//! - Nearest-neighbor lookup against a pre-built occupation index
//! - Enrichment of matches with localized labor-market context
//!
//! The pipeline operates on an immutable [`Assets`] bundle constructed once
//! at startup and shared across requests; no component mutates shared state.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Enrichment of neighbor matches with localized context.
pub mod enrich;
/// Error types for the recommendation pipeline.
pub mod error;
/// Nearest-neighbor lookup over the pre-built occupation index.
pub mod index;
/// Skill label normalization.
pub mod normalize;
/// End-to-end recommendation orchestration.
pub mod pipeline;
/// Translation from local skill labels to canonical skills.
pub mod translate;
/// Shared value types.
pub mod types;
/// Feature-space vector encoding.
pub mod vectorize;

pub use enrich::{enrich_neighbors, BridgeRow, BridgeTable, OccupationCatalog, SurveyTable};
pub use error::RecommendError;
pub use index::{IndexRow, Neighbor, NeighborIndex};
pub use normalize::normalize_label;
pub use pipeline::{Assets, Recommendation, Recommender, NEIGHBOR_COUNT};
pub use translate::{Resolution, SkillTranslator};
pub use types::{Affinity, LocalContext, OccupationMatch};
pub use vectorize::{vectorize, FeatureSpace};
