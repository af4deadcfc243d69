//! End-to-end recommendation orchestration.
//!
//! [`Assets`] bundles the six immutable artifacts loaded at startup;
//! [`Recommender`] runs the full pipeline against a shared `Arc<Assets>`.
//! Requests only ever allocate their own ephemeral query vector and result
//! list, so the bundle is safely shared across concurrent requests without
//! locking.

use std::sync::Arc;

use serde::Serialize;

use crate::enrich::{enrich_neighbors, BridgeTable, OccupationCatalog, SurveyTable};
use crate::error::RecommendError;
use crate::index::NeighborIndex;
use crate::translate::SkillTranslator;
use crate::types::OccupationMatch;
use crate::vectorize::{vectorize, FeatureSpace};

/// Fixed number of neighbors requested per recommendation.
pub const NEIGHBOR_COUNT: usize = 5;

/// The immutable reference datasets the pipeline runs against.
///
/// Constructed once at startup (see `oficio-data`) and never mutated; the
/// pipeline receives it explicitly rather than through process-global state.
#[derive(Debug, Clone)]
pub struct Assets {
    /// Ordered canonical skill columns of the reference matrix.
    pub space: FeatureSpace,
    /// Pre-built nearest-neighbor index over the occupations.
    pub index: NeighborIndex,
    /// Occupation id → canonical title catalog.
    pub catalog: OccupationCatalog,
    /// Canonical title → local occupation bridge table.
    pub bridge: BridgeTable,
    /// Local survey observations for prevalence counts.
    pub survey: SurveyTable,
    /// Local label → canonical skill translator.
    pub translator: SkillTranslator,
}

/// A successful recommendation: at most [`NEIGHBOR_COUNT`] matches in
/// neighbor-lookup order, plus the resolved/dropped label split so callers
/// can see which inputs actually contributed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    /// Enriched matches, ascending distance.
    pub matches: Vec<OccupationMatch>,
    /// Canonical skills that drove the query, deduplicated, stable order.
    pub resolved: Vec<String>,
    /// Input labels that failed translation and were dropped.
    pub dropped: Vec<String>,
}

/// Runs the recommendation pipeline over shared [`Assets`].
#[derive(Debug, Clone)]
pub struct Recommender {
    assets: Arc<Assets>,
}

impl Recommender {
    /// Creates a recommender over the loaded assets.
    #[must_use]
    pub fn new(assets: Arc<Assets>) -> Self {
        Self { assets }
    }

    /// Shared view of the underlying assets.
    #[must_use]
    pub fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Sorted, deduplicated local skill labels the translator accepts,
    /// suitable for a picker UI.
    #[must_use]
    pub fn selectable_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .assets
            .translator
            .local_labels()
            .map(str::to_string)
            .collect();
        labels.sort();
        labels
    }

    /// Recommends the five occupations closest to the given skill labels.
    ///
    /// Labels are deduplicated after normalization; unresolved labels are
    /// dropped and reported, not rejected. Errors only when the input is
    /// empty ([`RecommendError::NoSkillsProvided`]) or nothing resolved
    /// ([`RecommendError::NoSkillsRecognized`]).
    pub fn recommend(&self, labels: &[String]) -> Result<Recommendation, RecommendError> {
        if labels.is_empty() {
            return Err(RecommendError::NoSkillsProvided);
        }

        let resolution = self.assets.translator.resolve(labels);
        if resolution.canonical.is_empty() {
            return Err(RecommendError::NoSkillsRecognized {
                dropped: resolution.dropped,
            });
        }

        let vector = vectorize(&resolution.canonical, &self.assets.space);
        let neighbors = self.assets.index.query(&vector, NEIGHBOR_COUNT);
        let matches = enrich_neighbors(
            &neighbors,
            &self.assets.catalog,
            &self.assets.bridge,
            &self.assets.survey,
        );

        tracing::debug!(
            target: "oficio::pipeline",
            resolved = resolution.canonical.len(),
            dropped = resolution.dropped.len(),
            matches = matches.len(),
            "Recommendation computed"
        );

        Ok(Recommendation {
            matches,
            resolved: resolution.canonical.into_iter().collect(),
            dropped: resolution.dropped,
        })
    }
}
