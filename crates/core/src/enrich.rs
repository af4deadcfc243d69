//! Enrichment of neighbor matches with localized labor-market context.
//!
//! Each neighbor's canonical title is joined (exact match) against the
//! bridge table; a hit contributes the local occupation name, description,
//! affinity score, and a prevalence count taken from the local survey
//! dataset. A miss is an expected outcome, reported per item, never an
//! error.

use std::collections::HashMap;

use serde::Deserialize;

use crate::index::Neighbor;
use crate::types::{Affinity, LocalContext, OccupationMatch};

/// Maps occupation identifiers to their canonical titles.
#[derive(Debug, Clone, Default)]
pub struct OccupationCatalog {
    titles: HashMap<String, String>,
}

impl OccupationCatalog {
    /// Builds the catalog from (code, title) pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            titles: pairs
                .into_iter()
                .map(|(code, title)| (code.into(), title.into()))
                .collect(),
        }
    }

    /// Canonical title for an occupation code, if cataloged.
    #[must_use]
    pub fn title(&self, code: &str) -> Option<&str> {
        self.titles.get(code).map(String::as_str)
    }

    /// Number of cataloged occupations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Returns true when the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// One row of the cross-reference bridge table.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeRow {
    /// Canonical (reference) occupation title, the join key.
    pub title: String,
    /// Occupation name in the local classification.
    pub local_name: String,
    /// Free-text description of the local occupation.
    pub description: String,
    /// Stored cross-reference match strength, 0..1.
    pub affinity: f64,
}

/// Bridge table keyed by exact canonical title.
///
/// When the source data carries duplicate titles the first row wins, so the
/// join is deterministic.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<BridgeRow>")]
pub struct BridgeTable {
    by_title: HashMap<String, BridgeRow>,
}

impl BridgeTable {
    /// Builds the table from its rows, first row winning on duplicate titles.
    pub fn new(rows: Vec<BridgeRow>) -> Self {
        let mut by_title = HashMap::new();
        for row in rows {
            by_title.entry(row.title.clone()).or_insert(row);
        }
        Self { by_title }
    }

    /// Looks up the bridge row for a canonical title, exact match only.
    #[must_use]
    pub fn lookup(&self, title: &str) -> Option<&BridgeRow> {
        self.by_title.get(title)
    }

    /// Number of bridged titles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    /// Returns true when the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }
}

impl From<Vec<BridgeRow>> for BridgeTable {
    fn from(rows: Vec<BridgeRow>) -> Self {
        Self::new(rows)
    }
}

/// One observation row of the local survey dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct SurveyRow {
    /// Occupation name recorded for this observation.
    pub occupation: String,
}

/// The local survey dataset, scanned per neighbor for prevalence counts.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<SurveyRow>")]
pub struct SurveyTable {
    rows: Vec<SurveyRow>,
}

impl SurveyTable {
    /// Builds the table from its observation rows.
    pub fn new(rows: Vec<SurveyRow>) -> Self {
        Self { rows }
    }

    /// Exact count of observations whose occupation name equals `name`.
    ///
    /// A linear scan over the survey rows; exact by construction, never an
    /// estimate.
    #[must_use]
    pub fn prevalence(&self, name: &str) -> u64 {
        self.rows.iter().filter(|row| row.occupation == name).count() as u64
    }

    /// Number of observations in the survey.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the survey has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<SurveyRow>> for SurveyTable {
    fn from(rows: Vec<SurveyRow>) -> Self {
        Self::new(rows)
    }
}

/// Enriches neighbors in lookup order.
///
/// Output order is exactly the input order; nothing is re-sorted by
/// affinity or prevalence. A neighbor whose title has no bridge row keeps
/// its title and code with `local: None`. A neighbor whose code is absent
/// from the catalog falls back to its code as the title (the artifacts are
/// validated against this at load time, so it should not happen in a
/// running service).
pub fn enrich_neighbors(
    neighbors: &[Neighbor],
    catalog: &OccupationCatalog,
    bridge: &BridgeTable,
    survey: &SurveyTable,
) -> Vec<OccupationMatch> {
    neighbors
        .iter()
        .map(|neighbor| {
            let title = catalog.title(&neighbor.code).unwrap_or(&neighbor.code);
            let local = bridge.lookup(title).map(|row| LocalContext {
                name: row.local_name.clone(),
                description: row.description.clone(),
                affinity: Affinity::new(row.affinity),
                prevalence: survey.prevalence(&row.local_name),
            });
            if local.is_none() {
                tracing::debug!(
                    target: "oficio::enrich",
                    code = %neighbor.code,
                    title,
                    "No bridge-table match for occupation"
                );
            }
            OccupationMatch {
                code: neighbor.code.clone(),
                title: title.to_string(),
                distance: neighbor.distance,
                local,
            }
        })
        .collect()
}
