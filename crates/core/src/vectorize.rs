//! Feature-space vector encoding.
//!
//! A query is encoded as a fixed-length vector over the ordered canonical
//! skill columns of the reference matrix: recognized skills share uniform
//! weight summing to 1.0, everything else is 0.

use std::collections::{BTreeSet, HashMap};

use serde::Deserialize;

/// The ordered canonical skill columns of the reference matrix.
///
/// Column order is part of the pre-built index contract and must not change
/// between the index artifact and this column list.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct FeatureSpace {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl FeatureSpace {
    /// Builds the feature space from the ordered column list.
    pub fn new(columns: Vec<String>) -> Self {
        let positions = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { columns, positions }
    }

    /// Number of canonical skill columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true when the space has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column position of a canonical skill, if it exists in the space.
    #[must_use]
    pub fn position(&self, skill: &str) -> Option<usize> {
        self.positions.get(skill).copied()
    }

    /// The ordered column names.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl From<Vec<String>> for FeatureSpace {
    fn from(columns: Vec<String>) -> Self {
        Self::new(columns)
    }
}

/// Encodes a set of canonical skills as a query vector over `space`.
///
/// Skills absent from the space are ignored. When at least one skill
/// matches, matched positions carry uniform weight 1/n so the vector sums
/// to 1.0; when none match, the all-zero vector is returned unchanged, a
/// valid degenerate query rather than an error.
#[must_use]
pub fn vectorize(skills: &BTreeSet<String>, space: &FeatureSpace) -> Vec<f64> {
    let mut vector = vec![0.0; space.len()];
    let mut matched = 0usize;
    for skill in skills {
        if let Some(position) = space.position(skill) {
            vector[position] = 1.0;
            matched += 1;
        }
    }
    if matched > 0 {
        let weight = 1.0 / matched as f64;
        for entry in &mut vector {
            if *entry > 0.0 {
                *entry = weight;
            }
        }
    }
    vector
}
