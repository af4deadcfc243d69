//! Nearest-neighbor lookup over the pre-built occupation index.
//!
//! The index is a static artifact: one reference vector per occupation, in
//! a fixed row order. Queries are answered by exact Euclidean distance over
//! every row. The contract the pipeline relies on: results are sorted by
//! non-decreasing distance, length is min(k, rows), distances are
//! non-negative, and identical inputs always produce identical output
//! (ties keep row order).

use serde::Deserialize;

/// One row of the pre-built index: an occupation id and its reference
/// vector over the feature space.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexRow {
    /// Opaque occupation identifier (e.g. an O*NET-SOC code).
    pub code: String,
    /// Reference vector, same length and column order as the feature space.
    pub vector: Vec<f64>,
}

/// A single query result.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Occupation identifier of the matched index row.
    pub code: String,
    /// Euclidean distance to the query vector; smaller is more similar.
    pub distance: f64,
}

/// Brute-force Euclidean nearest-neighbor index.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<IndexRow>")]
pub struct NeighborIndex {
    rows: Vec<IndexRow>,
}

impl NeighborIndex {
    /// Builds the index from its pre-computed rows.
    pub fn new(rows: Vec<IndexRow>) -> Self {
        Self { rows }
    }

    /// Number of indexed occupations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the index has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the indexed rows in storage order.
    pub fn rows(&self) -> impl Iterator<Item = &IndexRow> {
        self.rows.iter()
    }

    /// Returns the `min(k, len)` nearest occupations to `query`, sorted by
    /// non-decreasing distance. Ties keep row order, so repeated queries
    /// with the same vector are deterministic.
    ///
    /// An all-zero query is permitted; it simply ranks rows by distance to
    /// the origin.
    #[must_use]
    pub fn query(&self, query: &[f64], k: usize) -> Vec<Neighbor> {
        let mut neighbors: Vec<Neighbor> = self
            .rows
            .iter()
            .map(|row| Neighbor {
                code: row.code.clone(),
                distance: euclidean(query, &row.vector),
            })
            .collect();
        // Stable sort: equal distances stay in row order.
        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbors.truncate(k);
        neighbors
    }
}

impl From<Vec<IndexRow>> for NeighborIndex {
    fn from(rows: Vec<IndexRow>) -> Self {
        Self::new(rows)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> NeighborIndex {
        NeighborIndex::new(vec![
            IndexRow {
                code: "A".into(),
                vector: vec![1.0, 0.0],
            },
            IndexRow {
                code: "B".into(),
                vector: vec![0.0, 1.0],
            },
            IndexRow {
                code: "C".into(),
                vector: vec![0.5, 0.5],
            },
        ])
    }

    #[test]
    fn returns_k_nearest_sorted_ascending() {
        let neighbors = index().query(&[1.0, 0.0], 2);
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].code, "A");
        assert_eq!(neighbors[0].distance, 0.0);
        assert!(neighbors[0].distance <= neighbors[1].distance);
    }

    #[test]
    fn result_length_is_min_of_k_and_rows() {
        assert_eq!(index().query(&[0.0, 0.0], 10).len(), 3);
        assert_eq!(index().query(&[0.0, 0.0], 1).len(), 1);
        assert_eq!(index().query(&[0.0, 0.0], 0).len(), 0);
    }

    #[test]
    fn distances_are_non_negative() {
        for n in index().query(&[0.3, -0.7], 3) {
            assert!(n.distance >= 0.0);
        }
    }

    #[test]
    fn zero_vector_query_is_permitted() {
        let neighbors = index().query(&[0.0, 0.0], 3);
        assert_eq!(neighbors.len(), 3);
        // C is closest to the origin (|C| ≈ 0.707 < 1.0).
        assert_eq!(neighbors[0].code, "C");
    }

    #[test]
    fn ties_keep_row_order() {
        // A and B are equidistant from the origin.
        let neighbors = index().query(&[0.0, 0.0], 3);
        assert_eq!(neighbors[1].code, "A");
        assert_eq!(neighbors[2].code, "B");
    }

    #[test]
    fn identical_queries_are_deterministic() {
        let idx = index();
        let first = idx.query(&[0.2, 0.8], 3);
        let second = idx.query(&[0.2, 0.8], 3);
        assert_eq!(first, second);
    }
}
