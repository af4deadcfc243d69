//! Shared value types for the recommendation pipeline.

use serde::{Deserialize, Serialize};

/// Cross-reference affinity score clamped to [0.0, 1.0] and rounded to two
/// decimal places.
///
/// The bridge table stores the strength of the match between a reference
/// occupation and its local counterpart; responses always present it with
/// two-decimal precision.
///
/// # Examples
///
/// ```
/// use oficio_core::Affinity;
///
/// let a = Affinity::new(0.876);
/// assert_eq!(a.value(), 0.88);
///
/// // Out-of-range values are clamped before rounding.
/// assert_eq!(Affinity::new(1.7).value(), 1.0);
/// assert_eq!(Affinity::new(-0.2).value(), 0.0);
/// ```
// `from`/`into` rather than `transparent` so deserialized values also pass
// through the clamp and rounding in `new`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Affinity(f64);

impl Affinity {
    /// Creates an affinity, clamping to [0.0, 1.0] and rounding to 2 decimals.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self((value.clamp(0.0, 1.0) * 100.0).round() / 100.0)
    }

    /// The rounded affinity value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Affinity {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Affinity> for f64 {
    fn from(affinity: Affinity) -> Self {
        affinity.0
    }
}

impl std::fmt::Display for Affinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Localized labor-market context attached to a matched occupation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalContext {
    /// Occupation name in the local classification.
    pub name: String,
    /// Free-text description from the local classification.
    pub description: String,
    /// Strength of the cross-reference match, 0.00 to 1.00.
    pub affinity: Affinity,
    /// Exact count of local survey rows carrying this occupation name.
    pub prevalence: u64,
}

/// One recommended occupation, in neighbor-lookup order.
///
/// `local` is `None` when the canonical title has no bridge-table row; it is
/// always serialized (as `null`) so callers can tell "no local match" apart
/// from an omitted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupationMatch {
    /// Opaque reference identifier of the occupation.
    pub code: String,
    /// Canonical occupation title.
    pub title: String,
    /// Distance reported by the neighbor lookup; smaller is more similar.
    pub distance: f64,
    /// Localized enrichment, explicitly `null` when absent.
    pub local: Option<LocalContext>,
}
