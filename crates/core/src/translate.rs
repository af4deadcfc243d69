//! Translation from local skill labels to the canonical feature space.
//!
//! The translator is built once from the static translation table and keyed
//! by the normalized form of each local label. Labels that fail to resolve
//! are dropped, not rejected; the drop is reported back to the caller so the
//! degrade-gracefully policy stays observable.

use std::collections::{BTreeSet, HashMap};

use crate::normalize::normalize_label;

/// Outcome of resolving a batch of user-supplied labels.
///
/// `canonical` is deduplicated: labels that collide after normalization, or
/// that map to the same canonical skill, count once. `dropped` preserves the
/// original (untranslated) spelling of every label that failed to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical skills, deduplicated, in stable order.
    pub canonical: BTreeSet<String>,
    /// Labels that did not resolve, original spelling, input order.
    pub dropped: Vec<String>,
}

/// One-way map from normalized local labels to canonical skill names.
///
/// The original spelling of each local label is retained for presentation
/// (the UI offers the table's labels as picker options).
#[derive(Debug, Clone)]
pub struct SkillTranslator {
    map: HashMap<String, String>,
    labels: Vec<String>,
}

impl SkillTranslator {
    /// Builds the translator from (local label, canonical skill) pairs.
    ///
    /// Keys are normalized on the way in; if two local labels normalize to
    /// the same key, the first pair wins.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: Into<String>,
    {
        let mut map = HashMap::new();
        let mut labels = Vec::new();
        for (local, canonical) in pairs {
            let key = normalize_label(local.as_ref());
            if key.is_empty() {
                continue;
            }
            if let std::collections::hash_map::Entry::Vacant(entry) = map.entry(key) {
                entry.insert(canonical.into());
                labels.push(local.as_ref().to_string());
            }
        }
        Self { map, labels }
    }

    /// The translatable local labels, original spelling, table order.
    pub fn local_labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Number of translatable local labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true when the translation table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Translates one local label to its canonical skill, if known.
    ///
    /// The label is normalized before lookup, so case and accent variants
    /// resolve identically.
    #[must_use]
    pub fn translate(&self, label: &str) -> Option<&str> {
        self.map.get(&normalize_label(label)).map(String::as_str)
    }

    /// Resolves a batch of labels, deduplicating and recording drops.
    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> Resolution {
        let mut resolution = Resolution::default();
        for label in labels {
            let label = label.as_ref();
            match self.translate(label) {
                Some(canonical) => {
                    resolution.canonical.insert(canonical.to_string());
                }
                None => {
                    tracing::debug!(
                        target: "oficio::translate",
                        label,
                        "Dropping unrecognized skill label"
                    );
                    resolution.dropped.push(label.to_string());
                }
            }
        }
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> SkillTranslator {
        SkillTranslator::from_pairs([
            ("Programación", "Programming"),
            ("Pensamiento Crítico", "Critical Thinking"),
            ("Negociación", "Negotiation"),
        ])
    }

    #[test]
    fn translates_exact_label() {
        assert_eq!(translator().translate("Programación"), Some("Programming"));
    }

    #[test]
    fn translation_ignores_case_and_accents() {
        let t = translator();
        assert_eq!(t.translate("programacion"), Some("Programming"));
        assert_eq!(t.translate("PROGRAMACIÓN"), Some("Programming"));
        assert_eq!(t.translate("  pensamiento critico "), Some("Critical Thinking"));
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(translator().translate("habilidad_inexistente"), None);
    }

    #[test]
    fn resolve_deduplicates_normalized_collisions() {
        let resolution = translator().resolve(&["Programación", "programacion"]);
        assert_eq!(resolution.canonical.len(), 1);
        assert!(resolution.canonical.contains("Programming"));
        assert!(resolution.dropped.is_empty());
    }

    #[test]
    fn resolve_reports_dropped_labels_in_order() {
        let resolution = translator().resolve(&["soldadura", "Negociación", "alfarería"]);
        assert_eq!(resolution.canonical.len(), 1);
        assert_eq!(resolution.dropped, vec!["soldadura", "alfarería"]);
    }

    #[test]
    fn first_pair_wins_on_key_collision() {
        let t = SkillTranslator::from_pairs([("Diseño", "Design"), ("diseno", "Drafting")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.translate("DISEÑO"), Some("Design"));
    }

    #[test]
    fn local_labels_keep_original_spelling() {
        let translator = translator();
        let labels: Vec<&str> = translator.local_labels().collect();
        assert_eq!(
            labels,
            vec!["Programación", "Pensamiento Crítico", "Negociación"]
        );
    }

    #[test]
    fn blank_local_labels_are_skipped() {
        let t = SkillTranslator::from_pairs([("  ", "Nothing"), ("Ventas", "Sales")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.translate("ventas"), Some("Sales"));
    }
}
