//! Skill label normalization.
//!
//! Lookups against the translation table must be insensitive to case and
//! diacritics, so "Programación", "programación", and "PROGRAMACION" all
//! collide to the same key.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalizes a skill label for lookup: trims, lowercases, NFKD-decomposes,
/// and drops combining marks.
///
/// Total over all string input; an empty or whitespace-only label yields the
/// empty string.
///
/// # Examples
///
/// ```
/// use oficio_core::normalize_label;
///
/// assert_eq!(normalize_label("Programación"), "programacion");
/// assert_eq!(normalize_label("  ANÁLISIS de Datos "), "analisis de datos");
/// ```
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
