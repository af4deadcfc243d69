//! Artifact reading and validation.
//!
//! Artifact layout inside the data directory:
//!
//! | file                   | content                                        |
//! |------------------------|------------------------------------------------|
//! | `feature_columns.json` | ordered canonical skill columns                |
//! | `index.json`           | pre-built neighbor rows `{ code, vector }`     |
//! | `occupations.json`     | reference catalog rows `{ code, title }`       |
//! | `bridge.json`          | `{ title, local_name, description, affinity }` |
//! | `survey.json`          | local survey rows `{ occupation }`             |
//! | `translations.json`    | `{ local, canonical }` label pairs             |

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use oficio_core::{
    Assets, BridgeTable, FeatureSpace, NeighborIndex, OccupationCatalog, SkillTranslator,
    SurveyTable,
};

/// The artifact file names expected inside the data directory.
pub const ARTIFACT_FILES: [&str; 6] = [
    "feature_columns.json",
    "index.json",
    "occupations.json",
    "bridge.json",
    "survey.json",
    "translations.json",
];

/// Fatal startup errors: the service must refuse to serve when any occurs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An artifact file could not be read.
    #[error("failed to read artifact {path}")]
    Io {
        /// Path of the unreadable artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An artifact file was read but could not be parsed.
    #[error("failed to parse artifact {path}")]
    Parse {
        /// Path of the malformed artifact.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// An index row's vector length does not match the feature space.
    #[error("index row {code} has vector length {actual}, expected {expected}")]
    VectorLength {
        /// Occupation code of the offending row.
        code: String,
        /// Expected length (number of feature columns).
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },

    /// An index row references an occupation absent from the catalog.
    #[error("index row {code} has no catalog entry")]
    UnknownOccupation {
        /// The uncataloged occupation code.
        code: String,
    },
}

#[derive(Debug, Deserialize)]
struct OccupationRow {
    code: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct TranslationRow {
    local: String,
    canonical: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and validates all six artifacts from `dir` into an [`Assets`]
/// bundle.
///
/// Atomic: the first missing file, parse failure, or inconsistency aborts
/// the load. On success every index vector matches the feature-space width
/// and every indexed occupation has a catalog title.
pub fn load_assets(dir: &Path) -> Result<Assets, LoadError> {
    let space: FeatureSpace = read_json(&dir.join("feature_columns.json"))?;
    let index: NeighborIndex = read_json(&dir.join("index.json"))?;
    let occupations: Vec<OccupationRow> = read_json(&dir.join("occupations.json"))?;
    let bridge: BridgeTable = read_json(&dir.join("bridge.json"))?;
    let survey: SurveyTable = read_json(&dir.join("survey.json"))?;
    let translations: Vec<TranslationRow> = read_json(&dir.join("translations.json"))?;

    let catalog =
        OccupationCatalog::from_pairs(occupations.into_iter().map(|row| (row.code, row.title)));
    let translator = SkillTranslator::from_pairs(
        translations
            .into_iter()
            .map(|row| (row.local, row.canonical)),
    );

    for row in index.rows() {
        if row.vector.len() != space.len() {
            return Err(LoadError::VectorLength {
                code: row.code.clone(),
                expected: space.len(),
                actual: row.vector.len(),
            });
        }
        if catalog.title(&row.code).is_none() {
            return Err(LoadError::UnknownOccupation {
                code: row.code.clone(),
            });
        }
    }

    tracing::info!(
        target: "oficio::data",
        dir = %dir.display(),
        columns = space.len(),
        occupations = index.len(),
        bridged = bridge.len(),
        survey_rows = survey.len(),
        translations = translator.len(),
        "Reference datasets loaded"
    );

    Ok(Assets {
        space,
        index,
        catalog,
        bridge,
        survey,
        translator,
    })
}
