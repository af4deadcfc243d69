//! Integration tests for the atomic artifact loader.

use std::fs;
use std::path::Path;

use oficio_data::{load_assets, LoadError};
use tempfile::tempdir;

fn write_artifacts(dir: &Path) {
    fs::write(
        dir.join("feature_columns.json"),
        r#"["Programming", "Negotiation"]"#,
    )
    .unwrap();
    fs::write(
        dir.join("index.json"),
        r#"[
            { "code": "15-1252.00", "vector": [0.9, 0.1] },
            { "code": "41-3091.00", "vector": [0.2, 0.8] }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("occupations.json"),
        r#"[
            { "code": "15-1252.00", "title": "Software Developers" },
            { "code": "41-3091.00", "title": "Sales Representatives" }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("bridge.json"),
        r#"[
            {
                "title": "Software Developers",
                "local_name": "Desarrolladores de software",
                "description": "Escriben software",
                "affinity": 0.91
            }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("survey.json"),
        r#"[
            { "occupation": "Desarrolladores de software" },
            { "occupation": "Vendedores" }
        ]"#,
    )
    .unwrap();
    fs::write(
        dir.join("translations.json"),
        r#"[
            { "local": "Programación", "canonical": "Programming" },
            { "local": "Negociación", "canonical": "Negotiation" }
        ]"#,
    )
    .unwrap();
}

#[test]
fn loads_complete_artifact_set() {
    let tmp = tempdir().unwrap();
    write_artifacts(tmp.path());

    let assets = load_assets(tmp.path()).unwrap();
    assert_eq!(assets.space.len(), 2);
    assert_eq!(assets.index.len(), 2);
    assert_eq!(assets.catalog.title("15-1252.00"), Some("Software Developers"));
    assert_eq!(assets.survey.prevalence("Vendedores"), 1);
    assert_eq!(assets.translator.translate("programacion"), Some("Programming"));
}

#[test]
fn missing_artifact_fails_the_whole_load() {
    let tmp = tempdir().unwrap();
    write_artifacts(tmp.path());
    fs::remove_file(tmp.path().join("bridge.json")).unwrap();

    let err = load_assets(tmp.path()).unwrap_err();
    assert!(matches!(err, LoadError::Io { ref path, .. } if path.ends_with("bridge.json")));
}

#[test]
fn malformed_artifact_fails_the_whole_load() {
    let tmp = tempdir().unwrap();
    write_artifacts(tmp.path());
    fs::write(tmp.path().join("survey.json"), "not json").unwrap();

    let err = load_assets(tmp.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { ref path, .. } if path.ends_with("survey.json")));
}

#[test]
fn vector_width_mismatch_is_rejected() {
    let tmp = tempdir().unwrap();
    write_artifacts(tmp.path());
    fs::write(
        tmp.path().join("index.json"),
        r#"[ { "code": "15-1252.00", "vector": [0.9] } ]"#,
    )
    .unwrap();

    let err = load_assets(tmp.path()).unwrap_err();
    match err {
        LoadError::VectorLength {
            code,
            expected,
            actual,
        } => {
            assert_eq!(code, "15-1252.00");
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected VectorLength, got {other:?}"),
    }
}

#[test]
fn uncataloged_index_code_is_rejected() {
    let tmp = tempdir().unwrap();
    write_artifacts(tmp.path());
    fs::write(
        tmp.path().join("index.json"),
        r#"[ { "code": "99-9999.00", "vector": [0.5, 0.5] } ]"#,
    )
    .unwrap();

    let err = load_assets(tmp.path()).unwrap_err();
    assert!(matches!(err, LoadError::UnknownOccupation { ref code } if code == "99-9999.00"));
}
