//! End-to-end pipeline tests over an in-memory asset bundle.

use std::sync::Arc;

use oficio_core::index::IndexRow;
use oficio_core::{
    BridgeRow, BridgeTable, FeatureSpace, NeighborIndex, OccupationCatalog, Recommender,
    RecommendError, SkillTranslator, SurveyTable,
};

fn assets() -> Arc<oficio_core::Assets> {
    let space = FeatureSpace::new(vec![
        "Programming".into(),
        "Critical Thinking".into(),
        "Negotiation".into(),
        "Repairing".into(),
    ]);
    let index = NeighborIndex::new(vec![
        IndexRow {
            code: "15-1252.00".into(),
            vector: vec![0.9, 0.1, 0.0, 0.0],
        },
        IndexRow {
            code: "11-1011.00".into(),
            vector: vec![0.1, 0.5, 0.4, 0.0],
        },
        IndexRow {
            code: "51-4121.00".into(),
            vector: vec![0.0, 0.1, 0.0, 0.9],
        },
        IndexRow {
            code: "41-3091.00".into(),
            vector: vec![0.0, 0.3, 0.7, 0.0],
        },
        IndexRow {
            code: "15-1254.00".into(),
            vector: vec![0.8, 0.2, 0.0, 0.0],
        },
        IndexRow {
            code: "49-9071.00".into(),
            vector: vec![0.1, 0.0, 0.0, 0.9],
        },
    ]);
    let catalog = OccupationCatalog::from_pairs([
        ("15-1252.00", "Software Developers"),
        ("11-1011.00", "Chief Executives"),
        ("51-4121.00", "Welders"),
        ("41-3091.00", "Sales Representatives"),
        ("15-1254.00", "Web Developers"),
        ("49-9071.00", "Maintenance Workers"),
    ]);
    let bridge = BridgeTable::new(vec![
        BridgeRow {
            title: "Software Developers".into(),
            local_name: "Desarrolladores de software".into(),
            description: "Diseñan, escriben y prueban software".into(),
            affinity: 0.913,
        },
        BridgeRow {
            title: "Web Developers".into(),
            local_name: "Desarrolladores de software".into(),
            description: "Construyen aplicaciones web".into(),
            affinity: 0.77,
        },
        BridgeRow {
            title: "Chief Executives".into(),
            local_name: "Directores generales".into(),
            description: "Dirigen organizaciones".into(),
            affinity: 0.8,
        },
    ]);
    let survey = SurveyTable::new(
        serde_json::from_value(serde_json::json!([
            { "occupation": "Desarrolladores de software" },
            { "occupation": "Desarrolladores de software" },
            { "occupation": "Desarrolladores de software" },
            { "occupation": "Directores generales" },
            { "occupation": "Vendedores" }
        ]))
        .unwrap(),
    );
    let translator = SkillTranslator::from_pairs([
        ("Programación", "Programming"),
        ("Pensamiento Crítico", "Critical Thinking"),
        ("Negociación", "Negotiation"),
        ("Reparación", "Repairing"),
    ]);
    Arc::new(oficio_core::Assets {
        space,
        index,
        catalog,
        bridge,
        survey,
        translator,
    })
}

#[test]
fn recommends_five_ordered_matches() {
    let recommender = Recommender::new(assets());
    let result = recommender
        .recommend(&["Programación".into(), "pensamiento critico".into()])
        .unwrap();

    assert_eq!(result.matches.len(), 5);
    for pair in result.matches.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    assert_eq!(result.matches[0].title, "Web Developers");
    assert_eq!(
        result.resolved,
        vec!["Critical Thinking".to_string(), "Programming".to_string()]
    );
    assert!(result.dropped.is_empty());
}

#[test]
fn duplicate_labels_after_normalization_count_once() {
    let recommender = Recommender::new(assets());
    let once = recommender.recommend(&["Programación".into()]).unwrap();
    let twice = recommender
        .recommend(&["Programación".into(), "programacion".into()])
        .unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.resolved, vec!["Programming".to_string()]);
}

#[test]
fn empty_input_signals_no_skills_provided() {
    let recommender = Recommender::new(assets());
    assert_eq!(
        recommender.recommend(&[]),
        Err(RecommendError::NoSkillsProvided)
    );
}

#[test]
fn unknown_labels_signal_no_skills_recognized() {
    let recommender = Recommender::new(assets());
    let err = recommender
        .recommend(&["habilidad_inexistente".into()])
        .unwrap_err();
    assert_eq!(
        err,
        RecommendError::NoSkillsRecognized {
            dropped: vec!["habilidad_inexistente".into()]
        }
    );
}

#[test]
fn unresolved_labels_are_dropped_and_reported() {
    let recommender = Recommender::new(assets());
    let result = recommender
        .recommend(&["Negociación".into(), "alfarería".into()])
        .unwrap();
    assert_eq!(result.resolved, vec!["Negotiation".to_string()]);
    assert_eq!(result.dropped, vec!["alfarería".to_string()]);
    assert_eq!(result.matches.len(), 5);
}

#[test]
fn unbridged_match_is_flagged_not_dropped() {
    let recommender = Recommender::new(assets());
    let result = recommender.recommend(&["Reparación".into()]).unwrap();
    let welder = result
        .matches
        .iter()
        .find(|m| m.title == "Welders")
        .expect("welders among neighbors");
    assert!(welder.local.is_none());
}

#[test]
fn shared_local_name_counts_match() {
    let recommender = Recommender::new(assets());
    let result = recommender.recommend(&["Programación".into()]).unwrap();
    let software = result
        .matches
        .iter()
        .find(|m| m.title == "Software Developers")
        .and_then(|m| m.local.as_ref())
        .expect("bridged");
    let web = result
        .matches
        .iter()
        .find(|m| m.title == "Web Developers")
        .and_then(|m| m.local.as_ref())
        .expect("bridged");
    assert_eq!(software.prevalence, 3);
    assert_eq!(web.prevalence, 3);
}

#[test]
fn pipeline_is_idempotent() {
    let recommender = Recommender::new(assets());
    let input = vec!["Programación".to_string(), "Negociación".to_string()];
    let first = recommender.recommend(&input).unwrap();
    let second = recommender.recommend(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn selectable_labels_are_sorted() {
    let recommender = Recommender::new(assets());
    let labels = recommender.selectable_labels();
    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(labels, sorted);
    assert!(labels.contains(&"Programación".to_string()));
}
