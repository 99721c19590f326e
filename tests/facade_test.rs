//! Per-screen views built from realistic payloads

mod common;

use serde_json::{json, Value};

use samhita::analytics::{AnalyticsFacade, KeywordState, Selection, TRACKED_DEITIES};
use samhita::models::{Count, ReferenceCategory, GROUP_COUNT};

#[test]
fn test_deity_prominence_keeps_wire_order() {
    let rows = AnalyticsFacade::new().deity_prominence(&common::deity_trends_payload());

    assert_eq!(rows.len(), GROUP_COUNT);
    assert_eq!(
        serde_json::to_string(&rows[8]).unwrap(),
        r#"{"group":9,"Indra":5,"Agni":3,"Soma":114}"#
    );
    assert_eq!(TRACKED_DEITIES[0], "Indra");
}

#[test]
fn test_grammar_views_label_groups() {
    let facade = AnalyticsFacade::new();
    let payload = common::feature_trends_payload();

    let cases = facade.grammar_cases(&payload);
    assert_eq!(
        serde_json::to_value(&cases).unwrap(),
        json!([
            { "group": "M1", "nominative": 500, "accusative": 300, "instrumental": 120 },
            { "group": "M2", "nominative": 200, "accusative": 90, "instrumental": 0 },
        ])
    );

    let tenses = facade.grammar_tenses(&payload);
    assert_eq!(tenses[1].get("aorist").and_then(Count::as_u64), Some(0));
    assert_eq!(tenses[1].get("present").and_then(Count::as_u64), Some(30));
}

#[test]
fn test_keyword_view_default_state() {
    let view = AnalyticsFacade::new()
        .keyword_view(&common::keyword_trends_payload(), &KeywordState::default());

    assert_eq!(view.matches, vec!["áyas", "rājan", "soma"]);
    assert_eq!(view.selected.as_deref(), Some("áyas"));
    assert_eq!(view.series.len(), GROUP_COUNT);
    assert_eq!(view.series[9].frequency.as_ref().and_then(Count::as_u64), Some(4));
    assert!(view.gloss.is_some());
}

#[test]
fn test_keyword_view_with_search() {
    let state = KeywordState::default().with_query("SO").with_selected("soma");
    let view = AnalyticsFacade::new().keyword_view(&common::keyword_trends_payload(), &state);

    assert_eq!(view.matches, vec!["soma"]);
    assert_eq!(view.series[8].frequency.as_ref().and_then(Count::as_u64), Some(90));
}

#[test]
fn test_comparison_view_defaults() {
    let view = AnalyticsFacade::new()
        .comparison_view(&common::groups_payload(), &Selection::default());

    assert_eq!(view.choices.len(), 10);
    assert!(view.choices[0].checked);
    assert!(!view.choices[2].checked);

    let ids: Vec<u32> = view.rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 10]);
    assert_eq!(view.rows[2].verse_count, 1000);
}

#[test]
fn test_comparison_rows_follow_corpus_order() {
    let rows = AnalyticsFacade::new()
        .comparison(&common::groups_payload(), &Selection::from_ids([7, 3]));
    let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[test]
fn test_summary_views() {
    let facade = AnalyticsFacade::new();
    let payload = common::groups_payload();

    let vocab = facade.vocabulary_growth(&payload);
    assert_eq!(vocab.len(), 10);
    assert_eq!(vocab[4].vocab_size, 1005);

    let complexity = facade.complexity(&payload);
    assert_eq!(complexity[0].group, 1);
    assert!((complexity[0].avg_words_per_verse - 8.5).abs() < f64::EPSILON);
}

#[test]
fn test_hymn_length_panels() {
    let panels = AnalyticsFacade::new().hymn_length_panels(&common::hymn_lengths_payload());

    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].group, "1");
    assert!((panels[0].average - 10.0).abs() < f64::EPSILON);
    assert_eq!(panels[0].histogram.len(), 3);
    assert!(panels[1].histogram.is_empty());
    assert!((panels[1].average - 0.0).abs() < f64::EPSILON);
    assert_eq!(panels[2].histogram[0].count, 3);
}

#[test]
fn test_verse_cards_decode_tags() {
    let cards = AnalyticsFacade::new().verse_cards(&common::verses_payload());

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].meter, "Gāyatrī");
    assert_eq!(
        cards[0].grammar[0].tags,
        vec!["Accusative", "Singular", "Masculine"]
    );
    assert!(cards[0].grammar[1].tags.is_empty());
}

#[test]
fn test_cultural_cards() {
    let facade = AnalyticsFacade::new();
    let payload = common::cultural_payload();

    let all = facade.cultural_cards(&payload, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].cards[0].summary, "Mentioned in 2 Mandalas");
    assert_eq!(all[0].cards[1].summary, "Mentioned in 1 Mandala");
    assert!(all[2].cards.is_empty());

    let rivers = facade.cultural_cards(&payload, Some(ReferenceCategory::Rivers));
    assert_eq!(rivers.len(), 1);
    assert_eq!(rivers[0].cards[0].badges, vec!["M2", "M6", "M7", "M10"]);
}

#[test]
fn test_malformed_payloads_fail_closed() {
    let facade = AnalyticsFacade::new();
    let junk = json!({ "unexpected": true });

    assert!(facade.hymn_length_panels(&Value::Null).is_empty());
    assert!(facade.grammar_cases(&json!([1, 2])).is_empty());
    assert!(facade.vocabulary_growth(&junk).is_empty());
    assert!(facade.verse_cards(&junk).is_empty());
    assert!(facade.keyword_view(&junk, &KeywordState::default()).series.is_empty());

    let rows = facade.deity_prominence(&Value::Null);
    assert_eq!(rows.len(), GROUP_COUNT);
    assert!(rows.iter().all(|r| r.values.is_empty()));
}

#[test]
fn test_bad_entries_degrade_alone() {
    let facade = AnalyticsFacade::new();

    let rows = facade.deity_prominence(&json!({
        "Indra": [2.5, null, 4],
        "Varuna": { "not": "a series" },
        "Agni": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
    }));
    assert_eq!(rows.len(), GROUP_COUNT);
    assert_eq!(
        serde_json::to_value(&rows[0]).unwrap(),
        json!({ "group": 1, "Indra": 2.5, "Agni": 1 })
    );
    assert_eq!(
        serde_json::to_value(&rows[1]).unwrap(),
        json!({ "group": 2, "Agni": 2 })
    );
    assert_eq!(
        serde_json::to_value(&rows[9]).unwrap(),
        json!({ "group": 10, "Agni": 10 })
    );

    let cases = facade.grammar_cases(&json!({
        "1": { "case:nominative": 500, "case:accusative": null },
        "2": { "case:nominative": 200, "case:accusative": 90 }
    }));
    assert_eq!(
        serde_json::to_value(&cases).unwrap(),
        json!([
            { "group": "M1", "nominative": 500, "accusative": 0, "instrumental": 0 },
            { "group": "M2", "nominative": 200, "accusative": 90, "instrumental": 0 },
        ])
    );

    let mut keywords = common::keyword_trends_payload();
    keywords["deva"] = json!([0.5, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let state = KeywordState::default().with_selected("soma");
    let view = facade.keyword_view(&keywords, &state);
    assert!(view.matches.contains(&"deva".to_string()));
    assert!(view.matches.contains(&"soma".to_string()));
    assert_eq!(view.series.len(), GROUP_COUNT);

    let mut lengths = common::hymn_lengths_payload();
    lengths["4"] = json!("missing");
    let panels = facade.hymn_length_panels(&lengths);
    assert_eq!(panels.len(), 3);
    assert_eq!(panels[0].group, "1");
}

#[test]
fn test_views_are_idempotent() {
    let facade = AnalyticsFacade::new();
    let groups = common::groups_payload();
    let trends = common::deity_trends_payload();

    assert_eq!(facade.deity_prominence(&trends), facade.deity_prominence(&trends));
    assert_eq!(
        facade.comparison_view(&groups, &Selection::default()),
        facade.comparison_view(&groups, &Selection::default())
    );
}
