//! Per-screen composition of the analytics transforms
//!
//! Every method takes an already-fetched raw JSON payload plus whatever state
//! the screen owns, and returns chart-ready records. Nothing here performs
//! I/O or keeps state between calls.
//!
//! Malformed payloads never produce an error: the payload is logged and the
//! component's empty/default output is returned instead, so a screen always
//! has something to render. Trend payloads degrade per entry (see
//! [`payload`](super::payload)).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::comparison::{self, ComparisonRow, Selection};
use super::cultural::{self, CategoryCards};
use super::feature_projector::{self, FeatureRow, FieldSpec, CASE_FIELDS, TENSE_FIELDS};
use super::grammar::{self, VerseCard};
use super::histogram::{self, LengthPanel};
use super::keyword_index::{self, KeywordPoint, KeywordState};
use super::payload;
use super::summary::{self, ComplexityRow, HymnBar, VocabularyPoint};
use super::trend_pivot::{self, PivotRow};
use crate::models::{
    CulturalCatalog, Group, GroupId, Hymn, KeywordTrend, ReferenceCategory, Verse,
};

/// Deity series plotted on the prominence chart, in legend order
pub const TRACKED_DEITIES: &[&str] = &["Indra", "Agni", "Soma", "Asvins", "Varuna", "Mitra", "Usas"];

/// Decode a payload, logging and returning `None` when its shape is wrong
fn decode<T: DeserializeOwned>(raw: &Value, payload: &'static str) -> Option<T> {
    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(payload, error = %e, "Malformed payload, falling back to empty view");
            None
        }
    }
}

fn keyword_trend(raw: &Value) -> KeywordTrend {
    payload::series_trend(raw, "keyword_trends").unwrap_or_default()
}

/// Everything the keyword screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordView {
    /// Terms matching the current search text
    pub matches: Vec<String>,
    pub selected: Option<String>,
    pub series: Vec<KeywordPoint>,
    pub gloss: Option<String>,
}

/// Checkbox entry in the comparison side list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonChoice {
    pub id: GroupId,
    pub title: String,
    pub checked: bool,
}

/// Everything the comparison screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonView {
    /// All groups in corpus order
    pub choices: Vec<ComparisonChoice>,

    /// Selected groups in corpus order
    pub rows: Vec<ComparisonRow>,
}

/// Stateless entry point used by every screen
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsFacade;

impl AnalyticsFacade {
    pub fn new() -> Self {
        Self
    }

    /// Histogram panels, one per group of the hymn-length distribution
    pub fn hymn_length_panels(&self, raw: &Value) -> Vec<LengthPanel> {
        let distribution = payload::length_distribution(raw, "hymn_lengths").unwrap_or_default();
        let panels = histogram::length_panels(&distribution);
        debug!(panels = panels.len(), "Built hymn length panels");
        panels
    }

    /// Deity mentions pivoted into one row per group
    pub fn deity_prominence(&self, raw: &Value) -> Vec<PivotRow> {
        let trend = payload::series_trend(raw, "deity_trends").unwrap_or_default();
        let rows = trend_pivot::pivot(&trend);
        debug!(deities = trend.len(), rows = rows.len(), "Pivoted deity trends");
        rows
    }

    /// Case distribution as stacked-bar records labelled `M{group}`
    pub fn grammar_cases(&self, raw: &Value) -> Vec<FeatureRow> {
        self.grammar_projection(raw, CASE_FIELDS)
    }

    /// Tense distribution as grouped-bar records labelled `M{group}`
    pub fn grammar_tenses(&self, raw: &Value) -> Vec<FeatureRow> {
        self.grammar_projection(raw, TENSE_FIELDS)
    }

    fn grammar_projection(&self, raw: &Value, fields: &[FieldSpec<'_>]) -> Vec<FeatureRow> {
        let trend = payload::feature_trend(raw, "grammar_trends").unwrap_or_default();
        let rows = feature_projector::project_with_label(&trend, fields, feature_projector::mandala_label);
        debug!(groups = rows.len(), fields = fields.len(), "Projected grammar features");
        rows
    }

    /// Known keywords matching the search text, in trend order
    pub fn keyword_matches(&self, raw: &Value, state: &KeywordState) -> Vec<String> {
        let trend = keyword_trend(raw);
        keyword_index::filter(trend.keys(), &state.query)
    }

    /// Frequency series of the selected keyword; empty when nothing is selected
    pub fn keyword_series(&self, raw: &Value, state: &KeywordState) -> Vec<KeywordPoint> {
        let trend = keyword_trend(raw);
        state
            .selected
            .as_deref()
            .map(|term| keyword_index::series_for(&trend, term))
            .unwrap_or_default()
    }

    pub fn keyword_view(&self, raw: &Value, state: &KeywordState) -> KeywordView {
        let trend = keyword_trend(raw);
        let matches = keyword_index::filter(trend.keys(), &state.query);
        let series = state
            .selected
            .as_deref()
            .map(|term| keyword_index::series_for(&trend, term))
            .unwrap_or_default();
        let gloss = state
            .selected
            .as_deref()
            .and_then(keyword_index::gloss)
            .map(str::to_string);

        debug!(
            matches = matches.len(),
            selected = ?state.selected,
            points = series.len(),
            "Built keyword view"
        );

        KeywordView {
            matches,
            selected: state.selected.clone(),
            series,
            gloss,
        }
    }

    /// Comparison bars for the selected groups, in corpus order
    pub fn comparison(&self, raw: &Value, selection: &Selection) -> Vec<ComparisonRow> {
        let groups: Vec<Group> = decode(raw, "groups").unwrap_or_default();
        comparison::filter(&groups, selection)
            .iter()
            .map(ComparisonRow::from)
            .collect()
    }

    pub fn comparison_view(&self, raw: &Value, selection: &Selection) -> ComparisonView {
        let groups: Vec<Group> = decode(raw, "groups").unwrap_or_default();
        let choices = groups
            .iter()
            .map(|group| ComparisonChoice {
                id: group.id,
                title: group.title.clone(),
                checked: selection.contains(group.id),
            })
            .collect();
        let rows: Vec<ComparisonRow> = comparison::filter(&groups, selection)
            .iter()
            .map(ComparisonRow::from)
            .collect();

        debug!(
            groups = groups.len(),
            selected = ?selection.ids(),
            rows = rows.len(),
            "Built comparison view"
        );

        ComparisonView { choices, rows }
    }

    pub fn vocabulary_growth(&self, raw: &Value) -> Vec<VocabularyPoint> {
        let groups: Vec<Group> = decode(raw, "groups").unwrap_or_default();
        summary::vocabulary_growth(&groups)
    }

    pub fn complexity(&self, raw: &Value) -> Vec<ComplexityRow> {
        let groups: Vec<Group> = decode(raw, "groups").unwrap_or_default();
        summary::complexity(&groups)
    }

    /// Verse-count bars for one group's hymn list
    pub fn hymn_bars(&self, raw: &Value) -> Vec<HymnBar> {
        let hymns: Vec<Hymn> = decode(raw, "hymns").unwrap_or_default();
        summary::hymn_bars(&hymns)
    }

    pub fn verse_cards(&self, raw: &Value) -> Vec<VerseCard> {
        let verses: Vec<Verse> = decode(raw, "verses").unwrap_or_default();
        grammar::verse_cards(&verses)
    }

    /// Reference cards for one category, or for all of them when `None`
    pub fn cultural_cards(&self, raw: &Value, category: Option<ReferenceCategory>) -> Vec<CategoryCards> {
        let catalog: CulturalCatalog = decode(raw, "cultural_references").unwrap_or_default();
        match category {
            Some(category) => vec![cultural::category_cards(&catalog, category)],
            None => cultural::all_cards(&catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Count, GROUP_COUNT};
    use serde_json::json;

    fn groups_payload() -> Value {
        json!([
            {"id": 1, "title": "Mandala 1", "verse_count": 2006, "hymn_count": 191, "vocab_size": 5000},
            {"id": 2, "title": "Mandala 2", "verse_count": 429, "hymn_count": 43, "vocab_size": 1400},
            {"id": 3, "title": "Mandala 3", "verse_count": 617, "hymn_count": 62, "vocab_size": 1900}
        ])
    }

    #[test]
    fn test_malformed_deity_payload_gives_group_only_rows() {
        let rows = AnalyticsFacade::new().deity_prominence(&json!("not a map"));
        assert_eq!(rows.len(), GROUP_COUNT);
        assert!(rows.iter().all(|row| row.values.is_empty()));
    }

    #[test]
    fn test_malformed_payloads_render_empty() {
        let facade = AnalyticsFacade::new();
        let bad = json!({"unexpected": true});
        assert!(facade.hymn_bars(&bad).is_empty());
        assert!(facade.verse_cards(&bad).is_empty());
        assert!(facade.comparison(&bad, &Selection::default()).is_empty());
        assert!(facade.keyword_series(&json!([1, 2]), &KeywordState::default()).is_empty());
        assert!(facade.grammar_cases(&json!(null)).is_empty());
    }

    #[test]
    fn test_bad_deity_series_keeps_other_deities() {
        let raw = json!({
            "Indra": [1.5, 2, 3, 4, 5, 6, 7, 8, 9, 10],
            "Varuna": "unknown",
            "Agni": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        });
        let rows = AnalyticsFacade::new().deity_prominence(&raw);
        assert_eq!(
            serde_json::to_value(&rows[0]).unwrap(),
            json!({"group": 1, "Indra": 1.5, "Agni": 1})
        );
    }

    #[test]
    fn test_null_feature_is_zero_filled() {
        let raw = json!({
            "1": {"case:nominative": 500, "case:accusative": null},
            "2": {"case:nominative": 10}
        });
        let rows = AnalyticsFacade::new().grammar_cases(&raw);
        assert_eq!(
            serde_json::to_value(&rows).unwrap(),
            json!([
                {"group": "M1", "nominative": 500, "accusative": 0, "instrumental": 0},
                {"group": "M2", "nominative": 10, "accusative": 0, "instrumental": 0}
            ])
        );
    }

    #[test]
    fn test_comparison_view_marks_selection() {
        let view = AnalyticsFacade::new().comparison_view(&groups_payload(), &Selection::from_ids([3, 1]));
        assert_eq!(view.choices.len(), 3);
        assert!(view.choices[0].checked);
        assert!(!view.choices[1].checked);
        let ids: Vec<GroupId> = view.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_keyword_view() {
        let raw = json!({"soma": [1, 2, 3, 4, 5, 6, 7, 8, 9, 10], "deva": [0, 0, 0, 0, 0, 0, 0, 0, 0, 1]});
        let state = KeywordState::new("SO", Some("soma".to_string()));
        let view = AnalyticsFacade::new().keyword_view(&raw, &state);
        assert_eq!(view.matches, vec!["soma"]);
        assert_eq!(view.series.len(), 10);
        assert_eq!(view.series[4].frequency, Some(Count::from(5u64)));
        assert!(view.gloss.is_some());
    }

    #[test]
    fn test_keyword_series_without_selection() {
        let raw = json!({"soma": [1]});
        let state = KeywordState::new("", None);
        assert!(AnalyticsFacade::new().keyword_series(&raw, &state).is_empty());
    }

    #[test]
    fn test_grammar_tenses_labels() {
        let raw = json!({"1": {"tense:present": 12}, "2": {"tense:aorist": 3}});
        let rows = AnalyticsFacade::new().grammar_tenses(&raw);
        assert_eq!(rows[0].group, "M1");
        assert_eq!(rows[0].get("aorist"), Some(&Count::from(0u64)));
        assert_eq!(rows[1].get("aorist"), Some(&Count::from(3u64)));
    }

    #[test]
    fn test_cultural_single_category() {
        let raw = json!({"rivers": [{"name": "Sarasvati", "mandalas": [2, 6, 7]}]});
        let cards = AnalyticsFacade::new().cultural_cards(&raw, Some(ReferenceCategory::Rivers));
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].cards[0].summary, "Mentioned in 3 Mandalas");
    }

    #[test]
    fn test_tracked_deities_order() {
        assert_eq!(TRACKED_DEITIES.first(), Some(&"Indra"));
        assert_eq!(TRACKED_DEITIES.len(), 7);
    }
}
