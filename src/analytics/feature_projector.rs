//! Flatten nested per-group feature counts into stacked-bar records
//!
//! Each group entry becomes one record with a `group` label and exactly the
//! requested output fields. A feature the group does not carry is emitted as
//! zero: stacked bars need a numeric baseline, unlike the line-chart pivot.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::{Count, FeatureTrend};

/// Maps a source feature key onto an output field name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub output_name: &'a str,
    pub source_key: &'a str,
}

impl<'a> FieldSpec<'a> {
    pub const fn new(output_name: &'a str, source_key: &'a str) -> Self {
        Self {
            output_name,
            source_key,
        }
    }
}

/// Grammatical case distribution fields
pub const CASE_FIELDS: &[FieldSpec<'static>] = &[
    FieldSpec::new("nominative", "case:nominative"),
    FieldSpec::new("accusative", "case:accusative"),
    FieldSpec::new("instrumental", "case:instrumental"),
];

/// Verb tense distribution fields
pub const TENSE_FIELDS: &[FieldSpec<'static>] = &[
    FieldSpec::new("present", "tense:present"),
    FieldSpec::new("aorist", "tense:aorist"),
];

/// One stacked-bar record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub group: String,
    pub values: Vec<(String, Count)>,
}

impl FeatureRow {
    pub fn get(&self, field: &str) -> Option<&Count> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }
}

impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("group", &self.group)?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Chart label for a group key, e.g. `"3"` → `"M3"`
pub fn mandala_label(group_key: &str) -> String {
    format!("M{group_key}")
}

/// Project using the group key verbatim as the label
#[must_use]
pub fn project(trend: &FeatureTrend, fields: &[FieldSpec<'_>]) -> Vec<FeatureRow> {
    project_with_label(trend, fields, |key| key.to_string())
}

/// Project with a caller-chosen group label.
///
/// Output follows the trend's key order; callers wanting numeric order must
/// sort the trend first.
#[must_use]
pub fn project_with_label<F>(trend: &FeatureTrend, fields: &[FieldSpec<'_>], label: F) -> Vec<FeatureRow>
where
    F: Fn(&str) -> String,
{
    trend
        .iter()
        .map(|(group_key, features)| FeatureRow {
            group: label(group_key),
            values: fields
                .iter()
                .map(|spec| {
                    let count = features
                        .get(spec.source_key)
                        .cloned()
                        .unwrap_or_else(|| Count::from(0u64));
                    (spec.output_name.to_string(), count)
                })
                .collect(),
        })
        .collect()
}
