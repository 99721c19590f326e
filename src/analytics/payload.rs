//! Lenient readers for trend payloads
//!
//! A payload whose top level is not a JSON object is rejected as a whole.
//! Inside an object every entry degrades on its own: a non-numeric count
//! reads as absent and an entry of the wrong shape is skipped, so one bad
//! series never blanks the rest of a chart.

use serde_json::{Map, Value};
use tracing::warn;

use crate::models::{Count, FeatureTrend, HymnLengthDistribution, OrderedMap, Series};

fn object<'a>(raw: &'a Value, payload: &'static str) -> Option<&'a Map<String, Value>> {
    let object = raw.as_object();
    if object.is_none() {
        warn!(payload, "Malformed payload, expected an object");
    }
    object
}

fn count(value: &Value) -> Option<Count> {
    match value {
        Value::Number(n) => Some(n.clone()),
        _ => None,
    }
}

/// Name → per-group series (deity or keyword trends)
pub fn series_trend(raw: &Value, payload: &'static str) -> Option<OrderedMap<Series>> {
    let entries = object(raw, payload)?;
    let mut trend = OrderedMap::with_capacity(entries.len());

    for (name, value) in entries {
        match value.as_array() {
            Some(items) => trend.insert(name.as_str(), items.iter().map(count).collect()),
            None => warn!(payload, entry = %name, "Skipping entry that is not a series"),
        }
    }

    Some(trend)
}

/// Group key → feature counts; non-numeric features are left out so the
/// projector zero-fills them
pub fn feature_trend(raw: &Value, payload: &'static str) -> Option<FeatureTrend> {
    let entries = object(raw, payload)?;
    let mut trend = OrderedMap::with_capacity(entries.len());

    for (group, value) in entries {
        let Some(features) = value.as_object() else {
            warn!(payload, entry = %group, "Skipping group that is not a feature map");
            continue;
        };
        let counts: OrderedMap<Count> = features
            .iter()
            .filter_map(|(key, value)| count(value).map(|n| (key.as_str(), n)))
            .collect();
        trend.insert(group.as_str(), counts);
    }

    Some(trend)
}

/// Group key → hymn verse counts; anything but a non-negative integer is dropped
pub fn length_distribution(raw: &Value, payload: &'static str) -> Option<HymnLengthDistribution> {
    let entries = object(raw, payload)?;
    let mut distribution = OrderedMap::with_capacity(entries.len());

    for (group, value) in entries {
        let Some(items) = value.as_array() else {
            warn!(payload, entry = %group, "Skipping group that is not a length list");
            continue;
        };
        let lengths: Vec<u64> = items.iter().filter_map(Value::as_u64).collect();
        if lengths.len() != items.len() {
            warn!(
                payload,
                entry = %group,
                dropped = items.len() - lengths.len(),
                "Dropped non-integer hymn lengths"
            );
        }
        distribution.insert(group.as_str(), lengths);
    }

    Some(distribution)
}
