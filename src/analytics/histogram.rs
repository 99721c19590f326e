//! Frequency tables over integer lengths
//!
//! Turns a flat list of lengths (e.g. verse counts per hymn) into one bin per
//! distinct value, sorted ascending so chart x-axes never need re-sorting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::HymnLengthDistribution;

/// One bar of a length histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// The distinct length value
    pub length: u64,

    /// How many inputs had this length
    pub count: u64,
}

/// Build a histogram with one bin per distinct value, ascending by `length`
#[must_use]
pub fn build(values: &[u64]) -> Vec<HistogramBin> {
    let mut counts: BTreeMap<u64, u64> = BTreeMap::new();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(length, count)| HistogramBin { length, count })
        .collect()
}

/// Mean of `values` rounded to one decimal, 0.0 for an empty list
#[must_use]
pub fn average_length(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<u64>() as f64 / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Histogram panel for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthPanel {
    /// Group key as it appeared in the distribution
    pub group: String,

    /// Average hymn length in verses
    pub average: f64,

    pub histogram: Vec<HistogramBin>,
}

/// One panel per group, in the distribution's key order
#[must_use]
pub fn length_panels(distribution: &HymnLengthDistribution) -> Vec<LengthPanel> {
    distribution
        .iter()
        .map(|(group, lengths)| LengthPanel {
            group: group.to_string(),
            average: average_length(lengths),
            histogram: build(lengths),
        })
        .collect()
}
