//! Keyword search and per-group frequency series
//!
//! The index itself is stateless: the search text and the selected term live
//! in a [`KeywordState`] owned by the screen and passed in on every call.

use serde::{Deserialize, Serialize};

use crate::models::{Count, GroupId, KeywordTrend};

/// Term selected when the keyword screen first opens
pub const DEFAULT_KEYWORD: &str = "áyas";

/// Short glosses shown next to well-known terms
const GLOSSES: &[(&str, &str)] = &[
    ("áyas", "Metal (iron/bronze) - Shows technological advancement"),
    ("rājan", "King/ruler - Reflects political structure evolution"),
    ("soma", "Sacred ritual drink - Central to Vedic ceremonies"),
    ("yajña", "Sacrifice/ritual - Core concept of Vedic religion"),
    ("deva", "God/deity - Fundamental religious term"),
];

/// One bar of a keyword frequency chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordPoint {
    /// 1-based group number
    pub group: GroupId,

    /// Absent where the trend carried no number for this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Count>,
}

/// Screen-owned search state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordState {
    /// Current search box text
    pub query: String,

    /// Currently selected term, if any
    pub selected: Option<String>,
}

impl Default for KeywordState {
    fn default() -> Self {
        Self {
            query: String::new(),
            selected: Some(DEFAULT_KEYWORD.to_string()),
        }
    }
}

impl KeywordState {
    pub fn new(query: impl Into<String>, selected: Option<String>) -> Self {
        Self {
            query: query.into(),
            selected,
        }
    }

    /// New state with a different search text; selection is kept
    #[must_use]
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected: self.selected.clone(),
        }
    }

    /// New state with a different selected term; search text is kept
    #[must_use]
    pub fn with_selected(&self, term: impl Into<String>) -> Self {
        Self {
            query: self.query.clone(),
            selected: Some(term.into()),
        }
    }
}

/// Case-insensitive substring filter that keeps the input order.
///
/// An empty query returns every term.
#[must_use]
pub fn filter<'a, I>(all_terms: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    all_terms
        .into_iter()
        .filter(|term| needle.is_empty() || term.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Frequency series of `term`; empty when the trend does not know the term
#[must_use]
pub fn series_for(trend: &KeywordTrend, term: &str) -> Vec<KeywordPoint> {
    let Some(counts) = trend.get(term) else {
        return Vec::new();
    };

    counts
        .iter()
        .enumerate()
        .map(|(position, frequency)| KeywordPoint {
            group: position as GroupId + 1,
            frequency: frequency.clone(),
        })
        .collect()
}

/// Gloss for a well-known term
pub fn gloss(term: &str) -> Option<&'static str> {
    GLOSSES
        .iter()
        .find(|(known, _)| *known == term)
        .map(|(_, text)| *text)
}
