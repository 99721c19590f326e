//! Per-group and per-hymn summary series (vocabulary, complexity, hymn lengths)

use serde::{Deserialize, Serialize};

use crate::models::{Group, GroupId, Hymn};

/// Area-chart point for vocabulary growth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyPoint {
    pub id: GroupId,
    pub title: String,
    pub vocab_size: u64,
}

/// Structural complexity bars for one group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityRow {
    pub group: GroupId,
    pub avg_verses_per_hymn: f64,
    pub avg_words_per_verse: f64,
}

/// Verse-count bar for one hymn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HymnBar {
    pub id: u32,
    pub verse_count: u64,
}

pub fn vocabulary_growth(groups: &[Group]) -> Vec<VocabularyPoint> {
    groups
        .iter()
        .map(|group| VocabularyPoint {
            id: group.id,
            title: group.title.clone(),
            vocab_size: group.vocab_size,
        })
        .collect()
}

pub fn complexity(groups: &[Group]) -> Vec<ComplexityRow> {
    groups
        .iter()
        .map(|group| ComplexityRow {
            group: group.id,
            avg_verses_per_hymn: group.avg_verses_per_hymn,
            avg_words_per_verse: group.avg_words_per_verse,
        })
        .collect()
}

pub fn hymn_bars(hymns: &[Hymn]) -> Vec<HymnBar> {
    hymns
        .iter()
        .map(|hymn| HymnBar {
            id: hymn.id,
            verse_count: hymn.verse_count,
        })
        .collect()
}
