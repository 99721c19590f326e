//! Data-service boundary
//!
//! Fetching is the only asynchronous, fallible step in the system and it lives
//! entirely here. A [`CorpusSource`] hands back either the raw JSON payload or
//! a [`FetchError`]; callers substitute a placeholder (see [`fallback`]) before
//! anything reaches the analytics core.

pub mod fallback;
pub mod file;
pub mod http;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::models::GroupId;
use crate::utils::error::FetchError;

pub use fallback::{placeholder_hymns, placeholder_verses, resolve_or};
pub use file::FileSource;
pub use http::HttpSource;

/// Every payload the screens consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Summary list of all groups
    Groups,
    /// Same group summaries as served to the complexity screen
    AllGroups,
    /// Hymn list of one group
    Hymns { group: GroupId },
    /// Verse details of one hymn
    Verses { group: GroupId, hymn: u32 },
    DeityTrends,
    GrammarTrends,
    KeywordTrends,
    HymnLengths,
    CulturalReferences,
}

impl Dataset {
    /// Relative path of the payload, without extension
    pub fn path(&self) -> String {
        match self {
            Self::Groups => "mandala_summary".to_string(),
            Self::AllGroups => "all_mandalas".to_string(),
            Self::Hymns { group } => format!("mandala/{group}"),
            Self::Verses { group, hymn } => format!("sukta/{group}/{hymn}"),
            Self::DeityTrends => "deity_trends".to_string(),
            Self::GrammarTrends => "grammatical_trends".to_string(),
            Self::KeywordTrends => "keyword_trends".to_string(),
            Self::HymnLengths => "hymn_length_distribution".to_string(),
            Self::CulturalReferences => "cultural_references".to_string(),
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groups => "groups",
            Self::AllGroups => "all_groups",
            Self::Hymns { .. } => "hymns",
            Self::Verses { .. } => "verses",
            Self::DeityTrends => "deity_trends",
            Self::GrammarTrends => "grammar_trends",
            Self::KeywordTrends => "keyword_trends",
            Self::HymnLengths => "hymn_lengths",
            Self::CulturalReferences => "cultural_references",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Something that can deliver corpus payloads
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &str;

    /// Fetch one payload as raw JSON
    async fn fetch(&self, dataset: &Dataset) -> Result<Value, FetchError>;
}
