// Core data structures for the samhita corpus

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

/// Stable identifier of a top-level group (1..=10)
pub type GroupId = u32;

/// Number of top-level groups in the corpus; every trend series is aligned to it
pub const GROUP_COUNT: usize = 10;

/// Check whether an id names one of the corpus groups
pub fn is_valid_group_id(id: GroupId) -> bool {
    (1..=GROUP_COUNT as GroupId).contains(&id)
}

/// String-keyed map that keeps entries in the order they were inserted
/// (or appeared on the wire). Re-inserting a key replaces the value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,

    /// Key → position in `entries`
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, keeping the original position of an existing key
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// === Serde: JSON object with wire order preserved ===

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// A trend count as it arrived on the wire; integers stay integers when
/// serialized, fractional values pass through unchanged
pub type Count = Number;

/// One count per group (position = group id − 1); `None` where the wire
/// carried something other than a number
pub type Series = Vec<Option<Count>>;

/// Entity name → per-group series
pub type NamedEntityTrend = OrderedMap<Series>;

/// Keyword → per-group series, aligned like [`NamedEntityTrend`]
pub type KeywordTrend = OrderedMap<Series>;

/// Group key → fully-qualified feature key (e.g. `case:nominative`) → count
pub type FeatureTrend = OrderedMap<OrderedMap<Count>>;

/// Group key → verse count of every hymn in that group
pub type HymnLengthDistribution = OrderedMap<Vec<u64>>;

/// Right-pad with zeros or truncate a series to exactly [`GROUP_COUNT`] entries.
///
/// Intended for the fetch boundary; the pivot itself never pads. Positions
/// that are already present (including `None`) are kept as they are.
pub fn pad_series(series: &[Option<Count>]) -> Series {
    let mut padded: Series = series.iter().take(GROUP_COUNT).cloned().collect();
    padded.resize(GROUP_COUNT, Some(Count::from(0u64)));
    padded
}

/// Summary of one top-level group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Group {
    pub id: GroupId,
    pub title: String,
    #[serde(default)]
    pub verse_count: u64,
    #[serde(default)]
    pub hymn_count: u64,
    #[serde(default)]
    pub vocab_size: u64,
    #[serde(default)]
    pub avg_verses_per_hymn: f64,
    #[serde(default)]
    pub avg_words_per_verse: f64,
    #[serde(default)]
    pub dominant_deities: Vec<String>,
}

/// A hymn (sukta) inside a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hymn {
    pub id: u32,
    pub title: String,
    pub verse_count: u64,
    #[serde(default)]
    pub main_deity: String,
    #[serde(default)]
    pub unique_words: u64,
}

/// A verse with translation and word-level grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Verse {
    pub id: u32,
    pub sanskrit_text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub meter: String,
    #[serde(default)]
    pub grammar: Vec<GrammarAnnotation>,
}

/// Word-level annotation attached to a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GrammarAnnotation {
    #[serde(default)]
    pub index: u32,
    pub form: String,
    pub lemma: String,
    #[serde(rename = "lemmaRefs", default)]
    pub lemma_refs: Vec<String>,
    #[serde(default)]
    pub props: GrammarProps,
}

/// Linguistic features of a word; each one independently optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GrammarProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tense: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(rename = "non-finite", default, skip_serializing_if = "Option::is_none")]
    pub non_finite: Option<String>,
    #[serde(rename = "lemma type", default, skip_serializing_if = "Option::is_none")]
    pub lemma_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Named cultural reference and the groups that mention it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CulturalReference {
    pub name: String,
    #[serde(rename = "mandalas", default)]
    pub groups: Vec<GroupId>,
}

/// Catalog of cultural references, by category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CulturalCatalog {
    #[serde(default)]
    pub tribes: Vec<CulturalReference>,
    #[serde(default)]
    pub rivers: Vec<CulturalReference>,
    #[serde(default)]
    pub places: Vec<CulturalReference>,
}

impl CulturalCatalog {
    pub fn category(&self, category: ReferenceCategory) -> &[CulturalReference] {
        match category {
            ReferenceCategory::Tribes => &self.tribes,
            ReferenceCategory::Rivers => &self.rivers,
            ReferenceCategory::Places => &self.places,
        }
    }
}

/// Cultural reference category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceCategory {
    Tribes,
    Rivers,
    Places,
}

impl ReferenceCategory {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tribes => "tribes",
            Self::Rivers => "rivers",
            Self::Places => "places",
        }
    }

    /// Create from string (singular or plural)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tribes" | "tribe" => Some(Self::Tribes),
            "rivers" | "river" => Some(Self::Rivers),
            "places" | "place" => Some(Self::Places),
            _ => None,
        }
    }

    /// Get all categories in display order
    pub fn all() -> Vec<Self> {
        vec![Self::Tribes, Self::Rivers, Self::Places]
    }
}

impl fmt::Display for ReferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
