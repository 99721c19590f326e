//! Series-per-entity → record-per-group pivot for multi-series line charts
//!
//! Input is a map of entity name to one count per group. Output is always
//! [`GROUP_COUNT`] rows, one per group position, each carrying the group number
//! plus one field per entity. A series shorter than [`GROUP_COUNT`] leaves the
//! field absent at the missing positions so a renderer can tell "no data"
//! apart from a true zero.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::{Count, GroupId, NamedEntityTrend, GROUP_COUNT};

/// One chart row: a group number and each entity's value at that group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    /// 1-based group number
    pub group: GroupId,

    /// Entity values in series insertion order; `None` means no data
    pub values: Vec<(String, Option<Count>)>,
}

impl PivotRow {
    /// Value for an entity; `None` if the entity is unknown or has no data here
    pub fn get(&self, entity: &str) -> Option<&Count> {
        self.values
            .iter()
            .find(|(name, _)| name == entity)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether the row carries a field (even a zero) for this entity
    pub fn has_field(&self, entity: &str) -> bool {
        self.values
            .iter()
            .any(|(name, value)| name == entity && value.is_some())
    }
}

impl Serialize for PivotRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.values.iter().filter(|(_, v)| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(present + 1))?;
        map.serialize_entry("group", &self.group)?;
        for (name, value) in &self.values {
            if let Some(value) = value {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}

/// Pivot a per-entity trend into [`GROUP_COUNT`] per-group rows
#[must_use]
pub fn pivot(series: &NamedEntityTrend) -> Vec<PivotRow> {
    (0..GROUP_COUNT)
        .map(|position| PivotRow {
            group: position as GroupId + 1,
            values: series
                .iter()
                .map(|(name, counts)| (name.to_string(), counts.get(position).cloned().flatten()))
                .collect(),
        })
        .collect()
}
