//! Multi-group selection for side-by-side comparison
//!
//! A [`Selection`] is an immutable value: toggling returns a new selection and
//! leaves the old one untouched, so a render still holding the previous value
//! keeps seeing consistent data.

use serde::{Deserialize, Serialize};

use crate::models::{Group, GroupId};

/// Groups pre-selected when the comparison screen first loads
pub const DEFAULT_SELECTION: &[GroupId] = &[1, 2, 10];

/// Anything that carries a group id
pub trait Identified {
    fn group_id(&self) -> GroupId;
}

impl Identified for Group {
    fn group_id(&self) -> GroupId {
        self.id
    }
}

/// Set of selected group ids, remembering insertion order for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<GroupId>", into = "Vec<GroupId>")]
pub struct Selection {
    ids: Vec<GroupId>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::from_ids(DEFAULT_SELECTION.iter().copied())
    }
}

impl Selection {
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Build from ids, dropping duplicates (first occurrence wins)
    pub fn from_ids<I: IntoIterator<Item = GroupId>>(ids: I) -> Self {
        let mut selection = Self::empty();
        for id in ids {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn contains(&self, id: GroupId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in the order they were selected
    pub fn ids(&self) -> &[GroupId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Copy of this selection with `id` removed if present, appended if absent
    #[must_use]
    pub fn toggled(&self, id: GroupId) -> Self {
        let ids = if self.contains(id) {
            self.ids.iter().copied().filter(|&i| i != id).collect()
        } else {
            let mut ids = self.ids.clone();
            ids.push(id);
            ids
        };
        Self { ids }
    }
}

impl From<Vec<GroupId>> for Selection {
    fn from(ids: Vec<GroupId>) -> Self {
        Self::from_ids(ids)
    }
}

impl From<Selection> for Vec<GroupId> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

/// Free-function form of [`Selection::toggled`]
#[must_use]
pub fn toggle(selected: &Selection, id: GroupId) -> Selection {
    selected.toggled(id)
}

/// Items whose id is selected, in the items' own order (not selection order)
#[must_use]
pub fn filter<T: Identified + Clone>(items: &[T], selected: &Selection) -> Vec<T> {
    items
        .iter()
        .filter(|item| selected.contains(item.group_id()))
        .cloned()
        .collect()
}

/// Bar-chart record for the comparison screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub id: GroupId,
    pub title: String,
    pub verse_count: u64,
    pub hymn_count: u64,
    pub vocab_size: u64,
}

impl From<&Group> for ComparisonRow {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            title: group.title.clone(),
            verse_count: group.verse_count,
            hymn_count: group.hymn_count,
            vocab_size: group.vocab_size,
        }
    }
}

impl Identified for ComparisonRow {
    fn group_id(&self) -> GroupId {
        self.id
    }
}
