//! Cultural reference cards (tribes, rivers, places)

use serde::{Deserialize, Serialize};

use crate::models::{CulturalCatalog, CulturalReference, GroupId, ReferenceCategory};

/// One clickable reference card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCard {
    pub name: String,
    pub groups: Vec<GroupId>,
    pub mention_count: usize,

    /// e.g. "Mentioned in 3 Mandalas"
    pub summary: String,

    /// e.g. `["M1", "M3"]`, in catalog order
    pub badges: Vec<String>,
}

impl From<&CulturalReference> for ReferenceCard {
    fn from(reference: &CulturalReference) -> Self {
        let mention_count = reference.groups.len();
        let plural = if mention_count > 1 { "s" } else { "" };
        Self {
            name: reference.name.clone(),
            groups: reference.groups.clone(),
            mention_count,
            summary: format!("Mentioned in {mention_count} Mandala{plural}"),
            badges: reference.groups.iter().map(|id| format!("M{id}")).collect(),
        }
    }
}

/// Cards for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCards {
    pub category: ReferenceCategory,
    pub cards: Vec<ReferenceCard>,
}

pub fn category_cards(catalog: &CulturalCatalog, category: ReferenceCategory) -> CategoryCards {
    CategoryCards {
        category,
        cards: catalog
            .category(category)
            .iter()
            .map(ReferenceCard::from)
            .collect(),
    }
}

/// Cards for every category, tribes first
pub fn all_cards(catalog: &CulturalCatalog) -> Vec<CategoryCards> {
    ReferenceCategory::all()
        .into_iter()
        .map(|category| category_cards(catalog, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, groups: &[GroupId]) -> CulturalReference {
        CulturalReference {
            name: name.to_string(),
            groups: groups.to_vec(),
        }
    }

    #[test]
    fn test_summary_pluralization() {
        let single = ReferenceCard::from(&reference("Yadu", &[1]));
        assert_eq!(single.summary, "Mentioned in 1 Mandala");

        let many = ReferenceCard::from(&reference("Sindhu", &[10, 2, 7]));
        assert_eq!(many.summary, "Mentioned in 3 Mandalas");
        assert_eq!(many.badges, vec!["M10", "M2", "M7"]);
    }

    #[test]
    fn test_all_cards_order() {
        let catalog = CulturalCatalog {
            tribes: vec![reference("Bharata", &[3, 7])],
            rivers: Vec::new(),
            places: vec![reference("Kuruksetra", &[10])],
        };
        let cards = all_cards(&catalog);
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].category, ReferenceCategory::Tribes);
        assert!(cards[1].cards.is_empty());
        assert_eq!(cards[2].cards[0].mention_count, 1);
    }
}
