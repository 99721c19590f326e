//! Verse grammar table view-model
//!
//! Decodes the short feature codes carried on each word into display tags.

use serde::{Deserialize, Serialize};

use crate::models::{GrammarAnnotation, GrammarProps, Verse};

const CASE_LABELS: &[(&str, &str)] = &[
    ("NOM", "Nominative"),
    ("ACC", "Accusative"),
    ("DAT", "Dative"),
    ("ABL", "Ablative"),
    ("INS", "Instrumental"),
    ("GEN", "Genitive"),
    ("LOC", "Locative"),
    ("VOC", "Vocative"),
];

const UNKNOWN_CASE: &str = "Unknown case";

/// Display label for a case code
pub fn case_label(code: &str) -> &'static str {
    CASE_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(UNKNOWN_CASE, |(_, label)| *label)
}

pub fn number_label(code: &str) -> &'static str {
    if code == "PL" {
        "Plural"
    } else {
        "Singular"
    }
}

pub fn gender_label(code: &str) -> &'static str {
    if code == "M" {
        "Masculine"
    } else {
        "Feminine"
    }
}

fn present(code: &Option<String>) -> Option<&str> {
    code.as_deref().filter(|code| !code.is_empty())
}

/// Tags for the present features, in case / number / gender order.
/// An empty code counts as absent.
pub fn feature_tags(props: &GrammarProps) -> Vec<String> {
    [
        present(&props.case).map(case_label),
        present(&props.number).map(number_label),
        present(&props.gender).map(gender_label),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}

/// One row of the grammar table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarRow {
    pub form: String,
    pub lemma: String,
    pub tags: Vec<String>,
}

impl From<&GrammarAnnotation> for GrammarRow {
    fn from(annotation: &GrammarAnnotation) -> Self {
        Self {
            form: annotation.form.clone(),
            lemma: annotation.lemma.clone(),
            tags: feature_tags(&annotation.props),
        }
    }
}

/// A verse card: header fields plus its grammar table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseCard {
    pub id: u32,
    pub meter: String,
    pub sanskrit_text: String,
    pub translation: String,
    pub grammar: Vec<GrammarRow>,
}

impl From<&Verse> for VerseCard {
    fn from(verse: &Verse) -> Self {
        Self {
            id: verse.id,
            meter: verse.meter.clone(),
            sanskrit_text: verse.sanskrit_text.clone(),
            translation: verse.translation.clone(),
            grammar: verse.grammar.iter().map(GrammarRow::from).collect(),
        }
    }
}

/// Verse cards in input order
pub fn verse_cards(verses: &[Verse]) -> Vec<VerseCard> {
    verses.iter().map(VerseCard::from).collect()
}
