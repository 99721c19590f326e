//! Placeholder payloads used when a fetch fails
//!
//! Screens that browse a single group or hymn still render something when the
//! service is unreachable.

use tracing::warn;

use crate::error::SamhitaErrorTrait;
use crate::models::{GrammarAnnotation, GrammarProps, GroupId, Hymn, Verse};
use crate::utils::error::FetchError;

/// Three stand-in hymns for a group
pub fn placeholder_hymns(group: GroupId) -> Vec<Hymn> {
    [(1, 9, "Agni", 45), (2, 12, "Indra", 52), (3, 10, "Soma", 48)]
        .into_iter()
        .map(|(id, verse_count, deity, unique_words)| Hymn {
            id,
            title: format!("Hymn {group}.{id}"),
            verse_count,
            main_deity: deity.to_string(),
            unique_words,
        })
        .collect()
}

/// The opening verse of the corpus with two annotated words
pub fn placeholder_verses() -> Vec<Verse> {
    vec![Verse {
        id: 1,
        sanskrit_text: "agním īḷe puróhitaṃ yajñásya devám ṛtvíjam".to_string(),
        translation: "I praise Agni, the household priest, the divine minister of the sacrifice"
            .to_string(),
        meter: "Gāyatrī".to_string(),
        grammar: vec![
            GrammarAnnotation {
                index: 1,
                form: "agním".to_string(),
                lemma: "agni".to_string(),
                lemma_refs: Vec::new(),
                props: GrammarProps {
                    case: Some("accusative".to_string()),
                    number: Some("singular".to_string()),
                    gender: Some("masculine".to_string()),
                    ..Default::default()
                },
            },
            GrammarAnnotation {
                index: 2,
                form: "īḷe".to_string(),
                lemma: "īḍ".to_string(),
                lemma_refs: Vec::new(),
                props: GrammarProps {
                    tense: Some("present".to_string()),
                    person: Some("1st".to_string()),
                    number: Some("singular".to_string()),
                    ..Default::default()
                },
            },
        ],
    }]
}

/// Unwrap a fetch result, substituting `default` on failure
pub fn resolve_or<T>(result: Result<T, FetchError>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!(
                error = %e,
                category = e.category().description(),
                recoverable = e.is_recoverable(),
                "Fetch failed, using placeholder"
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_hymns() {
        let hymns = placeholder_hymns(4);
        assert_eq!(hymns.len(), 3);
        assert_eq!(hymns[0].title, "Hymn 4.1");
        assert_eq!(hymns[1].main_deity, "Indra");
        assert_eq!(hymns[1].verse_count, 12);
        assert_eq!(hymns[2].unique_words, 48);
    }

    #[test]
    fn test_placeholder_verses() {
        let verses = placeholder_verses();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].meter, "Gāyatrī");
        assert_eq!(verses[0].grammar.len(), 2);
        assert_eq!(verses[0].grammar[1].props.tense.as_deref(), Some("present"));
        assert!(verses[0].grammar[1].props.case.is_none());
    }

    #[test]
    fn test_resolve_or() {
        assert_eq!(resolve_or(Ok(3), 0), 3);
        assert_eq!(resolve_or(Err(FetchError::Timeout), 0), 0);
    }
}
