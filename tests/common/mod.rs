//! Common test utilities

#![allow(dead_code)]

use serde_json::{json, Value};

/// Group summary payload for all ten groups
pub fn groups_payload() -> Value {
    let titles = [
        "Mandala 1", "Mandala 2", "Mandala 3", "Mandala 4", "Mandala 5", "Mandala 6",
        "Mandala 7", "Mandala 8", "Mandala 9", "Mandala 10",
    ];

    Value::Array(
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let id = i as u64 + 1;
                json!({
                    "id": id,
                    "title": title,
                    "verse_count": 100 * id,
                    "hymn_count": 10 * id,
                    "vocab_size": 1000 + id,
                    "avg_verses_per_hymn": 10.0,
                    "avg_words_per_verse": 8.5,
                    "dominant_deities": ["Agni", "Indra"],
                })
            })
            .collect(),
    )
}

/// Deity trend with keys deliberately out of alphabetical order
pub fn deity_trends_payload() -> Value {
    json!({
        "Indra": [250, 30, 35, 40, 45, 50, 55, 60, 5, 20],
        "Agni": [200, 20, 25, 30, 35, 40, 45, 50, 3, 15],
        "Soma": [10, 1, 1, 1, 1, 1, 1, 1, 114, 2],
    })
}

/// Grammar feature trend; group "2" lacks instrumental and aorist counts
pub fn feature_trends_payload() -> Value {
    json!({
        "1": {
            "case:nominative": 500,
            "case:accusative": 300,
            "case:instrumental": 120,
            "tense:present": 80,
            "tense:aorist": 40,
        },
        "2": {
            "case:nominative": 200,
            "case:accusative": 90,
            "tense:present": 30,
        },
    })
}

pub fn keyword_trends_payload() -> Value {
    json!({
        "áyas": [1, 0, 2, 0, 0, 3, 0, 1, 0, 4],
        "rājan": [12, 4, 5, 6, 7, 8, 9, 10, 2, 11],
        "soma": [3, 1, 1, 1, 1, 1, 1, 1, 90, 2],
    })
}

pub fn hymn_lengths_payload() -> Value {
    json!({
        "1": [9, 12, 9, 10],
        "2": [],
        "9": [5, 5, 5],
    })
}

pub fn cultural_payload() -> Value {
    json!({
        "tribes": [
            { "name": "Bharatas", "mandalas": [3, 7] },
            { "name": "Purus", "mandalas": [7] },
        ],
        "rivers": [
            { "name": "Sarasvati", "mandalas": [2, 6, 7, 10] },
        ],
        "places": [],
    })
}

pub fn verses_payload() -> Value {
    json!([
        {
            "id": 1,
            "sanskrit_text": "agním īḷe puróhitaṃ",
            "translation": "I praise Agni",
            "meter": "Gāyatrī",
            "grammar": [
                {
                    "index": 1,
                    "form": "agním",
                    "lemma": "agni",
                    "lemmaRefs": ["null"],
                    "props": { "case": "ACC", "number": "SG", "gender": "M" }
                },
                {
                    "index": 2,
                    "form": "īḷe",
                    "lemma": "īḍ",
                    "props": { "tense": "present", "person": "1st" }
                }
            ]
        }
    ])
}
