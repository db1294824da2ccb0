//! Dictionary entries and the JSON sub-structures stored with them.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// A full dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub wordhead: String,
    pub pinyin: Option<String>,
    pub radical: Option<String>,
    pub volume: Option<String>,
    pub fanqie: Option<String>,
    /// Xu Shen's original gloss.
    pub explanation: Option<String>,
    pub hanviet: Option<String>,
    pub meaning_vi: Option<String>,
    pub duan_notes: Vec<DuanNote>,
    pub variants: Vec<Variant>,
}

/// The columns shown in search listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    pub id: i32,
    pub wordhead: String,
    pub pinyin: Option<String>,
    pub radical: Option<String>,
    pub explanation: Option<String>,
    pub hanviet: Option<String>,
}

/// One of Duan Yucai's annotations.
///
/// Older rows store each annotation as a bare string, newer ones as an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DuanNote {
    Plain(String),
    Annotated {
        #[serde(default)]
        note: Option<String>,
        #[serde(default)]
        explanation: Option<String>,
    },
}

/// An attested alternate form of a headword, e.g. 弎 for 三.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub wordhead: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seal_character: Option<String>,
}

/// Resolves a `duan_notes` column into annotations.
pub fn duan_notes_from_json(value: Option<Value>) -> Vec<DuanNote> {
    entries_from_json(value, "duan note")
}

/// Resolves a `variants` column into variants.
pub fn variants_from_json(value: Option<Value>) -> Vec<Variant> {
    entries_from_json(value, "variant")
}

// entries that don't fit the expected shape are logged and skipped
// a lone non-array value is treated as a single entry
fn entries_from_json<T: DeserializeOwned>(value: Option<Value>, kind: &str) -> Vec<T> {
    let entries = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => vec![other],
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value::<T>(entry) {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping malformed {kind} at index {idx}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_both_note_shapes_in_order() {
        let notes = duan_notes_from_json(Some(json!([
            "謂一二三也",
            { "note": "三畫而三才之道在焉", "explanation": "天地人之道也" },
            { "explanation": "only the lead" },
        ])));
        assert_eq!(
            notes,
            vec![
                DuanNote::Plain("謂一二三也".to_string()),
                DuanNote::Annotated {
                    note: Some("三畫而三才之道在焉".to_string()),
                    explanation: Some("天地人之道也".to_string()),
                },
                DuanNote::Annotated {
                    note: None,
                    explanation: Some("only the lead".to_string()),
                },
            ]
        );
    }

    #[test]
    fn missing_columns_are_empty() {
        assert!(duan_notes_from_json(None).is_empty());
        assert!(duan_notes_from_json(Some(Value::Null)).is_empty());
        assert!(variants_from_json(None).is_empty());
    }

    #[test]
    fn skips_malformed_entries() {
        let notes = duan_notes_from_json(Some(json!([1, "kept", [true]])));
        assert_eq!(notes, vec![DuanNote::Plain("kept".to_string())]);

        let variants = variants_from_json(Some(json!([
            { "explanation": "no wordhead" },
            { "wordhead": "弎", "explanation": "古文三从弋。" },
        ])));
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].wordhead, "弎");
        assert_eq!(variants[0].seal_character, None);
    }

    #[test]
    fn lone_string_is_a_single_note() {
        let notes = duan_notes_from_json(Some(json!("舊式註解")));
        assert_eq!(notes, vec![DuanNote::Plain("舊式註解".to_string())]);
    }

    #[test]
    fn notes_keep_their_shape_over_the_wire() {
        let notes = vec![
            DuanNote::Plain("a".to_string()),
            DuanNote::Annotated {
                note: Some("b".to_string()),
                explanation: None,
            },
        ];
        let json = serde_json::to_value(&notes).unwrap();
        assert_eq!(json, json!(["a", { "note": "b", "explanation": null }]));
        let back: Vec<DuanNote> = serde_json::from_value(json).unwrap();
        assert_eq!(back, notes);
    }
}
