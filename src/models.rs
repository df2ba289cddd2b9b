use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response wrapper used by the memo API: the payload sits under `detail`,
/// with `message` carrying "ok" or an error description.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Envelope<T> {
    pub detail: Option<T>,
    pub message: String,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning a `detail: null` response into the
    /// backend's own error message.
    pub fn into_detail(self) -> Result<T, String> {
        self.detail.ok_or(self.message)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Section {
    pub id: i64,
    pub name: String,
    pub notes: Vec<Note>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Note {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub section_id: i64,
}

/// The random-sequence endpoint returns a bare JSON object keyed by the
/// 1-based position: `{"1": 42, "2": 7, ...}`. Keys arrive as strings.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RandomSequence(pub HashMap<String, i64>);

impl RandomSequence {
    /// Entries sorted by numeric position. JSON object order is not
    /// dependable, and "10" sorts before "2" as a string.
    pub fn ordered(&self) -> Vec<(u32, i64)> {
        let mut items: Vec<(u32, i64)> = self
            .0
            .iter()
            .filter_map(|(k, v)| k.parse::<u32>().ok().map(|n| (n, *v)))
            .collect();
        items.sort_by_key(|(n, _)| *n);
        items
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_envelope_parses() {
        let body = r#"{
            "detail": [
                {"id": 1, "name": "Reading", "notes": [
                    {"id": 3, "name": "Rust book", "url": "https://doc.rust-lang.org/book/",
                     "description": "", "section_id": 1}
                ]},
                {"id": 2, "name": "Empty", "notes": []}
            ],
            "message": "ok"
        }"#;
        let envelope: Envelope<Vec<Section>> = serde_json::from_str(body).unwrap();
        let sections = envelope.into_detail().unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].notes[0].name, "Rust book");
        assert_eq!(sections[0].notes[0].section_id, 1);
        assert!(sections[1].notes.is_empty());
    }

    #[test]
    fn error_envelope_yields_message() {
        let body = r#"{"detail": null, "message": "section `9` does not exists"}"#;
        let envelope: Envelope<Vec<Section>> = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.into_detail().unwrap_err(),
            "section `9` does not exists"
        );
    }

    #[test]
    fn random_sequence_orders_numerically() {
        let body = r#"{"10": 1, "2": 20, "1": 99}"#;
        let seq: RandomSequence = serde_json::from_str(body).unwrap();
        assert_eq!(seq.ordered(), vec![(1, 99), (2, 20), (10, 1)]);
    }
}
