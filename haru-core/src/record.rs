//! Daily content record shapes
//!
//! One record type per content kind. The pipeline itself moves documents
//! around as raw `serde_json::Value`; these typed views are what validators
//! deserialize into and what API clients consume. Field names follow the
//! persisted camelCase wire format.

use serde::{Deserialize, Serialize};

/// Name of the creation-timestamp field stamped by store adapters.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// A single vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VocabWord {
    pub word: String,
    /// Translation/definition in Korean.
    pub meaning: String,
    /// Phonetic pronunciation guide.
    pub pronunciation: String,
}

/// Daily vocabulary list. The language alternates by day of year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRecord {
    pub subject: String,
    pub language: String,
    pub vocabulary: Vec<VocabWord>,
}

/// Daily history/current-affairs briefing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub topic: String,
    pub category: String,
    pub summary: String,
    pub key_facts: Vec<String>,
    /// A thought-provoking question for the reader.
    pub reflection: String,
}

/// Daily classic-literature excerpt for transcription practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LiteratureRecord {
    pub title: String,
    pub author: String,
    /// The passage in its original language, 2-4 sentences.
    pub excerpt: String,
    pub language: String,
    /// Korean translation of the excerpt.
    pub translation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_record_wire_names() {
        let record = HistoryRecord {
            topic: "T".to_string(),
            category: "History".to_string(),
            summary: "S".to_string(),
            key_facts: vec!["a".to_string(), "b".to_string()],
            reflection: "R".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"keyFacts\""));
        assert!(!json.contains("key_facts"));
    }

    #[test]
    fn test_history_record_roundtrip_from_wire() {
        let wire = serde_json::json!({
            "topic": "T",
            "category": "History",
            "summary": "S",
            "keyFacts": ["a", "b", "c", "d", "e"],
            "reflection": "R"
        });
        let record: HistoryRecord = serde_json::from_value(wire).unwrap();
        assert_eq!(record.key_facts.len(), 5);
        assert_eq!(record.topic, "T");
    }

    #[test]
    fn test_vocabulary_record_deserializes() {
        let wire = serde_json::json!({
            "subject": "cooking",
            "language": "English",
            "vocabulary": [
                {"word": "simmer", "meaning": "뭉근히 끓이다", "pronunciation": "SIM-er"}
            ]
        });
        let record: VocabularyRecord = serde_json::from_value(wire).unwrap();
        assert_eq!(record.vocabulary.len(), 1);
        assert_eq!(record.vocabulary[0].word, "simmer");
    }

    #[test]
    fn test_literature_record_roundtrip() {
        let record = LiteratureRecord {
            title: "Moby-Dick".to_string(),
            author: "Herman Melville".to_string(),
            excerpt: "Call me Ishmael.".to_string(),
            language: "English".to_string(),
            translation: "나를 이슈메일이라 불러다오.".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        let back: LiteratureRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
