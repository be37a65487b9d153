//! Content-kind definitions
//!
//! One constructor per content kind, each producing the [`ResolveOptions`]
//! the orchestrator needs: collection key, prompt, validator, and the two
//! user-facing failure messages. Validators deserialize into the typed
//! record shapes from `haru-core`, so "parses" and "has the required
//! fields" are checked in one step.

use haru_core::{HistoryRecord, LiteratureRecord, VocabularyRecord};
use serde_json::Value;

use crate::ResolveOptions;

pub const VOCABULARY_COLLECTION: &str = "daily-vocabulary";
pub const HISTORY_COLLECTION: &str = "daily-history";
pub const LITERATURE_COLLECTION: &str = "daily-literature";

/// Language studied on a given day: alternates by day of year.
pub fn vocabulary_language(day_of_year: u32) -> &'static str {
    if day_of_year % 2 == 1 {
        "English"
    } else {
        "Chinese"
    }
}

/// Daily vocabulary list for the alternating study language.
pub fn vocabulary(day_of_year: u32) -> ResolveOptions {
    let language = vocabulary_language(day_of_year);
    let prompt = format!(
        r#"Generate exactly 40 vocabulary words for language learning.
Language: {language}
Today's theme: Pick an interesting, practical daily-life topic (e.g., cooking, travel, technology, emotions, business, nature).

Return ONLY valid JSON matching this exact schema, no markdown fences:
{{
  "subject": "<the topic you chose>",
  "language": "{language}",
  "vocabulary": [
    {{
      "word": "<the word in {language}>",
      "meaning": "<translation/definition in Korean>",
      "pronunciation": "<phonetic pronunciation guide>"
    }}
  ]
}}

Provide exactly 40 items in the vocabulary array. Make words range from beginner to intermediate level."#
    );

    ResolveOptions {
        collection: VOCABULARY_COLLECTION.to_string(),
        prompt,
        validate: validate_vocabulary,
        quota_message: "The AI quota has been exhausted. Please try again in a minute.".to_string(),
        error_message: "Failed to generate today's vocabulary. Please try again.".to_string(),
    }
}

/// Daily history/current-affairs briefing.
pub fn history() -> ResolveOptions {
    let prompt = r#"Pick an interesting historical event, figure, or current affairs topic.
It can be from any era or region. Make it educational and thought-provoking.

Return ONLY valid JSON matching this exact schema, no markdown fences:
{
  "topic": "<the topic title>",
  "category": "<History or Current Affairs or Science or Culture>",
  "summary": "<3-5 sentence summary explaining the topic>",
  "keyFacts": ["<fact 1>", "<fact 2>", "<fact 3>", "<fact 4>", "<fact 5>"],
  "reflection": "<a thought-provoking question for the reader to reflect on>"
}

Provide exactly 5 key facts."#
        .to_string();

    ResolveOptions {
        collection: HISTORY_COLLECTION.to_string(),
        prompt,
        validate: validate_history,
        quota_message: "The AI quota has been exhausted. Please try again shortly.".to_string(),
        error_message: "Failed to generate the history briefing.".to_string(),
    }
}

/// Daily classic-literature excerpt for transcription practice.
pub fn literature() -> ResolveOptions {
    let prompt = r#"Select a famous passage from English or Chinese classic literature.
The excerpt should be 2-4 sentences long, suitable for transcription practice.
Alternate between English and Chinese works.

Return ONLY valid JSON matching this exact schema, no markdown fences:
{
  "title": "<title of the work>",
  "author": "<author name>",
  "excerpt": "<the passage in its original language, 2-4 sentences>",
  "language": "<English or Chinese>",
  "translation": "<Korean translation of the excerpt>"
}"#
        .to_string();

    ResolveOptions {
        collection: LITERATURE_COLLECTION.to_string(),
        prompt,
        validate: validate_literature,
        quota_message: "The AI quota has been exhausted. Please try again shortly.".to_string(),
        error_message: "Failed to generate the literature excerpt.".to_string(),
    }
}

fn validate_vocabulary(record: &Value) -> bool {
    serde_json::from_value::<VocabularyRecord>(record.clone())
        .map(|r| !r.vocabulary.is_empty())
        .unwrap_or(false)
}

fn validate_history(record: &Value) -> bool {
    serde_json::from_value::<HistoryRecord>(record.clone())
        .map(|r| !r.topic.is_empty() && !r.key_facts.is_empty())
        .unwrap_or(false)
}

fn validate_literature(record: &Value) -> bool {
    serde_json::from_value::<LiteratureRecord>(record.clone())
        .map(|r| !r.title.is_empty() && !r.excerpt.is_empty())
        .unwrap_or(false)
}
