// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The persisted deck format: a JSON array of flashcards.
//!
//! The same array is what the card viewer loads, so [`load_deck`] applies
//! the viewer's lenient load rules rather than strict deserialization.

use serde_json::Value;

use crate::error::Fallible;
use crate::error::fail;
use crate::segment::parse;
use crate::types::flashcard::Flashcard;

/// Parse extracted text into a deck. Fails if the text holds no records.
pub fn convert_text(raw: &str) -> Fallible<Vec<Flashcard>> {
    let cards = parse(raw);
    if cards.is_empty() {
        return fail("no valid records found");
    }
    Ok(cards)
}

/// Serialize a deck in document order.
pub fn to_json(cards: &[Flashcard]) -> Fallible<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}

/// Load a deck the way the viewer does.
///
/// Missing or non-string `question` and `answer` become empty strings,
/// non-array `options` become an empty list and a non-string `explanation`
/// becomes absent. Elements left without a question or an answer are
/// dropped. An empty result is an error.
pub fn load_deck(json: &str) -> Fallible<Vec<Flashcard>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return fail("deck must be a JSON array");
    };
    let total = items.len();
    let cards: Vec<Flashcard> = items.iter().filter_map(read_card).collect();
    if cards.is_empty() {
        return fail("deck contains no valid flashcards");
    }
    if cards.len() < total {
        log::debug!("Dropped {} invalid deck entries.", total - cards.len());
    }
    Ok(cards)
}

fn read_card(item: &Value) -> Option<Flashcard> {
    let question = string_field(item, "question");
    let answer = string_field(item, "answer");
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    let options: Vec<String> = match item.get("options") {
        Some(Value::Array(options)) => options
            .iter()
            .filter_map(|option| option.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    let explanation = item
        .get("explanation")
        .and_then(Value::as_str)
        .map(str::to_string);
    Some(Flashcard::new(question, options, answer, explanation))
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_text() -> Fallible<()> {
        let cards = convert_text("Q\nA. x\nB. y\n정답: A")?;
        assert_eq!(cards.len(), 1);
        Ok(())
    }

    #[test]
    fn test_convert_text_without_records() {
        let err = convert_text("just some prose").unwrap_err();
        assert_eq!(err.to_string(), "error: no valid records found");
    }

    #[test]
    fn test_json_shape() -> Fallible<()> {
        let cards = convert_text("Q\nA. x\nB. y")?;
        let value: Value = serde_json::from_str(&to_json(&cards)?)?;
        assert_eq!(
            value,
            serde_json::json!([{
                "question": "Q",
                "options": ["A. x", "B. y"],
                "answer": "UNKNOWN",
                "explanation": null,
            }])
        );
        Ok(())
    }

    #[test]
    fn test_load_written_deck() -> Fallible<()> {
        let cards = convert_text("Q1\nA. x\nB. y\n정답: A\nQ2\nA. p\nB. q\nB. q")?;
        assert_eq!(load_deck(&to_json(&cards)?)?, cards);
        Ok(())
    }

    #[test]
    fn test_load_normalizes_entries() -> Fallible<()> {
        let json = r#"[
            {"question": "Q1", "answer": "A", "options": "not a list"},
            {"question": "Q2", "answer": "B", "options": ["A. x", 3, "B. y"], "explanation": "because"},
            {"question": "Q3", "options": ["A. x"]},
            {"question": "", "answer": "A"},
            {"question": 7, "answer": "A"},
            {"question": " ", "answer": "A"},
            "not an object"
        ]"#;
        let cards = load_deck(json)?;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].question(), "Q1");
        assert!(cards[0].options().is_empty());
        assert_eq!(cards[0].explanation(), None);
        assert_eq!(cards[1].options(), &["A. x".to_string(), "B. y".to_string()][..]);
        assert_eq!(cards[1].explanation(), Some("because"));
        assert_eq!(cards[2].question(), " ");
        Ok(())
    }

    #[test]
    fn test_load_rejects_non_array() {
        let err = load_deck(r#"{"question": "Q", "answer": "A"}"#).unwrap_err();
        assert_eq!(err.to_string(), "error: deck must be a JSON array");
    }

    #[test]
    fn test_load_rejects_empty_deck() {
        let err = load_deck("[]").unwrap_err();
        assert_eq!(err.to_string(), "error: deck contains no valid flashcards");
        assert!(load_deck(r#"[{"question": "Q"}]"#).is_err());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        assert!(load_deck("[{").is_err());
    }
}
