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

use serde::Deserialize;
use serde::Serialize;

/// The answer recorded when a question has options but the document never
/// says which one is right.
pub const UNKNOWN_ANSWER: &str = "UNKNOWN";

/// A multiple-choice flashcard.
///
/// Field order is the key order of the persisted JSON deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    question: String,
    options: Vec<String>,
    answer: String,
    explanation: Option<String>,
}

impl Flashcard {
    pub fn new(
        question: String,
        options: Vec<String>,
        answer: String,
        explanation: Option<String>,
    ) -> Self {
        Self {
            question,
            options,
            answer,
            explanation,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Options in document order, markers included (`"A. 3"`).
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// True if no answer could be determined for this card.
    pub fn has_unknown_answer(&self) -> bool {
        self.answer == UNKNOWN_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_serializes_absent_explanation_as_null() -> Fallible<()> {
        let card = Flashcard::new(
            "Q".to_string(),
            vec!["A. x".to_string(), "B. y".to_string()],
            "A".to_string(),
            None,
        );
        let json = serde_json::to_string(&card)?;
        assert_eq!(
            json,
            r#"{"question":"Q","options":["A. x","B. y"],"answer":"A","explanation":null}"#
        );
        Ok(())
    }

    #[test]
    fn test_unknown_answer() {
        let card = Flashcard::new("Q".to_string(), vec![], UNKNOWN_ANSWER.to_string(), None);
        assert!(card.has_unknown_answer());
    }
}
