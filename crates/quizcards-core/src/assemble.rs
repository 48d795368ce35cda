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

use crate::types::flashcard::Flashcard;
use crate::types::flashcard::UNKNOWN_ANSWER;

/// Build the flashcard for a completed record.
///
/// Question lines are joined with a space, answer entries with a line break.
/// A record without any answer still becomes a card, with the answer set to
/// [`UNKNOWN_ANSWER`].
pub fn assemble(question: &[&str], options: Vec<String>, answer: &[String]) -> Flashcard {
    let question = question.join(" ");
    let answer = answer.join("\n");
    let answer = match answer.trim() {
        "" => UNKNOWN_ANSWER.to_string(),
        trimmed => trimmed.to_string(),
    };
    Flashcard::new(question, options, answer, None)
}
