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

use std::sync::LazyLock;

use regex::Regex;

/// A letter A-D followed by one of the option separators.
pub(crate) const OPTION_MARKER_PATTERN: &str = "[A-D][.)．]";

/// `정답: B`, `답：A, C`, `Answer: B/D`, `정답: B번`. The letter run must not
/// run into a Latin letter, so `정답: Because` is not an answer.
pub(crate) const INLINE_ANSWER_PATTERN: &str =
    r"(?:정답|답|Answer)[^\S\n]*[:：][^\S\n]*([A-D](?:[^\S\n]*[,/][^\S\n]*[A-D])*)(?:[^A-Za-z]|$)";

static OPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({OPTION_MARKER_PATTERN})\s")).expect("valid option line regex")
});

static INLINE_ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{INLINE_ANSWER_PATTERN}")).expect("valid inline answer line regex")
});

const ROMAN_NUMERALS: [&str; 4] = ["I", "II", "III", "IV"];

/// The semantic tag of a single line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Blank lines, page artifacts and separators.
    Noise,
    /// A labelled answer line. The payload is the comma-joined letters.
    InlineAnswer(String),
    /// A line like `B. 4`. Whether this is an option or an answer given in
    /// the repeated-option notation depends on where the segmenter is.
    OptionOrAnswer(char),
    /// Any other line.
    Plain,
}

impl LineKind {
    pub fn is_noise(&self) -> bool {
        matches!(self, LineKind::Noise)
    }

    pub fn is_option(&self) -> bool {
        matches!(self, LineKind::OptionOrAnswer(_))
    }
}

/// Classify a line. Surrounding whitespace is ignored.
pub fn classify(line: &str) -> LineKind {
    let line = line.trim();
    if is_noise(line) {
        LineKind::Noise
    } else if let Some(letters) = inline_answer(line) {
        LineKind::InlineAnswer(letters)
    } else if let Some(letter) = option_letter(line) {
        LineKind::OptionOrAnswer(letter)
    } else {
        LineKind::Plain
    }
}

fn is_noise(line: &str) -> bool {
    line.is_empty() || ROMAN_NUMERALS.contains(&line) || is_rule(line)
}

fn is_rule(line: &str) -> bool {
    line.chars().count() >= 3 && line.chars().all(|c| matches!(c, '-' | '_' | '='))
}

fn inline_answer(line: &str) -> Option<String> {
    let captures = INLINE_ANSWER_LINE.captures(line)?;
    let letters: Vec<String> = captures
        .get(1)?
        .as_str()
        .chars()
        .filter(|c| matches!(c, 'A'..='D'))
        .map(String::from)
        .collect();
    Some(letters.join(","))
}

fn option_letter(line: &str) -> Option<char> {
    let captures = OPTION_LINE.captures(line)?;
    captures.get(1)?.as_str().chars().next()
}
