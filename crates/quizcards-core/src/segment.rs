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

//! Splits normalized text into flashcard records.
//!
//! The segmenter walks the line sequence with a single [`Cursor`]. One call
//! to [`Segmenter::step`] runs a full cycle (question, options, answer) and
//! returns the cursor for the next cycle together with the card, if one was
//! recognized. The cursor returned by `step` is always strictly greater than
//! the one passed in, so a document of `n` lines is done in at most `n`
//! cycles.
//!
//! There are no explicit record delimiters in the input. The one rule that
//! finds them is [`Segmenter::question_boundary`]: a substantive line that is
//! not an option line, and whose next substantive line is an option line,
//! starts a question.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::assemble::assemble;
use crate::classify::LineKind;
use crate::classify::classify;
use crate::normalize::normalize;
use crate::types::flashcard::Flashcard;

/// Fewer options than this and the candidate is not a multiple-choice
/// question.
pub const MIN_OPTIONS: usize = 2;

/// Options past this count are not collected.
pub const MAX_OPTIONS: usize = 4;

/// A position in the normalized line sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    pub fn position(self) -> usize {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // Lines are numbered from one in messages.
        write!(f, "line {}", self.0 + 1)
    }
}

/// Parse raw extracted text into flashcards, in document order.
pub fn parse(raw: &str) -> Vec<Flashcard> {
    let text = normalize(raw);
    Segmenter::new(&text).run()
}

pub struct Segmenter<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Segmenter<'a> {
    /// Construct a segmenter over already normalized text.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().map(str::trim).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cursor just past the last line.
    pub fn end(&self) -> Cursor {
        Cursor(self.lines.len())
    }

    /// Run cycles from the first line until the cursor reaches the end.
    pub fn run(&self) -> Vec<Flashcard> {
        let mut cards = Vec::new();
        let mut cursor = Cursor::default();
        while cursor < self.end() {
            let (next, card) = self.step(cursor);
            debug_assert!(next > cursor);
            cards.extend(card);
            cursor = next;
        }
        cards
    }

    /// Run one segmentation cycle starting at `cursor`.
    ///
    /// On success the returned cursor points where answer scanning stopped:
    /// the end of input, the line after an inline answer, or the first line
    /// of the next question. If no card could be read here, the returned
    /// cursor is one line past `cursor`.
    pub fn step(&self, cursor: Cursor) -> (Cursor, Option<Flashcard>) {
        let retry = cursor.next();
        let Some((question, options_at)) = self.scan_question(cursor.position()) else {
            log::debug!("No question starts at {cursor}, skipping it.");
            return (retry, None);
        };
        let (options, answer_at) = self.scan_options(options_at);
        if options.len() < MIN_OPTIONS {
            log::debug!(
                "Question at {cursor} has {} option(s), skipping it.",
                options.len()
            );
            return (retry, None);
        }
        let (answer, stop) = self.scan_answer(answer_at);
        let card = assemble(&question, options, &answer);
        (Cursor(stop), Some(card))
    }

    fn kind(&self, pos: usize) -> LineKind {
        classify(self.lines[pos])
    }

    fn next_substantive(&self, from: usize) -> Option<usize> {
        (from..self.lines.len()).find(|&pos| !self.kind(pos).is_noise())
    }

    /// If the line at `pos` starts a new question, return the letter of the
    /// option line that follows it. That is the case when the line is
    /// neither noise nor an option line, and the next substantive line after
    /// it is an option line.
    fn question_boundary(&self, pos: usize) -> Option<char> {
        let kind = self.kind(pos);
        if kind.is_noise() || kind.is_option() {
            return None;
        }
        match self.kind(self.next_substantive(pos + 1)?) {
            LineKind::OptionOrAnswer(letter) => Some(letter),
            _ => None,
        }
    }

    /// Collect question lines from `start`. Returns the lines and the
    /// position of the first option line, or `None` if the input ends first
    /// or an option line comes before any question text.
    fn scan_question(&self, start: usize) -> Option<(Vec<&'a str>, usize)> {
        let mut question = Vec::new();
        for pos in start..self.lines.len() {
            let kind = self.kind(pos);
            if kind.is_noise() {
                continue;
            }
            if kind.is_option() {
                return None;
            }
            question.push(self.lines[pos]);
            if self.question_boundary(pos).is_some() {
                let options_at = self.next_substantive(pos + 1)?;
                return Some((question, options_at));
            }
        }
        None
    }

    /// Collect up to [`MAX_OPTIONS`] options from `start`. Returns the
    /// options and the position where answer scanning begins.
    ///
    /// An option line whose letter does not come after the previous option's
    /// letter ends the list: it is an answer given by repeating an option.
    fn scan_options(&self, start: usize) -> (Vec<String>, usize) {
        let mut options: Vec<String> = Vec::new();
        let mut previous: Option<char> = None;
        let mut pos = start;
        while options.len() < MAX_OPTIONS && pos < self.lines.len() {
            let LineKind::OptionOrAnswer(letter) = self.kind(pos) else {
                break;
            };
            if previous.is_some_and(|prev| letter <= prev) {
                break;
            }
            let mut option = self.lines[pos].to_string();
            pos = self.absorb_continuations(pos + 1, letter, &mut option);
            options.push(option);
            previous = Some(letter);
        }
        (options, pos)
    }

    /// Append the continuation lines of the option with the given letter to
    /// `option`. Returns the position of the first line that is not part of
    /// the option.
    fn absorb_continuations(&self, mut pos: usize, letter: char, option: &mut String) -> usize {
        while pos < self.lines.len() {
            match self.kind(pos) {
                LineKind::Noise => {}
                LineKind::OptionOrAnswer(_) | LineKind::InlineAnswer(_) => break,
                LineKind::Plain => {
                    // A line followed by options that continue this list is
                    // still part of this option.
                    if self.question_boundary(pos).is_some_and(|next| next <= letter) {
                        break;
                    }
                    option.push(' ');
                    option.push_str(self.lines[pos]);
                }
            }
            pos += 1;
        }
        pos
    }

    /// Collect answer entries from `start`. Returns the entries and the
    /// position where scanning stopped.
    fn scan_answer(&self, start: usize) -> (Vec<String>, usize) {
        let mut answer: Vec<String> = Vec::new();
        let mut pos = start;
        while pos < self.lines.len() {
            match self.kind(pos) {
                LineKind::Noise => {}
                LineKind::InlineAnswer(letters) => {
                    answer.push(letters);
                    pos += 1;
                    break;
                }
                // The next question: stop without consuming it.
                _ if self.question_boundary(pos).is_some() => break,
                LineKind::OptionOrAnswer(_) => answer.push(self.lines[pos].to_string()),
                LineKind::Plain => match answer.last_mut() {
                    Some(last) => {
                        last.push(' ');
                        last.push_str(self.lines[pos]);
                    }
                    None => log::debug!("Discarding stray text at {}.", Cursor(pos)),
                },
            }
            pos += 1;
        }
        (answer, pos)
    }
}
