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

//! Rewrites raw extracted text into one marker per line.
//!
//! Text extracted from word-processing documents often runs several options
//! together on one physical line (`A. foo B. bar`), or glues the answer label
//! onto the last option. Normalization puts every option marker and every
//! inline answer marker back at the start of its own line, so that the
//! segmenter can work strictly line by line.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::INLINE_ANSWER_PATTERN;
use crate::classify::OPTION_MARKER_PATTERN;

static OPTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{OPTION_MARKER_PATTERN}[^\\S\\n]")).expect("valid option marker regex")
});

static INLINE_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INLINE_ANSWER_PATTERN).expect("valid inline answer regex"));

/// Canonicalize extracted text. Pure, total and idempotent.
pub fn normalize(raw: &str) -> String {
    let text: String = raw
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\u{a0}' { ' ' } else { c })
        .collect();
    // A letter glued to a Latin word, a number or an abbreviation
    // (`U.S.A. `) is not an option marker.
    let text = break_before(&text, &OPTION_MARKER, |prefix| {
        prefix
            .chars()
            .last()
            .is_some_and(|c| !(c.is_ascii_alphanumeric() || c == '.'))
    });
    let text = collapse_blank_lines(&text);
    // `대답: A` is a word ending in the label, not a label.
    break_before(&text, &INLINE_ANSWER, |prefix| {
        prefix.chars().last().is_some_and(|c| !c.is_alphanumeric())
    })
}

/// Insert a line break before every match of `marker` that is not already
/// at the start of its line and whose preceding text satisfies `accept`.
fn break_before(text: &str, marker: &Regex, accept: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let mut last = 0;
        for m in marker.find_iter(line) {
            let prefix = &line[..m.start()];
            if prefix.trim().is_empty() || !accept(prefix) {
                continue;
            }
            out.push_str(&line[last..m.start()]);
            out.push('\n');
            last = m.start();
        }
        out.push_str(&line[last..]);
    }
    out
}

/// Collapse every run of three or more blank lines into exactly two empty
/// lines. Shorter runs are left untouched.
fn collapse_blank_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if line.trim().is_empty() {
            run.push(line);
            continue;
        }
        flush_blank_run(&mut lines, &mut run);
        lines.push(line);
    }
    flush_blank_run(&mut lines, &mut run);
    lines.join("\n")
}

fn flush_blank_run<'a>(lines: &mut Vec<&'a str>, run: &mut Vec<&'a str>) {
    if run.len() >= 3 {
        lines.extend(["", ""]);
    } else {
        lines.append(run);
    }
    run.clear();
}
