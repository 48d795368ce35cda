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

use std::fs::read_to_string;
use std::path::Path;

use quizcards_core::Fallible;
use quizcards_core::fail;
use quizcards_core::load_deck;

/// Load a deck with the viewer's rules and report how many cards survive.
pub fn check_deck(path: String) -> Fallible<()> {
    let path = Path::new(&path);
    if !path.exists() {
        return fail(format!("{} does not exist.", path.display()));
    }
    let cards = load_deck(&read_to_string(path)?)?;
    let unknown = cards.iter().filter(|card| card.has_unknown_answer()).count();
    println!("{}: {} valid flashcard(s).", path.display(), cards.len());
    if unknown > 0 {
        println!("{unknown} flashcard(s) have no answer.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::helper::write_file;

    #[test]
    fn test_check_valid_deck() -> Fallible<()> {
        let dir = tempdir()?;
        let path = write_file(
            dir.path(),
            "deck.json",
            r#"[{"question": "Q", "options": ["A. x", "B. y"], "answer": "A", "explanation": null}]"#,
        )?;
        check_deck(path.display().to_string())
    }

    #[test]
    fn test_check_deck_without_valid_cards() -> Fallible<()> {
        let dir = tempdir()?;
        let path = write_file(dir.path(), "deck.json", r#"[{"question": "Q"}]"#)?;
        assert!(check_deck(path.display().to_string()).is_err());
        Ok(())
    }

    #[test]
    fn test_check_non_existent_deck() {
        let err = check_deck("./derpherp.json".to_string()).unwrap_err();
        assert_eq!(err.to_string(), "error: ./derpherp.json does not exist.");
    }
}
