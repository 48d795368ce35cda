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

use std::fs::write;
use std::path::Path;
use std::path::PathBuf;

use quizcards_core::Fallible;
use quizcards_core::Flashcard;
use quizcards_core::convert_text;
use quizcards_core::fail;
use quizcards_core::to_json;
use walkdir::WalkDir;

use crate::extract::Extractor;
use crate::extract::PlainTextExtractor;
use crate::extract::extract_file;

/// Where a converted deck goes.
#[derive(Debug, PartialEq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    fn from_flag(input: &Path, output: Option<String>) -> Self {
        match output.as_deref() {
            Some("-") => Destination::Stdout,
            Some(path) => Destination::File(PathBuf::from(path)),
            None => Destination::File(input.with_extension("json")),
        }
    }
}

/// Convert a file, or every `.txt` file under a directory.
pub fn convert(path: String, output: Option<String>) -> Fallible<()> {
    let path = PathBuf::from(path);
    if !path.exists() {
        return fail(format!("{} does not exist.", path.display()));
    }
    if path.is_dir() {
        if output.is_some() {
            return fail("--output can only be used when converting a single file.");
        }
        return convert_directory(&PlainTextExtractor, &path);
    }
    let destination = Destination::from_flag(&path, output);
    convert_file(&PlainTextExtractor, &path, &destination)?;
    Ok(())
}

fn convert_directory(extractor: &dyn Extractor, directory: &Path) -> Fallible<()> {
    let mut converted = 0;
    let mut failed = 0;
    for entry in WalkDir::new(directory).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !(path.is_file() && path.extension().is_some_and(|ext| ext == "txt")) {
            continue;
        }
        let destination = Destination::File(path.with_extension("json"));
        // Each file is converted independently.
        match convert_file(extractor, path, &destination) {
            Ok(_) => converted += 1,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                failed += 1;
            }
        }
    }
    log::debug!("Converted {converted} file(s), {failed} failed.");
    if converted + failed == 0 {
        return fail(format!("no .txt files found in {}.", directory.display()));
    }
    if failed > 0 {
        return fail(format!(
            "{failed} of {} file(s) failed to convert.",
            converted + failed
        ));
    }
    Ok(())
}

/// Convert one file. Nothing is written unless the whole file converts.
fn convert_file(
    extractor: &dyn Extractor,
    input: &Path,
    destination: &Destination,
) -> Fallible<Vec<Flashcard>> {
    log::debug!("Converting {}", input.display());
    let text = extract_file(extractor, input)?;
    let cards = convert_text(&text)?;
    let json = to_json(&cards)?;
    let unknown = cards.iter().filter(|card| card.has_unknown_answer()).count();
    match destination {
        Destination::Stdout => println!("{json}"),
        Destination::File(path) => {
            write(path, format!("{json}\n"))?;
            println!(
                "Wrote {} flashcard(s) to {}.",
                cards.len(),
                path.display()
            );
            if unknown > 0 {
                println!("{unknown} flashcard(s) have no answer.");
            }
        }
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::read_to_string;

    use quizcards_core::load_deck;
    use tempfile::tempdir;

    use super::*;
    use crate::helper::write_file;

    const QUIZ: &str = "What is 2+2? A. 3 B. 4 C. 5 정답: B\n\nQ2\nA. x\nB. y\n";

    #[test]
    fn test_destination_from_flag() {
        let input = Path::new("/tmp/quiz.txt");
        assert_eq!(
            Destination::from_flag(input, None),
            Destination::File(PathBuf::from("/tmp/quiz.json"))
        );
        assert_eq!(
            Destination::from_flag(input, Some("-".to_string())),
            Destination::Stdout
        );
        assert_eq!(
            Destination::from_flag(input, Some("out.json".to_string())),
            Destination::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_convert_single_file() -> Fallible<()> {
        let dir = tempdir()?;
        let input = write_file(dir.path(), "quiz.txt", QUIZ)?;
        convert(input.display().to_string(), None)?;
        let cards = load_deck(&read_to_string(dir.path().join("quiz.json"))?)?;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question(), "What is 2+2?");
        assert_eq!(cards[0].answer(), "B");
        assert!(cards[1].has_unknown_answer());
        Ok(())
    }

    #[test]
    fn test_convert_with_output() -> Fallible<()> {
        let dir = tempdir()?;
        let input = write_file(dir.path(), "quiz.txt", QUIZ)?;
        let output = dir.path().join("deck.json");
        convert(
            input.display().to_string(),
            Some(output.display().to_string()),
        )?;
        assert!(output.exists());
        assert!(!dir.path().join("quiz.json").exists());
        Ok(())
    }

    #[test]
    fn test_convert_without_records_writes_nothing() -> Fallible<()> {
        let dir = tempdir()?;
        let input = write_file(dir.path(), "notes.txt", "No questions here.")?;
        let err = convert(input.display().to_string(), None).unwrap_err();
        assert_eq!(err.to_string(), "error: no valid records found");
        assert!(!dir.path().join("notes.json").exists());
        Ok(())
    }

    #[test]
    fn test_convert_non_existent_path() {
        let result = convert("./derpherp.txt".to_string(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_directory() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("nested"))?;
        write_file(dir.path(), "one.txt", QUIZ)?;
        write_file(&dir.path().join("nested"), "two.txt", QUIZ)?;
        write_file(dir.path(), "ignored.md", QUIZ)?;
        convert(dir.path().display().to_string(), None)?;
        assert!(dir.path().join("one.json").exists());
        assert!(dir.path().join("nested").join("two.json").exists());
        assert!(!dir.path().join("ignored.json").exists());
        Ok(())
    }

    #[test]
    fn test_convert_directory_reports_failures() -> Fallible<()> {
        let dir = tempdir()?;
        write_file(dir.path(), "good.txt", QUIZ)?;
        write_file(dir.path(), "bad.txt", "prose only")?;
        let err = convert(dir.path().display().to_string(), None).unwrap_err();
        assert_eq!(err.to_string(), "error: 1 of 2 file(s) failed to convert.");
        assert!(dir.path().join("good.json").exists());
        Ok(())
    }

    #[test]
    fn test_convert_empty_directory() -> Fallible<()> {
        let dir = tempdir()?;
        assert!(convert(dir.path().display().to_string(), None).is_err());
        Ok(())
    }

    #[test]
    fn test_output_flag_rejected_for_directory() -> Fallible<()> {
        let dir = tempdir()?;
        let result = convert(
            dir.path().display().to_string(),
            Some("deck.json".to_string()),
        );
        assert!(result.is_err());
        Ok(())
    }
}
