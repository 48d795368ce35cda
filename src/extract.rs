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

//! The boundary to document text extraction.
//!
//! Extraction is a black box: given the bytes of a document it returns
//! best-effort plain text, or fails. Any failure aborts the conversion of
//! that file with a single "processing failed" error.

use std::fs::read;
use std::path::Path;

use quizcards_core::ErrorReport;
use quizcards_core::Fallible;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub trait Extractor {
    fn extract(&self, bytes: &[u8]) -> Fallible<String>;
}

/// Reads documents that were already extracted to UTF-8 text.
pub struct PlainTextExtractor;

impl Extractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Fallible<String> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Read the file at `path` and extract its text.
pub fn extract_file(extractor: &dyn Extractor, path: &Path) -> Fallible<String> {
    read(path)
        .map_err(ErrorReport::from)
        .and_then(|bytes| extractor.extract(&bytes))
        .map_err(|e| {
            ErrorReport::new(format!(
                "processing failed for {}: {}",
                path.display(),
                e.message()
            ))
        })
}
