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

//! quizcards-core: Core library for the quizcards converter.
//!
//! This library turns the plain text extracted from a quiz document into
//! question/options/answer flashcards:
//! - Normalizing extracted text into one marker per line
//! - Classifying lines
//! - Segmenting the line stream into records
//! - Reading and writing the JSON deck format

pub mod assemble;
pub mod classify;
pub mod deck;
pub mod error;
pub mod normalize;
pub mod segment;
pub mod types;

// Re-exports for convenience
pub use classify::LineKind;
pub use classify::classify;
pub use deck::convert_text;
pub use deck::load_deck;
pub use deck::to_json;
pub use error::{ErrorReport, Fallible, fail};
pub use normalize::normalize;
pub use segment::Cursor;
pub use segment::Segmenter;
pub use segment::parse;
pub use types::flashcard::Flashcard;
