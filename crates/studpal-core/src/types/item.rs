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

use crate::types::item_hash::Hasher;
use crate::types::item_hash::ItemHash;

/// A single study item. Immutable within a session.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StudyItem {
    /// A two-sided flashcard.
    Flashcard { front: String, back: String },
    /// A multiple-choice question.
    Question {
        prompt: String,
        options: Vec<String>,
        /// Index into `options` of the correct answer.
        correct_option: usize,
        /// Shown after the question is answered.
        explanation: String,
    },
}

impl StudyItem {
    /// The item's identity: a hash of its content. Identical content means
    /// the same item.
    pub fn hash(&self) -> ItemHash {
        let mut hasher = Hasher::new();
        match self {
            StudyItem::Flashcard { front, back } => {
                hasher.update(b"flashcard");
                hasher.update(front.as_bytes());
                hasher.update(b"\x00");
                hasher.update(back.as_bytes());
            }
            StudyItem::Question {
                prompt,
                options,
                correct_option,
                explanation,
            } => {
                hasher.update(b"question");
                hasher.update(prompt.as_bytes());
                for option in options {
                    hasher.update(b"\x00");
                    hasher.update(option.as_bytes());
                }
                hasher.update(b"\x00");
                hasher.update(&correct_option.to_le_bytes());
                hasher.update(explanation.as_bytes());
            }
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flashcard(front: &str, back: &str) -> StudyItem {
        StudyItem::Flashcard {
            front: front.to_string(),
            back: back.to_string(),
        }
    }

    #[test]
    fn test_hash_is_content_addressed() {
        let a = flashcard("front", "back");
        let b = flashcard("front", "back");
        assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn test_hash_distinguishes_sides() {
        // The separator means ("ab", "c") and ("a", "bc") hash differently.
        let a = flashcard("ab", "c");
        let b = flashcard("a", "bc");
        assert_ne!(a.hash(), b.hash());
    }

    #[test]
    fn test_hash_distinguishes_variants() {
        let card = flashcard("p", "x");
        let question = StudyItem::Question {
            prompt: "p".to_string(),
            options: vec!["x".to_string()],
            correct_option: 0,
            explanation: String::new(),
        };
        assert_ne!(card.hash(), question.hash());
    }
}
