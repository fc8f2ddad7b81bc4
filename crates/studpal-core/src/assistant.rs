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

//! The study assistant interface.
//!
//! There is no real model behind this. The assistant and the card/question
//! generators are modeled as a request/response service so a real backend
//! can slot in later; the bundled implementation returns canned
//! acknowledgments.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// The assistant's opening message.
pub const GREETING: &str = "Hello! I'm your AI study assistant. How can I help you today?";

/// Requested difficulty for generated questions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuestionDifficulty {
    Easy,
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionDifficulty::Easy => "easy",
            QuestionDifficulty::Medium => "medium",
            QuestionDifficulty::Hard => "hard",
        }
    }
}

impl Display for QuestionDifficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for QuestionDifficulty {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "easy" => Ok(QuestionDifficulty::Easy),
            "medium" => Ok(QuestionDifficulty::Medium),
            "hard" => Ok(QuestionDifficulty::Hard),
            _ => fail(format!("invalid difficulty: {value}")),
        }
    }
}

/// The assistant service.
pub trait Assistant {
    /// Answer a study question.
    fn reply(&self, question: &str) -> Fallible<String>;

    /// Request flashcards for a deck.
    fn generate_flashcards(&self, deck_title: &str) -> Fallible<String>;

    /// Request practice questions for a subject.
    fn generate_questions(
        &self,
        subject_title: &str,
        difficulty: QuestionDifficulty,
        count: usize,
    ) -> Fallible<String>;
}

/// The stand-in assistant: fixed replies, no inference.
pub struct CannedAssistant;

impl Assistant for CannedAssistant {
    fn reply(&self, question: &str) -> Fallible<String> {
        if question.trim().is_empty() {
            return fail("question is empty");
        }
        Ok("I'm processing your question. This is a mock response for now.".to_string())
    }

    fn generate_flashcards(&self, deck_title: &str) -> Fallible<String> {
        Ok(format!("Generating flashcards for \"{deck_title}\"..."))
    }

    fn generate_questions(
        &self,
        subject_title: &str,
        difficulty: QuestionDifficulty,
        count: usize,
    ) -> Fallible<String> {
        Ok(format!(
            "Generating {count} {difficulty} difficulty questions for \"{subject_title}\"..."
        ))
    }
}
