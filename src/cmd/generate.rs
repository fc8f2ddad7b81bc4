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

use studpal_core::assistant::Assistant;
use studpal_core::assistant::CannedAssistant;
use studpal_core::assistant::QuestionDifficulty;
use studpal_core::catalog::Catalog;

use crate::error::Fallible;

/// Request flashcards for a deck. The generation backend is a placeholder;
/// this prints the service's acknowledgment.
pub fn generate_flashcards(deck: Option<String>) -> Fallible<()> {
    let catalog = Catalog::seed()?;
    let deck = catalog.deck(deck.as_deref())?;
    let assistant = CannedAssistant;
    let ack = assistant.generate_flashcards(&deck.title)?;
    println!("{ack}");
    Ok(())
}

/// Request practice questions for a subject.
pub fn generate_questions(
    subject: Option<String>,
    difficulty: String,
    count: usize,
) -> Fallible<()> {
    let difficulty = QuestionDifficulty::try_from(difficulty)?;
    let catalog = Catalog::seed()?;
    let subject = catalog.subject(subject.as_deref())?;
    let assistant = CannedAssistant;
    let ack = assistant.generate_questions(&subject.title, difficulty, count)?;
    println!("{ack}");
    Ok(())
}
