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

//! The session state machine: a linear walk over an ordered list of study
//! items with per-item reveal and answer state.
//!
//! A session starts at item 0 and ends when the last item is advanced past.
//! The item list is fixed for the lifetime of the session. All transitions
//! are total: boundary conditions are handled by no-ops or the completion
//! signal, never by errors.

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::item::StudyItem;

/// What a call to [`Session::advance`] tells the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionSignal {
    /// The session moved to the next item.
    Continue,
    /// The last item was advanced past. The caller is expected to leave the
    /// session; the session itself stays on the last item.
    Complete,
}

/// Whether an answered question was answered correctly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// A study session over a fixed, non-empty, ordered list of items.
///
/// Invariants:
///
/// - `current` is always a valid index into `items`.
/// - `revealed` and `selected_option` are cleared whenever `current` changes.
/// - `selected_option`, once set for the current index, does not change until
///   the index does (first answer wins).
pub struct Session {
    items: Vec<StudyItem>,
    current: usize,
    revealed: bool,
    selected_option: Option<usize>,
}

impl Session {
    /// Create a session over the given items. A session is never created
    /// with zero items.
    pub fn new(items: Vec<StudyItem>) -> Fallible<Self> {
        if items.is_empty() {
            return fail("cannot start a session with no items");
        }
        Ok(Session {
            items,
            current: 0,
            revealed: false,
            selected_option: None,
        })
    }

    /// The item the session is currently on.
    pub fn current_item(&self) -> &StudyItem {
        &self.items[self.current]
    }

    /// Zero-based position of the current item.
    pub fn position(&self) -> usize {
        self.current
    }

    /// Total number of items in the session.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Whether the current item's back/answer is shown.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// The option selected for the current item, if any.
    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    /// Whether the current item is the last one.
    pub fn at_last(&self) -> bool {
        self.current == self.items.len() - 1
    }

    /// Whether the current item is the first one.
    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    /// Move to the next item, clearing the reveal state. At the last item,
    /// nothing moves and `Complete` is signaled instead. No wraparound.
    pub fn advance(&mut self) -> SessionSignal {
        if self.current < self.items.len() - 1 {
            self.current += 1;
            self.revealed = false;
            self.selected_option = None;
            SessionSignal::Continue
        } else {
            SessionSignal::Complete
        }
    }

    /// Move to the previous item, clearing the reveal state. At item 0 this
    /// is a no-op. Asymmetric with `advance`, which signals completion at
    /// the upper boundary.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.revealed = false;
            self.selected_option = None;
        }
    }

    /// Show the back of the current flashcard, or the answer to the current
    /// question. For questions, `chosen` is recorded as the selected option
    /// only if no option has been selected yet and the index is in range;
    /// an answered question cannot be re-answered. For flashcards `chosen`
    /// is ignored.
    pub fn reveal(&mut self, chosen: Option<usize>) {
        self.revealed = true;
        let option_count = match &self.items[self.current] {
            StudyItem::Question { options, .. } => options.len(),
            StudyItem::Flashcard { .. } => return,
        };
        if self.selected_option.is_none() {
            if let Some(index) = chosen {
                if index < option_count {
                    self.selected_option = Some(index);
                }
            }
        }
    }

    /// Correctness of the current item's answer: a pure comparison of the
    /// selected option against the correct one. `None` before an answer is
    /// selected, and always `None` for flashcards. No running score is kept
    /// here; tallying is the caller's business.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.current_item() {
            StudyItem::Flashcard { .. } => None,
            StudyItem::Question { correct_option, .. } => {
                self.selected_option.map(|selected| {
                    if selected == *correct_option {
                        Outcome::Correct
                    } else {
                        Outcome::Incorrect
                    }
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str, back: &str) -> StudyItem {
        StudyItem::Flashcard {
            front: front.to_string(),
            back: back.to_string(),
        }
    }

    fn question(prompt: &str, options: &[&str], correct: usize) -> StudyItem {
        StudyItem::Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option: correct,
            explanation: format!("because {}", options[correct]),
        }
    }

    fn three_cards() -> Vec<StudyItem> {
        vec![card("a", "A"), card("b", "B"), card("c", "C")]
    }

    #[test]
    fn test_empty_session_rejected() {
        assert!(Session::new(vec![]).is_err());
    }

    #[test]
    fn test_initial_state() -> Fallible<()> {
        let session = Session::new(three_cards())?;
        assert_eq!(session.position(), 0);
        assert_eq!(session.total(), 3);
        assert!(!session.revealed());
        assert_eq!(session.selected_option(), None);
        assert!(session.at_first());
        assert!(!session.at_last());
        Ok(())
    }

    /// Starting at index 0, advancing N-1 times reaches index N-1, and a
    /// further advance reports completion rather than moving.
    #[test]
    fn test_advance_to_completion() -> Fallible<()> {
        let mut session = Session::new(three_cards())?;
        assert_eq!(session.advance(), SessionSignal::Continue);
        assert_eq!(session.advance(), SessionSignal::Continue);
        assert_eq!(session.position(), 2);
        assert!(session.at_last());
        assert_eq!(session.advance(), SessionSignal::Complete);
        assert_eq!(session.position(), 2);
        Ok(())
    }

    #[test]
    fn test_single_item_completes_immediately() -> Fallible<()> {
        let mut session = Session::new(vec![card("only", "one")])?;
        assert!(session.at_last());
        assert_eq!(session.advance(), SessionSignal::Complete);
        assert_eq!(session.position(), 0);
        Ok(())
    }

    /// Retreat from i > 0 reaches i - 1; retreat from 0 is a no-op.
    #[test]
    fn test_retreat() -> Fallible<()> {
        let mut session = Session::new(three_cards())?;
        session.advance();
        session.advance();
        session.retreat();
        assert_eq!(session.position(), 1);
        session.retreat();
        assert_eq!(session.position(), 0);
        session.retreat();
        assert_eq!(session.position(), 0);
        Ok(())
    }

    /// Reveal followed by advance or retreat clears the reveal state for
    /// the new index.
    #[test]
    fn test_navigation_resets_reveal() -> Fallible<()> {
        let mut session = Session::new(three_cards())?;
        session.reveal(None);
        assert!(session.revealed());
        session.advance();
        assert!(!session.revealed());
        assert_eq!(session.selected_option(), None);
        session.reveal(None);
        session.retreat();
        assert!(!session.revealed());
        Ok(())
    }

    /// First answer wins: a second reveal with a different option does not
    /// overwrite the selection.
    #[test]
    fn test_first_answer_wins() -> Fallible<()> {
        let items = vec![question("q", &["x", "y", "z"], 1)];
        let mut session = Session::new(items)?;
        session.reveal(Some(0));
        assert_eq!(session.selected_option(), Some(0));
        session.reveal(Some(2));
        assert_eq!(session.selected_option(), Some(0));
        assert_eq!(session.outcome(), Some(Outcome::Incorrect));
        Ok(())
    }

    #[test]
    fn test_out_of_range_option_ignored() -> Fallible<()> {
        let items = vec![question("q", &["x", "y"], 0)];
        let mut session = Session::new(items)?;
        session.reveal(Some(5));
        assert!(session.revealed());
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.outcome(), None);
        session.reveal(Some(1));
        assert_eq!(session.selected_option(), Some(1));
        Ok(())
    }

    #[test]
    fn test_flashcard_ignores_chosen_option() -> Fallible<()> {
        let mut session = Session::new(three_cards())?;
        session.reveal(Some(0));
        assert!(session.revealed());
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.outcome(), None);
        Ok(())
    }

    /// The two-question quiz scenario: answer, advance, answer wrong,
    /// advance at the last index signals completion.
    #[test]
    fn test_quiz_walkthrough() -> Fallible<()> {
        let items = vec![
            question("q1", &["a", "b"], 1),
            question("q2", &["a", "b"], 0),
        ];
        let mut session = Session::new(items)?;

        session.reveal(Some(1));
        assert!(session.revealed());
        assert_eq!(session.selected_option(), Some(1));
        assert_eq!(session.outcome(), Some(Outcome::Correct));

        assert_eq!(session.advance(), SessionSignal::Continue);
        assert_eq!(session.position(), 1);
        assert!(!session.revealed());
        assert_eq!(session.selected_option(), None);

        session.reveal(Some(1));
        assert_eq!(session.selected_option(), Some(1));
        assert_eq!(session.outcome(), Some(Outcome::Incorrect));

        assert_eq!(session.advance(), SessionSignal::Complete);
        Ok(())
    }

    /// The flashcard scenario: flip, retreat at 0 is a no-op, advance
    /// lands unflipped on the next card.
    #[test]
    fn test_flashcard_walkthrough() -> Fallible<()> {
        let mut session = Session::new(three_cards())?;
        assert!(!session.revealed());
        session.reveal(None);
        assert!(session.revealed());
        session.retreat();
        assert_eq!(session.position(), 0);
        assert_eq!(session.advance(), SessionSignal::Continue);
        assert_eq!(session.position(), 1);
        assert!(!session.revealed());
        Ok(())
    }
}
