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

//! Catalog metadata: decks, subjects, materials, and study groups.

use serde::Deserialize;
use serde::Serialize;

use crate::types::date::Date;
use crate::types::item::StudyItem;

/// A deck of flashcards.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub description: String,
    pub cards: Vec<StudyItem>,
    pub last_studied: Date,
}

impl Deck {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

/// An exam prep subject with its practice questions.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Subject {
    pub title: String,
    pub description: String,
    pub questions: Vec<StudyItem>,
    pub last_practiced: Date,
}

impl Subject {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// A shared study material.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub title: String,
    pub description: String,
    pub category: String,
    pub public: bool,
    pub created_at: Date,
    pub author: String,
}

/// A member of a study group.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Member { name: name.into() }
    }
}

/// A study group.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StudyGroup {
    pub name: String,
    pub subject: String,
    pub members: Vec<Member>,
    pub last_active: Date,
}

impl StudyGroup {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
