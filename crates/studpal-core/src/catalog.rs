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

//! The in-memory catalog of decks, subjects, materials, and groups.
//!
//! Everything here is seed data: there is no persistence layer, and nothing
//! is written back. In a real deployment this would be a content-fetch
//! service; sessions only ever see the item lists it hands out.

use chrono::NaiveDate;

use crate::chat::ChatMessage;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::date::Date;
use crate::types::deck::Deck;
use crate::types::deck::Member;
use crate::types::deck::StudyGroup;
use crate::types::deck::StudyMaterial;
use crate::types::deck::Subject;
use crate::types::item::StudyItem;
use crate::types::timestamp::Timestamp;

/// The name the local user posts chat messages under.
pub const LOCAL_USER: &str = "John Doe";

pub struct Catalog {
    decks: Vec<Deck>,
    subjects: Vec<Subject>,
    materials: Vec<StudyMaterial>,
    groups: Vec<StudyGroup>,
}

impl Catalog {
    /// Build the seeded catalog.
    pub fn seed() -> Fallible<Self> {
        Ok(Catalog {
            decks: seed_decks()?,
            subjects: seed_subjects()?,
            materials: seed_materials()?,
            groups: seed_groups()?,
        })
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn materials(&self) -> &[StudyMaterial] {
        &self.materials
    }

    pub fn groups(&self) -> &[StudyGroup] {
        &self.groups
    }

    /// Look up a deck by title. With no title, the first deck is used.
    pub fn deck(&self, title: Option<&str>) -> Fallible<&Deck> {
        match title {
            Some(title) => match self.decks.iter().find(|d| d.title == title) {
                Some(deck) => Ok(deck),
                None => fail(format!("no deck named '{title}'")),
            },
            None => Ok(&self.decks[0]),
        }
    }

    /// Look up a subject by title. With no title, the first subject is used.
    pub fn subject(&self, title: Option<&str>) -> Fallible<&Subject> {
        match title {
            Some(title) => match self.subjects.iter().find(|s| s.title == title) {
                Some(subject) => Ok(subject),
                None => fail(format!("no subject named '{title}'")),
            },
            None => Ok(&self.subjects[0]),
        }
    }

    /// Look up a study group by name. With no name, the first group is used.
    pub fn group(&self, name: Option<&str>) -> Fallible<&StudyGroup> {
        match name {
            Some(name) => match self.groups.iter().find(|g| g.name == name) {
                Some(group) => Ok(group),
                None => fail(format!("no study group named '{name}'")),
            },
            None => Ok(&self.groups[0]),
        }
    }

    /// The opening transcript every group chat starts with.
    pub fn transcript(&self) -> Fallible<Vec<ChatMessage>> {
        let lines = [
            ("John Doe", "10:00", "Hey everyone! Ready for our study session?"),
            (
                "Jane Smith",
                "10:05",
                "Yes, I'm ready! What topic are we covering today?",
            ),
            (
                "John Doe",
                "10:10",
                "I think we should focus on cell structure and function.",
            ),
            (
                "Mike Johnson",
                "10:15",
                "That sounds good. I have some notes I can share.",
            ),
            (
                "Sarah Williams",
                "10:20",
                "Great! I'll create a shared document for our notes.",
            ),
        ];
        let mut messages = Vec::new();
        for (author, time, text) in lines {
            let sent_at = Timestamp::try_from(format!("2023-05-15T{time}:00.000"))?;
            messages.push(ChatMessage {
                author: author.to_string(),
                text: text.to_string(),
                sent_at,
            });
        }
        Ok(messages)
    }
}

fn ymd(y: i32, m: u32, d: u32) -> Fallible<Date> {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => Ok(Date::new(date)),
        None => fail("invalid seed date"),
    }
}

fn flashcard(front: &str, back: &str) -> StudyItem {
    StudyItem::Flashcard {
        front: front.to_string(),
        back: back.to_string(),
    }
}

fn question(prompt: &str, options: &[&str], correct: usize, explanation: &str) -> StudyItem {
    StudyItem::Question {
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option: correct,
        explanation: explanation.to_string(),
    }
}

fn seed_decks() -> Fallible<Vec<Deck>> {
    Ok(vec![
        Deck {
            title: "Biology Cell Structure".to_string(),
            description: "Flashcards about cell organelles and their functions".to_string(),
            cards: vec![
                flashcard(
                    "What is the function of the nucleus?",
                    "The nucleus controls and regulates cell activities and contains genetic \
                     material (DNA).",
                ),
                flashcard(
                    "What is the function of mitochondria?",
                    "Mitochondria are the powerhouse of the cell, producing energy through \
                     cellular respiration.",
                ),
                flashcard(
                    "What is the function of the cell membrane?",
                    "The cell membrane regulates what enters and exits the cell, providing \
                     protection and structure.",
                ),
            ],
            last_studied: ymd(2023, 5, 15)?,
        },
        Deck {
            title: "Chemistry Elements".to_string(),
            description: "Common elements and their properties".to_string(),
            cards: vec![
                flashcard(
                    "What is the chemical symbol for sodium?",
                    "Na, from the Latin 'natrium'.",
                ),
                flashcard("Which element has atomic number 6?", "Carbon."),
                flashcard(
                    "What is the most abundant gas in Earth's atmosphere?",
                    "Nitrogen, about 78% by volume.",
                ),
            ],
            last_studied: ymd(2023, 5, 10)?,
        },
        Deck {
            title: "Physics Forces".to_string(),
            description: "Different types of forces and their applications".to_string(),
            cards: vec![
                flashcard(
                    "What does Newton's first law state?",
                    "An object remains at rest or in uniform motion unless acted on by a net \
                     external force.",
                ),
                flashcard("What is the SI unit of force?", "The newton (N)."),
                flashcard(
                    "What force opposes the relative motion of surfaces in contact?",
                    "Friction.",
                ),
            ],
            last_studied: ymd(2023, 5, 5)?,
        },
    ])
}

fn seed_subjects() -> Fallible<Vec<Subject>> {
    Ok(vec![
        Subject {
            title: "Biology".to_string(),
            description: "Cell structure, genetics, and ecosystems".to_string(),
            questions: vec![
                question(
                    "What is the function of the cell membrane?",
                    &[
                        "To protect the cell from external threats",
                        "To regulate what enters and exits the cell",
                        "To produce energy for the cell",
                        "To store genetic material",
                    ],
                    1,
                    "The cell membrane regulates what enters and exits the cell, providing \
                     protection and structure.",
                ),
                question(
                    "Which organelle is known as the powerhouse of the cell?",
                    &[
                        "Nucleus",
                        "Mitochondria",
                        "Golgi apparatus",
                        "Endoplasmic reticulum",
                    ],
                    1,
                    "Mitochondria are known as the powerhouse of the cell because they produce \
                     energy through cellular respiration.",
                ),
                question(
                    "What is the function of the nucleus?",
                    &[
                        "To produce proteins",
                        "To control and regulate cell activities",
                        "To transport materials within the cell",
                        "To break down waste materials",
                    ],
                    1,
                    "The nucleus controls and regulates cell activities and contains genetic \
                     material (DNA).",
                ),
            ],
            last_practiced: ymd(2023, 5, 15)?,
        },
        Subject {
            title: "Chemistry".to_string(),
            description: "Atomic structure, chemical bonds, and reactions".to_string(),
            questions: vec![
                question(
                    "Which subatomic particle carries a negative charge?",
                    &["Proton", "Neutron", "Electron", "Photon"],
                    2,
                    "Electrons carry a negative charge and orbit the nucleus.",
                ),
                question(
                    "Which type of bond involves sharing electron pairs between atoms?",
                    &["Ionic", "Covalent", "Metallic", "Hydrogen"],
                    1,
                    "A covalent bond forms when two atoms share one or more electron pairs.",
                ),
                question(
                    "What is the pH of a neutral solution at 25°C?",
                    &["0", "7", "14", "1"],
                    1,
                    "Pure water at 25°C has a pH of 7, the midpoint of the scale.",
                ),
            ],
            last_practiced: ymd(2023, 5, 10)?,
        },
        Subject {
            title: "Physics".to_string(),
            description: "Mechanics, thermodynamics, and waves".to_string(),
            questions: vec![
                question(
                    "Which quantity is measured in joules?",
                    &["Force", "Energy", "Power", "Pressure"],
                    1,
                    "The joule is the SI unit of energy and work.",
                ),
                question(
                    "Which of these waves does not require a medium to travel?",
                    &["Sound waves", "Water waves", "Light waves", "Seismic waves"],
                    2,
                    "Light is an electromagnetic wave and propagates through a vacuum.",
                ),
                question(
                    "According to the second law of thermodynamics, the entropy of an isolated \
                     system...",
                    &[
                        "Always decreases",
                        "Stays constant",
                        "Never decreases",
                        "Is always zero",
                    ],
                    2,
                    "The entropy of an isolated system never decreases over time.",
                ),
            ],
            last_practiced: ymd(2023, 5, 5)?,
        },
    ])
}

fn seed_materials() -> Fallible<Vec<StudyMaterial>> {
    Ok(vec![
        StudyMaterial {
            title: "Biology Chapter 5 Notes".to_string(),
            description: "Notes on cell structure and function".to_string(),
            category: "Biology".to_string(),
            public: true,
            created_at: ymd(2023, 5, 15)?,
            author: LOCAL_USER.to_string(),
        },
        StudyMaterial {
            title: "Chemistry Formula Sheet".to_string(),
            description: "Common formulas for organic chemistry".to_string(),
            category: "Chemistry".to_string(),
            public: false,
            created_at: ymd(2023, 5, 10)?,
            author: LOCAL_USER.to_string(),
        },
        StudyMaterial {
            title: "Physics Laws Summary".to_string(),
            description: "Key physics laws and equations".to_string(),
            category: "Physics".to_string(),
            public: true,
            created_at: ymd(2023, 5, 5)?,
            author: LOCAL_USER.to_string(),
        },
    ])
}

fn seed_groups() -> Fallible<Vec<StudyGroup>> {
    Ok(vec![
        StudyGroup {
            name: "Biology Study Group".to_string(),
            subject: "Biology".to_string(),
            members: vec![
                Member::new("John Doe"),
                Member::new("Jane Smith"),
                Member::new("Mike Johnson"),
                Member::new("Sarah Williams"),
                Member::new("David Brown"),
            ],
            last_active: ymd(2023, 5, 15)?,
        },
        StudyGroup {
            name: "Chemistry Lab Partners".to_string(),
            subject: "Chemistry".to_string(),
            members: vec![
                Member::new("John Doe"),
                Member::new("Emily Davis"),
                Member::new("Robert Wilson"),
            ],
            last_active: ymd(2023, 5, 10)?,
        },
        StudyGroup {
            name: "Physics Problem Solvers".to_string(),
            subject: "Physics".to_string(),
            members: vec![
                Member::new("John Doe"),
                Member::new("Lisa Anderson"),
                Member::new("Tom Martinez"),
                Member::new("Rachel Taylor"),
            ],
            last_active: ymd(2023, 5, 5)?,
        },
    ])
}
