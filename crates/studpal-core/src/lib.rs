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

//! studpal-core: Core library for the studpal study assistant.
//!
//! This library provides the UI-independent types and logic for:
//! - Study sessions over flashcards and quiz questions
//! - The seed catalog of decks, subjects, materials, and groups
//! - The study group chat model with simulated incoming messages
//! - The (canned) study assistant interface

pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod error;
pub mod rng;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use assistant::{Assistant, CannedAssistant, QuestionDifficulty};
pub use catalog::{Catalog, LOCAL_USER};
pub use chat::{ChatMessage, ChatRoom, MessageSource, SimulatedFeed};
pub use error::{ErrorReport, Fallible, fail};
pub use session::{Outcome, Session, SessionSignal};
pub use types::date::Date;
pub use types::deck::{Deck, Member, StudyGroup, StudyMaterial, Subject};
pub use types::item::StudyItem;
pub use types::item_hash::ItemHash;
pub use types::timestamp::Timestamp;
